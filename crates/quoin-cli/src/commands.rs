//! Command execution: gather inputs, synthesize, emit.

use std::fs;

use tracing::{debug, info};

use crate::cli::EmitArgs;
use crate::error::Result;
use quoin_config::{generate, AssetPaths, BuildContext, ExternalSources, Mode};

pub fn build_execute(args: EmitArgs) -> Result<()> {
    execute(args, Mode::Production, false)
}

pub fn serve_execute(args: EmitArgs) -> Result<()> {
    execute(args, Mode::Development, true)
}

fn execute(args: EmitArgs, default_mode: Mode, serve: bool) -> Result<()> {
    // The two external config locations are required; resolve them before
    // any other work so a misconfigured invocation fails immediately.
    let sources = ExternalSources::from_env()?;

    let mode = args.mode.map(Mode::from).unwrap_or(default_mode);
    let robots = args
        .robots
        .unwrap_or_else(|| args.root.join("robots.txt"));
    let favicon = args
        .favicon
        .unwrap_or_else(|| args.root.join("favicon.ico"));
    let context = BuildContext::new(args.root, mode, serve, AssetPaths::new(robots, favicon));

    debug!(mode = ?context.mode, serve, root = %context.root.display(), "synthesizing");
    let config = generate(&context, &sources)?;

    let mut document = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    document.push('\n');

    match &args.out {
        Some(path) => {
            fs::write(path, document)?;
            info!(path = %path.display(), "configuration written");
        }
        None => print!("{document}"),
    }

    Ok(())
}
