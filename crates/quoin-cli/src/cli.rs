//! Command-line interface definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use quoin_config::Mode;

/// Synthesize the bundler configuration for a frontend project.
#[derive(Parser, Debug)]
#[command(name = "quoin", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize the one-shot build configuration
    ///
    /// Output filenames carry a content hash for long-term caching and
    /// the dev-server block is omitted entirely. Defaults to production
    /// mode.
    Build(EmitArgs),

    /// Synthesize the interactive-session configuration
    ///
    /// Enables the dev-server block with hot module exchange; filename
    /// hashing is disabled so modules can be exchanged in place.
    /// Defaults to development mode.
    Serve(EmitArgs),
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Project root directory
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Build mode override
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Robots file copied into the output directory
    /// (default: <ROOT>/robots.txt)
    #[arg(long, value_name = "PATH")]
    pub robots: Option<PathBuf>,

    /// Favicon referenced from the generated HTML document
    /// (default: <ROOT>/favicon.ico)
    #[arg(long, value_name = "PATH")]
    pub favicon: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Production,
    Development,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Production => Mode::Production,
            ModeArg::Development => Mode::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_mode_override() {
        let cli = Cli::parse_from(["quoin", "serve", ".", "--mode", "production"]);
        match cli.command {
            Command::Serve(emit) => assert_eq!(emit.mode, Some(ModeArg::Production)),
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
