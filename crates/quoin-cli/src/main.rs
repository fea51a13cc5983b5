//! quoin CLI - bundler configuration synthesis.
//!
//! Entry point: parses command-line arguments, initializes logging, and
//! dispatches to the build or serve synthesis.

use clap::Parser;
use miette::Result;
use quoin_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Build(emit) => commands::build_execute(emit),
        cli::Command::Serve(emit) => commands::serve_execute(emit),
    };

    result.map_err(error::to_report)
}
