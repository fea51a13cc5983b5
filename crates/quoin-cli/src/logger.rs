//! Logging setup for the quoin binary.
//!
//! Logs go to stderr; stdout is reserved for the emitted configuration
//! document.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Level precedence: `--verbose`, then `--quiet`, then `RUST_LOG`, then
/// info for the quoin crates.
pub fn init(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("quoin_config=debug,quoin_cli=debug")
    } else if quiet {
        EnvFilter::new("quoin_config=error,quoin_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("quoin_config=info,quoin_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && colors_supported())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn colors_supported() -> bool {
    // NO_COLOR and FORCE_COLOR are the cross-tool conventions.
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
