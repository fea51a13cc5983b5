//! CLI error handling.

use quoin_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-synthesis errors (missing env, bad compiler config)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert CLI errors to miette reports for terminal rendering.
pub fn to_report(err: CliError) -> miette::Report {
    match &err {
        CliError::Config(ConfigError::MissingEnv { .. }) => miette::miette!(
            help = "set QUOIN_SWC_CONFIG and QUOIN_POSTCSS_CONFIG to the compiler and \
                    stylesheet-processor config file paths",
            "{err}"
        ),
        CliError::Config(ConfigError::Parse { .. }) => miette::miette!(
            help = "the compiler config must be a JSON object, e.g. the project's .swcrc",
            "{err}"
        ),
        _ => miette::miette!("{err}"),
    }
}
