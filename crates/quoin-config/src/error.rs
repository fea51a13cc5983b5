//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every failure indicates a misconfigured invocation; nothing here is
/// transient and nothing is retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {name} is not set")]
    MissingEnv { name: &'static str },

    #[error("compiler config not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("compiler config is not well-formed: {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },
}
