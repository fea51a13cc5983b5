//! Locations of the externally authored configuration fragments.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Environment variable holding the compiler configuration path.
pub const SWC_CONFIG_ENV: &str = "QUOIN_SWC_CONFIG";

/// Environment variable holding the stylesheet-processor configuration path.
pub const POSTCSS_CONFIG_ENV: &str = "QUOIN_POSTCSS_CONFIG";

/// Paths to the compiler and stylesheet-processor configuration files.
///
/// Both are required; resolving them happens before any other work so a
/// misconfigured invocation fails immediately.
#[derive(Debug, Clone)]
pub struct ExternalSources {
    pub swc_config: PathBuf,
    pub postcss_config: PathBuf,
}

impl ExternalSources {
    pub fn new(swc_config: impl Into<PathBuf>, postcss_config: impl Into<PathBuf>) -> Self {
        Self {
            swc_config: swc_config.into(),
            postcss_config: postcss_config.into(),
        }
    }

    /// Read both locations from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read both locations through a lookup function. Unset and empty
    /// values are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let swc_config = required(&lookup, SWC_CONFIG_ENV)?;
        let postcss_config = required(&lookup, POSTCSS_CONFIG_ENV)?;
        Ok(Self {
            swc_config,
            postcss_config,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingEnv { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_paths() {
        let sources = ExternalSources::from_lookup(|name| match name {
            SWC_CONFIG_ENV => Some("/etc/swcrc.json".to_string()),
            POSTCSS_CONFIG_ENV => Some("/etc/postcss.config.js".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(sources.swc_config, PathBuf::from("/etc/swcrc.json"));
        assert_eq!(
            sources.postcss_config,
            PathBuf::from("/etc/postcss.config.js")
        );
    }

    #[test]
    fn missing_compiler_config_is_fatal() {
        let result = ExternalSources::from_lookup(|name| match name {
            POSTCSS_CONFIG_ENV => Some("/etc/postcss.config.js".to_string()),
            _ => None,
        });

        match result {
            Err(ConfigError::MissingEnv { name }) => assert_eq!(name, SWC_CONFIG_ENV),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    fn missing_postcss_config_is_fatal() {
        let result = ExternalSources::from_lookup(|name| match name {
            SWC_CONFIG_ENV => Some("/etc/swcrc.json".to_string()),
            _ => None,
        });

        match result {
            Err(ConfigError::MissingEnv { name }) => assert_eq!(name, POSTCSS_CONFIG_ENV),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let result = ExternalSources::from_lookup(|name| match name {
            SWC_CONFIG_ENV => Some(String::new()),
            POSTCSS_CONFIG_ENV => Some("/etc/postcss.config.js".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnv {
                name: SWC_CONFIG_ENV
            })
        ));
    }
}
