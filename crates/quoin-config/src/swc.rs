//! Compiler configuration loading.

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Browser support range assumed when the compiler config declares none.
pub const DEFAULT_TARGETS: &str = "> 0.25, not dead";

/// The compiler configuration document, loaded once per synthesis.
///
/// The document is opaque apart from one enrichment: a default
/// `env.targets` support range is filled in when the file declares none.
/// Anything the file does declare is left untouched.
#[derive(Debug, Clone)]
pub struct SwcConfig {
    raw: Value,
}

impl SwcConfig {
    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] if the file is absent or unreadable,
    /// [`ConfigError::Parse`] if it is not a well-formed JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut raw: Value = serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;

        let Some(doc) = raw.as_object_mut() else {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                detail: "expected a JSON object".to_string(),
            });
        };

        let defaults = json!({ "env": { "targets": DEFAULT_TARGETS } });
        if let Some(defaults) = defaults.as_object() {
            merge_missing(doc, defaults);
        }

        let config = Self { raw };
        debug!(targets = config.targets(), "loaded compiler config");
        Ok(config)
    }

    /// The effective browser support range. `load` guarantees a value.
    pub fn targets(&self) -> &str {
        self.raw
            .get("env")
            .and_then(|env| env.get("targets"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TARGETS)
    }

    /// The full document, embedded verbatim as the compiler-stage options.
    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}

/// Fill keys from `defaults` that are absent in `target`, recursing into
/// nested objects. Existing values always win, whatever their type.
pub(crate) fn merge_missing(target: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (key, default) in defaults {
        match target.get_mut(key) {
            Some(Value::Object(existing)) => {
                if let Value::Object(default) = default {
                    merge_missing(existing, default);
                }
            }
            Some(_) => {}
            None => {
                target.insert(key.clone(), default.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn merge_fills_absent_keys() {
        let mut target = obj(json!({}));
        let defaults = obj(json!({ "env": { "targets": "defaults" } }));

        merge_missing(&mut target, &defaults);

        assert_eq!(target["env"]["targets"], json!("defaults"));
    }

    #[test]
    fn merge_never_overwrites_existing_values() {
        let mut target = obj(json!({ "env": { "targets": "last 2 versions" } }));
        let defaults = obj(json!({ "env": { "targets": "defaults" } }));

        merge_missing(&mut target, &defaults);

        assert_eq!(target["env"]["targets"], json!("last 2 versions"));
    }

    #[test]
    fn merge_recurses_without_clobbering_siblings() {
        let mut target = obj(json!({ "env": { "mode": "usage" } }));
        let defaults = obj(json!({ "env": { "targets": "defaults" } }));

        merge_missing(&mut target, &defaults);

        assert_eq!(target["env"]["mode"], json!("usage"));
        assert_eq!(target["env"]["targets"], json!("defaults"));
    }

    #[test]
    fn merge_leaves_non_object_values_alone() {
        let mut target = obj(json!({ "env": "chrome" }));
        let defaults = obj(json!({ "env": { "targets": "defaults" } }));

        merge_missing(&mut target, &defaults);

        assert_eq!(target["env"], json!("chrome"));
    }
}
