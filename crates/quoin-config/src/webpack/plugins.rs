use serde::Serialize;
use serde_json::Value;

/// A named plugin and its options payload, identified the way the
/// external engine resolves it.
#[derive(Debug, Clone, Serialize)]
pub struct PluginDescriptor {
    pub name: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// A plugin that takes no options.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

/// Ordered plugin list. Membership is decided by explicit predicates at
/// append time; excluded plugins are never added and later stripped.
#[derive(Debug, Clone, Default)]
pub struct PluginList {
    plugins: Vec<PluginDescriptor>,
}

impl PluginList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, plugin: PluginDescriptor) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn push_if(self, include: bool, plugin: PluginDescriptor) -> Self {
        if include {
            self.push(plugin)
        } else {
            self
        }
    }

    pub fn into_vec(self) -> Vec<PluginDescriptor> {
        self.plugins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_if_appends_only_when_predicate_holds() {
        let plugins = PluginList::new()
            .push(PluginDescriptor::new("always", json!({})))
            .push_if(false, PluginDescriptor::bare("skipped"))
            .push_if(true, PluginDescriptor::bare("kept"))
            .into_vec();

        let names: Vec<&str> = plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["always", "kept"]);
    }

    #[test]
    fn bare_plugin_serializes_without_options_key() {
        let value = serde_json::to_value(PluginDescriptor::bare("refresh")).unwrap();
        assert_eq!(value, json!({ "name": "refresh" }));
    }
}
