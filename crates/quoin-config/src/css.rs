//! CSS-modules naming and export policy.

use serde::Serialize;

/// How class-name identifiers in a stylesheet chain are scoped: locally
/// renamed per file, or left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CssScope {
    Local,
    Global,
}

/// Identifier-conversion convention for class names referenced from code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalsConvention {
    /// `styles.myClass` in code maps to `.my-class` in the stylesheet.
    CamelCase,
}

/// CSS-modules policy shared by every stylesheet chain, parameterized
/// only by build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssModulePolicy {
    /// Default export rather than namespaced named exports.
    pub named_export: bool,

    pub export_locals_convention: LocalsConvention,

    /// Class-name identifier template. Production uses a short content
    /// hash; development keeps the authored local name alongside the hash
    /// so identically named classes in different files stay debuggable.
    pub local_ident_name: String,
}

impl CssModulePolicy {
    pub fn derive(is_production: bool) -> Self {
        Self {
            named_export: false,
            export_locals_convention: LocalsConvention::CamelCase,
            local_ident_name: if is_production {
                "[hash:base64:8]".to_string()
            } else {
                "[local]__[hash:base64:5]".to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_uses_hash_only_identifiers() {
        let policy = CssModulePolicy::derive(true);
        assert_eq!(policy.local_ident_name, "[hash:base64:8]");
        assert!(!policy.named_export);
    }

    #[test]
    fn development_keeps_local_names() {
        let policy = CssModulePolicy::derive(false);
        assert_eq!(policy.local_ident_name, "[local]__[hash:base64:5]");
    }

    #[test]
    fn convention_serializes_as_camel_case() {
        let value = serde_json::to_value(LocalsConvention::CamelCase).unwrap();
        assert_eq!(value, serde_json::json!("camelCase"));
    }
}
