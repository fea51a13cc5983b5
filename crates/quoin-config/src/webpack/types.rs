use serde::{Serialize, Serializer};

/// Source-map strategy. Serializes as the strategy name, or the literal
/// `false` the bundler expects when source maps are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    /// Fast rebuild-friendly maps for the interactive session.
    EvalSourceMap,
    Disabled,
}

impl Serialize for Devtool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Devtool::EvalSourceMap => serializer.serialize_str("eval-source-map"),
            Devtool::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Bundle-size budget reporting.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceOptions {
    pub hints: PerformanceHints,
}

/// Serializes as `"warning"` or the literal `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceHints {
    Warning,
    Disabled,
}

impl Serialize for PerformanceHints {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PerformanceHints::Warning => serializer.serialize_str("warning"),
            PerformanceHints::Disabled => serializer.serialize_bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn devtool_serializes_to_name_or_false() {
        assert_eq!(
            serde_json::to_value(Devtool::EvalSourceMap).unwrap(),
            json!("eval-source-map")
        );
        assert_eq!(serde_json::to_value(Devtool::Disabled).unwrap(), json!(false));
    }

    #[test]
    fn hints_serialize_to_level_or_false() {
        assert_eq!(
            serde_json::to_value(PerformanceHints::Warning).unwrap(),
            json!("warning")
        );
        assert_eq!(
            serde_json::to_value(PerformanceHints::Disabled).unwrap(),
            json!(false)
        );
    }
}
