use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// Module-resolution settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extensionless imports.
    pub extensions: Vec<String>,

    /// Import-prefix aliases. Insertion order is preserved in the output.
    pub alias: IndexMap<String, PathBuf>,
}
