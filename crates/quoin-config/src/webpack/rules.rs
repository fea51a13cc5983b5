use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::css::{CssModulePolicy, CssScope};

/// Per-file-type transformation rules, applied in order.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOptions {
    pub rules: Vec<ModuleRule>,
}

/// One transformation rule: a file-name pattern and what happens to the
/// files it matches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
    /// Regular expression matched against the module path.
    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Ordered chain of named processing stages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub r#use: Vec<LoaderEntry>,

    /// Built-in module type (`asset`, `asset/resource`) for rules with no
    /// loader chain.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<AssetParser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<AssetGenerator>,
}

impl ModuleRule {
    /// Rule processed by an ordered loader chain.
    pub fn chain(test: impl Into<String>, loaders: Vec<LoaderEntry>) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            r#use: loaders,
            kind: None,
            parser: None,
            generator: None,
        }
    }

    /// Rule for assets inlined below a size threshold and emitted above it.
    pub fn asset(test: impl Into<String>, parser: AssetParser) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            r#use: Vec::new(),
            kind: Some("asset".to_string()),
            parser: Some(parser),
            generator: None,
        }
    }

    /// Rule for assets always emitted as separate files.
    pub fn asset_resource(test: impl Into<String>, generator: AssetGenerator) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            r#use: Vec::new(),
            kind: Some("asset/resource".to_string()),
            parser: None,
            generator: Some(generator),
        }
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }
}

/// A named processing stage with an optional options payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoaderEntry {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl LoaderEntry {
    pub fn bare(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: impl Into<LoaderOptions>) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options.into()),
        }
    }
}

/// Options payload for a loader entry. Serializes as the inner document.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LoaderOptions {
    /// An externally authored document embedded verbatim (the compiler
    /// config).
    Raw(Value),
    Css(CssLoaderOptions),
    Postcss(PostcssLoaderOptions),
}

impl From<Value> for LoaderOptions {
    fn from(value: Value) -> Self {
        LoaderOptions::Raw(value)
    }
}

impl From<CssLoaderOptions> for LoaderOptions {
    fn from(options: CssLoaderOptions) -> Self {
        LoaderOptions::Css(options)
    }
}

impl From<PostcssLoaderOptions> for LoaderOptions {
    fn from(options: PostcssLoaderOptions) -> Self {
        LoaderOptions::Postcss(options)
    }
}

/// Options for the stylesheet dependency-resolution stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssLoaderOptions {
    /// Resolve `@import` statements.
    pub import: bool,

    /// How many preceding stages run on imported stylesheets before this
    /// one does.
    pub import_loaders: u32,

    pub modules: CssModulesOptions,
}

/// The shared CSS-modules policy plus the per-chain scope.
#[derive(Debug, Clone, Serialize)]
pub struct CssModulesOptions {
    #[serde(flatten)]
    pub policy: CssModulePolicy,

    pub mode: CssScope,
}

/// Options forwarding the stylesheet-processor configuration by path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcssLoaderOptions {
    pub postcss_options: PostcssOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostcssOptions {
    pub config: PathBuf,
}

/// Inline-vs-emit decision for `asset` rules.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetParser {
    pub data_url_condition: DataUrlCondition,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrlCondition {
    /// Assets at or below this many bytes are inlined as data URLs.
    pub max_size: u64,
}

/// Emitted-filename template for `asset/resource` rules.
#[derive(Debug, Clone, Serialize)]
pub struct AssetGenerator {
    pub filename: String,
}
