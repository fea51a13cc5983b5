//! Typed model of the bundler configuration schema.
//!
//! Field names serialize exactly as the external bundling engine spells
//! them (`devServer`, `historyApiFallback`, `splitChunks`, ...); the
//! emitted JSON is consumed as-is, so the shape here is field-for-field
//! compatibility, not an internal convenience.

mod dev_server;
mod optimization;
mod output;
mod plugins;
mod resolve;
mod rules;
mod types;

use serde::Serialize;
use std::path::PathBuf;

use crate::context::Mode;

pub use dev_server::{ClientOptions, DevServerOptions};
pub use optimization::{CacheGroup, OptimizationOptions, SplitChunksOptions};
pub use output::OutputOptions;
pub use plugins::{PluginDescriptor, PluginList};
pub use resolve::ResolveOptions;
pub use rules::{
    AssetGenerator, AssetParser, CssLoaderOptions, CssModulesOptions, DataUrlCondition,
    LoaderEntry, LoaderOptions, ModuleOptions, ModuleRule, PostcssLoaderOptions, PostcssOptions,
};
pub use types::{Devtool, PerformanceHints, PerformanceOptions};

/// Root of the synthesized configuration object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    /// Entry sequence. When a global stylesheet is present it comes
    /// first, so component styles can override globals by cascade order.
    pub entry: Vec<PathBuf>,

    pub mode: Mode,

    pub output: OutputOptions,

    pub devtool: Devtool,

    /// Browser support expression shared with the compiler, e.g.
    /// `browserslist:> 0.25, not dead`.
    pub target: String,

    pub module: ModuleOptions,

    /// Present iff the context's serve flag is set; omitted entirely
    /// otherwise, never emitted as null or disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,

    pub plugins: Vec<PluginDescriptor>,

    pub resolve: ResolveOptions,

    pub optimization: OptimizationOptions,

    pub performance: PerformanceOptions,
}
