//! Bundler configuration synthesis for quoin projects.
//!
//! Given a small set of environment inputs (a project root, a build mode,
//! an explicit serve flag, and paths to static assets) plus two externally
//! authored configuration fragments (the compiler config and the
//! stylesheet-processor config), this crate deterministically produces one
//! complete bundler configuration: entry ordering, per-file-type
//! transformation chains, CSS-modules naming policy, code-splitting
//! strategy, and development-server behavior.
//!
//! The crate never executes a build, watches files, or serves requests; it
//! only computes what those subsystems should be told to do.

pub mod context;
pub mod css;
pub mod error;
pub mod paths;
pub mod sources;
pub mod swc;
pub mod synth;
pub mod webpack;

// Re-export main types
pub use context::{BuildContext, Mode};
pub use css::{CssModulePolicy, CssScope};
pub use error::{ConfigError, Result};
pub use paths::{AssetPaths, ResolvedPaths};
pub use sources::ExternalSources;
pub use swc::SwcConfig;
pub use synth::synthesize;
pub use webpack::BundlerConfig;

/// Load the external fragments and synthesize the full configuration.
///
/// The compiler-config loader and the environment contract behind
/// [`ExternalSources`] are the only fallible steps; the synthesis itself
/// is total.
pub fn generate(context: &BuildContext, sources: &ExternalSources) -> Result<BundlerConfig> {
    let swc = SwcConfig::load(&sources.swc_config)?;
    let policy = CssModulePolicy::derive(context.is_production());
    let paths = ResolvedPaths::resolve(&context.root, &context.assets);
    Ok(synthesize(context, &swc, &policy, &paths, &sources.postcss_config))
}
