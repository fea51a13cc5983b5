//! Build invocation inputs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::AssetPaths;

/// Build mode, mirrored into the synthesized configuration verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Production,
    #[default]
    Development,
}

impl Mode {
    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }
}

/// Immutable inputs for one synthesis invocation.
///
/// Serve-vs-build is an explicit field of the context rather than being
/// inferred from how the process was started, so callers state the
/// invocation kind as part of the contract.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root; all well-known locations resolve under it.
    pub root: PathBuf,

    pub mode: Mode,

    /// Interactive dev session with a live server, as opposed to a
    /// one-shot build.
    pub serve: bool,

    /// Externally supplied static assets, passed through unchanged.
    pub assets: AssetPaths,
}

impl BuildContext {
    pub fn new(root: impl Into<PathBuf>, mode: Mode, serve: bool, assets: AssetPaths) -> Self {
        Self {
            root: root.into(),
            mode,
            serve,
            assets,
        }
    }

    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }
}
