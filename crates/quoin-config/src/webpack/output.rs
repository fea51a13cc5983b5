use serde::Serialize;
use std::path::PathBuf;

/// Output naming and placement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub public_path: String,

    pub path: PathBuf,

    /// Chunk filename template. Carries a content hash for one-shot
    /// builds; the unhashed form is used in serve mode because hashing is
    /// incompatible with exchanging modules in place.
    pub filename: String,

    /// Delete stale files in the output directory before emitting.
    pub clean: bool,
}
