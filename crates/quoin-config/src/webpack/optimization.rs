use indexmap::IndexMap;
use serde::Serialize;

/// Chunking and caching policy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    /// Tree-shake unused exports.
    pub used_exports: bool,

    /// Whether the module runtime gets its own chunk. Kept off: the
    /// runtime is inlined into the main chunk for one fewer request.
    pub runtime_chunk: bool,

    pub split_chunks: SplitChunksOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksOptions {
    pub chunks: String,

    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// A named rule partitioning third-party modules into a dedicated chunk
/// for caching.
#[derive(Debug, Clone, Serialize)]
pub struct CacheGroup {
    /// Regular expression selecting module paths into this group.
    pub test: String,

    pub name: String,

    pub chunks: String,

    /// Higher priority wins when several groups match the same module.
    pub priority: i32,
}
