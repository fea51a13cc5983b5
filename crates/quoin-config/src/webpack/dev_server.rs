use serde::Serialize;

/// Development-server block. Synthesized only for serve-mode contexts;
/// non-serve configurations carry no block at all.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Compress responses.
    pub compress: bool,

    /// Serve the entry document in place of 404s so client-side routing
    /// works on deep links.
    pub history_api_fallback: bool,

    /// Exchange modules in place while the application is running.
    pub hot: bool,

    /// Launch the browser once the server is up.
    pub open: bool,

    pub client: ClientOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientOptions {
    /// Full-screen error overlay on compile failures.
    pub overlay: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            compress: true,
            history_api_fallback: true,
            hot: true,
            open: true,
            client: ClientOptions { overlay: true },
        }
    }
}
