//! Well-known project locations.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Static assets supplied from outside the project tree.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// Robots file copied into the output directory.
    pub robots: PathBuf,

    /// Favicon referenced from the generated HTML document.
    pub favicon: PathBuf,
}

impl AssetPaths {
    pub fn new(robots: impl Into<PathBuf>, favicon: impl Into<PathBuf>) -> Self {
        Self {
            robots: robots.into(),
            favicon: favicon.into(),
        }
    }
}

/// The fixed set of locations the synthesizer needs, computed once.
///
/// Only the global stylesheet is checked for existence; its presence is
/// recorded here so downstream entry ordering needs no further I/O. Every
/// other location is passed through unverified; a missing template or
/// entry script surfaces later as a build-time error from the bundler.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// Application entry script.
    pub app_entry: PathBuf,

    /// Global stylesheet; present iff the file existed at resolution time.
    pub global_css: Option<PathBuf>,

    /// Output directory for emitted chunks.
    pub output: PathBuf,

    /// HTML document template.
    pub html_template: PathBuf,

    pub favicon: PathBuf,

    pub robots: PathBuf,

    /// Environment file injected into the bundle.
    pub dotenv: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(root: &Path, assets: &AssetPaths) -> Self {
        let src = root.join("src");

        let candidate = src.join("index.css");
        let global_css = candidate.exists().then_some(candidate);
        debug!(present = global_css.is_some(), "checked global stylesheet");

        Self {
            app_entry: src.join("index.tsx"),
            global_css,
            output: root.join("dist"),
            html_template: src.join("index.html"),
            favicon: assets.favicon.clone(),
            robots: assets.robots.clone(),
            dotenv: root.join(".env"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assets() -> AssetPaths {
        AssetPaths::new("/assets/robots.txt", "/assets/favicon.ico")
    }

    #[test]
    fn computes_fixed_locations_under_root() {
        let dir = TempDir::new().unwrap();
        let paths = ResolvedPaths::resolve(dir.path(), &assets());

        assert_eq!(paths.app_entry, dir.path().join("src/index.tsx"));
        assert_eq!(paths.output, dir.path().join("dist"));
        assert_eq!(paths.html_template, dir.path().join("src/index.html"));
        assert_eq!(paths.dotenv, dir.path().join(".env"));
        assert_eq!(paths.robots, PathBuf::from("/assets/robots.txt"));
        assert_eq!(paths.favicon, PathBuf::from("/assets/favicon.ico"));
    }

    #[test]
    fn global_css_absent_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let paths = ResolvedPaths::resolve(dir.path(), &assets());
        assert!(paths.global_css.is_none());
    }

    #[test]
    fn global_css_present_when_file_exists() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.css"), "body {}").unwrap();

        let paths = ResolvedPaths::resolve(dir.path(), &assets());
        assert_eq!(paths.global_css, Some(dir.path().join("src/index.css")));
    }
}
