//! Chart rendering and artifact management.
//!
//! Charts render to SVG through plotters; the SVG backend keeps the crate
//! free of system font and freetype dependencies. Each render writes exactly
//! one freshly named file and returns a reference URL for the serving layer;
//! nothing here reuses or cleans up artifacts.

pub mod composite;
pub mod heatmap;
pub mod pairplot;
pub mod palette;

pub use composite::render_composite;
pub use heatmap::render_heatmap;
pub use pairplot::render_pairplot;

use crate::error::DatabotError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A freshly minted artifact target: where to write, and how to refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Filesystem path the chart is written to.
    pub path: PathBuf,

    /// Reference URL returned to the caller.
    pub url: String,
}

/// Owns the artifact output directory and reference URL prefix.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    url_prefix: String,
}

impl ArtifactStore {
    /// Creates a store writing into `dir` and referencing under `url_prefix`.
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DatabotError::render(format!("cannot create {}: {e}", self.dir.display())))
    }

    /// Mints a fresh artifact name.
    ///
    /// The name is a random UUID v4 in hex, optionally suffixed with a tag:
    /// `fresh("heatmap")` yields `<hex>_heatmap.svg`, `fresh("")` yields
    /// `<hex>.svg`. Randomness makes concurrent writes collision-free
    /// without locking.
    pub fn fresh(&self, tag: &str) -> Artifact {
        let hex = Uuid::new_v4().simple().to_string();
        let filename = if tag.is_empty() {
            format!("{hex}.svg")
        } else {
            format!("{hex}_{tag}.svg")
        };
        let url = format!("{}/{}", self.url_prefix.trim_end_matches('/'), filename);
        Artifact {
            path: self.dir.join(filename),
            url,
        }
    }
}

/// Adapts any plotters drawing error into a render error.
pub(crate) fn draw_err<E: std::fmt::Display>(e: E) -> DatabotError {
    DatabotError::render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_names_are_distinct() {
        let store = ArtifactStore::new("/tmp/charts", "/artifacts");
        let a = store.fresh("heatmap");
        let b = store.fresh("heatmap");
        assert_ne!(a.path, b.path);
        assert_ne!(a.url, b.url);
    }

    #[test]
    fn test_fresh_name_shape() {
        let store = ArtifactStore::new("/tmp/charts", "/artifacts/");
        let a = store.fresh("pairplot");
        let name = a.path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("_pairplot.svg"));
        // 32 hex chars + suffix
        assert_eq!(name.len(), 32 + "_pairplot.svg".len());
        assert_eq!(a.url, format!("/artifacts/{name}"));

        let b = store.fresh("");
        let name = b.path.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), 32 + ".svg".len());
    }
}
