//! Results file location
//!
//! Criterion writes the most recent samples of a run to
//! `<root>/<group>/<function>/new/raw.csv`. Older suites used a single
//! space-joined group name instead of nested directories, so both layouts
//! are probed.

use benchrelay_suite::Backend;
use std::path::{Path, PathBuf};

/// Root of a criterion results tree, typically `target/criterion`.
#[derive(Debug, Clone)]
pub struct ResultsDir {
    root: PathBuf,
}

impl ResultsDir {
    /// Wrap a results root. The directory need not exist; location simply
    /// reports absence then.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The wrapped root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the raw sample file for a pairing, if one exists.
    ///
    /// Probes the nested `<benchmark>/<backend>/new/raw.csv` layout first,
    /// then the legacy `<benchmark> <display>/new/raw.csv` layout. `None`
    /// means the pairing was never run; callers treat that as ordinary
    /// absence, not an error.
    pub fn locate(&self, benchmark: &str, backend: &Backend) -> Option<PathBuf> {
        let nested = self
            .root
            .join(benchmark)
            .join(&backend.name)
            .join("new")
            .join("raw.csv");
        if nested.is_file() {
            return Some(nested);
        }

        let legacy = self
            .root
            .join(format!("{} {}", benchmark, backend.display_name()))
            .join("new")
            .join("raw.csv");
        legacy.is_file().then_some(legacy)
    }
}
