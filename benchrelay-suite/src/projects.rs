//! Backend project/commit mapping
//!
//! Uploaded records tag every measurement with the project and revision that
//! produced it, so the dashboard can plot history per project. Each project
//! declares where its commit identifier comes from when not running in CI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a project's commit identifier comes from outside of CI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommitSource {
    /// A pinned commit hash, kept in the configuration file.
    Fixed {
        /// Full commit hash.
        commit: String,
    },
    /// Resolved from the dependency lockfile by package name.
    LockPackage {
        /// Package whose pinned source carries the commit hash.
        #[serde(rename = "lock-package")]
        lock_package: String,
    },
}

/// Project name to commit source, ordered for deterministic iteration.
pub type ProjectTable = BTreeMap<String, CommitSource>;

/// Project table matching [`crate::Suite::default`].
pub fn default_projects() -> ProjectTable {
    let mut projects = ProjectTable::new();
    projects.insert(
        "rust".to_string(),
        CommitSource::Fixed {
            commit: "3c3d3c1777041200bb7ed7a65b6562d62899778c".to_string(),
        },
    );
    projects.insert(
        "wasmer".to_string(),
        CommitSource::LockPackage {
            lock_package: "wasmer-vm".to_string(),
        },
    );
    projects.insert(
        "wasmi".to_string(),
        CommitSource::Fixed {
            commit: "0267b20e6ec0085f6dc7d5d813aa2cc17383f9d5".to_string(),
        },
    );
    projects.insert(
        "v8".to_string(),
        CommitSource::Fixed {
            commit: "e0ea8246c6ad7b698643995ba25da09d7012f679".to_string(),
        },
    );
    projects
}
