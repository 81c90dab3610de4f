//! Commit identifier resolution
//!
//! Priority order:
//! 1. a CI-provided commit hash, which applies to the entire batch,
//! 2. a fixed hash from the project table,
//! 3. the hash pinned in the dependency lockfile, taken from the text after
//!    the `#` separator of the package's source entry.

use crate::UploadError;
use benchrelay_suite::CommitSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    #[serde(default)]
    source: Option<String>,
}

/// Resolves project commit identifiers, caching lockfile lookups.
#[derive(Debug)]
pub struct CommitResolver {
    ci_commit: Option<String>,
    lockfile: PathBuf,
    cache: HashMap<String, String>,
}

impl CommitResolver {
    /// Create a resolver. `ci_commit` is the batch-wide hash when running in
    /// CI; `lockfile` is consulted for `lock-package` sources.
    pub fn new(ci_commit: Option<String>, lockfile: impl Into<PathBuf>) -> Self {
        Self {
            ci_commit,
            lockfile: lockfile.into(),
            cache: HashMap::new(),
        }
    }

    /// The commit hash to record for `project`.
    pub fn commit_for(
        &mut self,
        project: &str,
        source: &CommitSource,
    ) -> Result<String, UploadError> {
        if let Some(ci) = &self.ci_commit {
            return Ok(ci.clone());
        }

        match source {
            CommitSource::Fixed { commit } => Ok(commit.clone()),
            CommitSource::LockPackage { lock_package } => {
                if let Some(hit) = self.cache.get(project) {
                    return Ok(hit.clone());
                }
                let commit = lockfile_commit(&self.lockfile, project, lock_package)?;
                self.cache.insert(project.to_string(), commit.clone());
                Ok(commit)
            }
        }
    }
}

/// Scan the lockfile for `package` and return the commit-hash suffix of its
/// pinned source.
fn lockfile_commit(lockfile: &Path, project: &str, package: &str) -> Result<String, UploadError> {
    let contents = std::fs::read_to_string(lockfile).map_err(|e| UploadError::Lockfile {
        path: lockfile.to_path_buf(),
        detail: e.to_string(),
    })?;
    let parsed: Lockfile = toml::from_str(&contents).map_err(|e| UploadError::Lockfile {
        path: lockfile.to_path_buf(),
        detail: e.to_string(),
    })?;

    let no_commit = || UploadError::NoCommit {
        project: project.to_string(),
        package: package.to_string(),
        lockfile: lockfile.to_path_buf(),
    };

    parsed
        .package
        .iter()
        .find(|p| p.name == package)
        .and_then(|p| p.source.as_deref())
        .and_then(|source| source.split_once('#'))
        .map(|(_, hash)| hash.to_string())
        .filter(|hash| !hash.is_empty())
        .ok_or_else(no_commit)
}
