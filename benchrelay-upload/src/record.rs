//! Result record construction
//!
//! One record per measured pairing, with timing statistics converted from
//! nanoseconds to seconds and tagged with the owning project and commit.
//! Field names follow the collector's wire format.

use crate::{CommitResolver, UploadError};
use benchrelay_results::ResultSet;
use benchrelay_suite::{ProjectTable, Suite};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A single uploaded result, in the collector's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRecord {
    /// Commit hash of the project that produced the backend.
    pub commitid: String,
    /// Owning project name.
    pub project: String,
    /// Backend name; the collector calls this the executable.
    pub executable: String,
    /// Benchmark name.
    pub benchmark: String,
    /// Where the run happened (hostname or CI marker).
    pub environment: String,
    /// Mean per-iteration cost, seconds.
    pub result_value: f64,
    /// Fastest per-iteration cost, seconds.
    pub min: f64,
    /// Slowest per-iteration cost, seconds.
    pub max: f64,
    /// Sample standard deviation, seconds.
    pub std_dev: f64,
}

/// Inputs to batch construction beyond the suite tables.
#[derive(Debug)]
pub struct BatchOptions<'a> {
    /// Environment name recorded on every result.
    pub environment: &'a str,
    /// CI-provided commit hash; when set it applies to the whole batch.
    pub ci_commit: Option<&'a str>,
    /// Lockfile consulted for `lock-package` commit sources.
    pub lockfile: &'a Path,
}

/// Build the upload batch for every measured pairing with statistics.
///
/// Pairings without statistics are skipped (not measured is not an error);
/// a backend whose project is missing from the table aborts construction.
pub fn build_batch(
    suite: &Suite,
    projects: &ProjectTable,
    results: &ResultSet,
    options: &BatchOptions<'_>,
) -> Result<Vec<SpeedRecord>, UploadError> {
    let mut resolver = CommitResolver::new(
        options.ci_commit.map(str::to_string),
        options.lockfile.to_path_buf(),
    );

    let mut batch = Vec::new();
    for (benchmark, backend) in suite.pairings() {
        let Some(stats) = results.get(benchmark, &backend.name) else {
            continue;
        };

        let Some(source) = projects.get(&backend.project) else {
            return Err(UploadError::UnknownProject {
                backend: backend.name.clone(),
                benchmark: benchmark.to_string(),
                project: backend.project.clone(),
            });
        };
        let commitid = resolver.commit_for(&backend.project, source)?;

        let seconds = stats.as_seconds();
        let record = SpeedRecord {
            commitid,
            project: backend.project.clone(),
            executable: backend.name.clone(),
            benchmark: benchmark.to_string(),
            environment: options.environment.to_string(),
            result_value: seconds.mean,
            min: seconds.min,
            max: seconds.max,
            std_dev: seconds.std_dev,
        };
        debug!(
            benchmark,
            backend = %backend.name,
            mean_s = record.result_value,
            "queued record"
        );
        batch.push(record);
    }

    Ok(batch)
}
