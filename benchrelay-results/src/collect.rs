//! Statistics collection across a suite
//!
//! Drives locate → read → reduce for every measurable pairing and gathers
//! the statistics that exist. Absent files and empty sample sets are skipped;
//! any parse failure aborts the whole collection.

use crate::{ResultsDir, ResultsError, read_samples};
use benchrelay_stats::{TimingStatistics, compute_timing};
use benchrelay_suite::Suite;
use std::collections::BTreeMap;
use tracing::debug;

/// Statistics per (benchmark, backend) pairing. Pairings that were never run
/// simply have no entry.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    entries: BTreeMap<(String, String), TimingStatistics>,
}

impl ResultSet {
    /// An empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record statistics for a pairing.
    pub fn insert(&mut self, benchmark: &str, backend: &str, stats: TimingStatistics) {
        self.entries
            .insert((benchmark.to_string(), backend.to_string()), stats);
    }

    /// Statistics for a pairing, if it was measured.
    pub fn get(&self, benchmark: &str, backend: &str) -> Option<&TimingStatistics> {
        self.entries
            .get(&(benchmark.to_string(), backend.to_string()))
    }

    /// Number of measured pairings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was measured at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect statistics for every measurable pairing of the suite.
pub fn collect_statistics(suite: &Suite, dir: &ResultsDir) -> Result<ResultSet, ResultsError> {
    let mut results = ResultSet::new();

    for (benchmark, backend) in suite.pairings() {
        let Some(path) = dir.locate(benchmark, backend) else {
            debug!(benchmark, backend = %backend.name, "no results file");
            continue;
        };

        let samples = read_samples(&path)?;
        match compute_timing(&samples) {
            Some(stats) => {
                debug!(
                    benchmark,
                    backend = %backend.name,
                    samples = stats.sample_count,
                    mean_ns = stats.mean,
                    "collected"
                );
                results.insert(benchmark, &backend.name, stats);
            }
            None => debug!(benchmark, backend = %backend.name, "results file has no samples"),
        }
    }

    Ok(results)
}
