#![warn(missing_docs)]
//! Benchrelay Results
//!
//! Reads the raw sample files a criterion run leaves behind:
//! - locating the per-pairing `raw.csv` under the results root (modern and
//!   legacy directory layouts),
//! - parsing raw samples with a hard nanosecond-unit guard,
//! - driving locate → read → reduce for every measurable pairing of a suite.
//!
//! A missing file is normal (many pairings legitimately never ran) and is
//! reported as absence; every other failure aborts the run.

mod collect;
mod locate;
mod read;

pub use collect::{ResultSet, collect_statistics};
pub use locate::ResultsDir;
pub use read::read_samples;

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a results file. All of these are fatal to the run.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// The file could not be read or is not well-formed CSV.
    #[error("failed to read results file {path}")]
    Csv {
        /// Offending file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("results file {path} is missing the `{column}` column")]
    MissingColumn {
        /// Offending file.
        path: PathBuf,
        /// Name of the absent column.
        column: &'static str,
    },

    /// A data row could not be interpreted.
    #[error("row {row} of {path} is malformed: {detail}")]
    MalformedRow {
        /// Offending file.
        path: PathBuf,
        /// 1-based data row number.
        row: usize,
        /// What was wrong with the row.
        detail: String,
    },

    /// A row declares a time unit other than nanoseconds; units are never
    /// converted.
    #[error("row {row} of {path} is measured in `{unit}`, expected `ns`")]
    UnitMismatch {
        /// Offending file.
        path: PathBuf,
        /// 1-based data row number.
        row: usize,
        /// The declared unit.
        unit: String,
    },
}
