//! Raw sample parsing
//!
//! A raw sample file is header-delimited CSV. The columns we consume:
//!
//! - `sample_measured_value` — total time for one batch of iterations, or
//!   the legacy `sample_time_nanos` column in older files
//! - `unit` — must be `ns` on every row; anything else aborts the run
//! - `iteration_count` — batch size, must be positive
//!
//! Legacy files name the unit in the value column itself and carry no `unit`
//! column; for those the nanosecond check is vacuous.

use crate::ResultsError;
use benchrelay_stats::RawSample;
use std::path::Path;

const MEASURED_VALUE: &str = "sample_measured_value";
const LEGACY_MEASURED_VALUE: &str = "sample_time_nanos";
const UNIT: &str = "unit";
const ITERATION_COUNT: &str = "iteration_count";

/// Column indices resolved from the header row.
struct ColumnLayout {
    value: usize,
    unit: Option<usize>,
    iterations: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord, path: &Path) -> Result<Self, ResultsError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let missing = |column| ResultsError::MissingColumn {
            path: path.to_path_buf(),
            column,
        };

        let iterations = find(ITERATION_COUNT).ok_or_else(|| missing(ITERATION_COUNT))?;

        if let Some(value) = find(MEASURED_VALUE) {
            // Modern files must declare their unit so it can be checked.
            let unit = find(UNIT).ok_or_else(|| missing(UNIT))?;
            Ok(Self {
                value,
                unit: Some(unit),
                iterations,
            })
        } else if let Some(value) = find(LEGACY_MEASURED_VALUE) {
            Ok(Self {
                value,
                unit: find(UNIT),
                iterations,
            })
        } else {
            Err(missing(MEASURED_VALUE))
        }
    }
}

/// Parse every sample of a raw results file, in file order.
pub fn read_samples(path: &Path) -> Result<Vec<RawSample>, ResultsError> {
    let csv_err = |source| ResultsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = ColumnLayout::from_headers(&headers, path)?;

    let mut samples = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| ResultsError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let malformed = |detail: String| ResultsError::MalformedRow {
            path: path.to_path_buf(),
            row,
            detail,
        };

        let field = |column: usize, name: &str| {
            record
                .get(column)
                .ok_or_else(|| malformed(format!("missing `{name}` field")))
        };

        if let Some(unit_column) = columns.unit {
            let unit = field(unit_column, UNIT)?;
            if unit != "ns" {
                return Err(ResultsError::UnitMismatch {
                    path: path.to_path_buf(),
                    row,
                    unit: unit.to_string(),
                });
            }
        }

        let measured_value: f64 = field(columns.value, MEASURED_VALUE)?
            .parse()
            .map_err(|e| malformed(format!("bad measured value: {e}")))?;
        let iteration_count: u64 = field(columns.iterations, ITERATION_COUNT)?
            .parse()
            .map_err(|e| malformed(format!("bad iteration count: {e}")))?;
        if iteration_count == 0 {
            return Err(malformed("iteration count must be positive".to_string()));
        }

        samples.push(RawSample {
            measured_value,
            iteration_count,
        });
    }

    Ok(samples)
}
