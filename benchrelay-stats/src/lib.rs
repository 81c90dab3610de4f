#![warn(missing_docs)]
//! Benchrelay Statistics
//!
//! Reduces raw timing samples to summary statistics. A raw sample records the
//! total measured time for a batch of iterations; all statistics are computed
//! over the per-iteration cost `measured_value / iteration_count`.

/// One recorded measurement: total time in nanoseconds over a batch of
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    /// Total measured time for the batch, nanoseconds.
    pub measured_value: f64,
    /// Number of iterations in the batch. Always positive.
    pub iteration_count: u64,
}

impl RawSample {
    /// Cost of a single iteration in nanoseconds.
    pub fn per_iteration(&self) -> f64 {
        self.measured_value / self.iteration_count as f64
    }
}

/// Summary statistics over per-iteration costs.
///
/// Fields share one time unit; [`TimingStatistics::as_seconds`] rescales a
/// nanosecond-valued summary for upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest observed cost.
    pub min: f64,
    /// Largest observed cost.
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator); 0.0 for a single
    /// sample, where it is mathematically undefined.
    pub std_dev: f64,
    /// Number of samples reduced.
    pub sample_count: usize,
}

impl TimingStatistics {
    /// The same statistics with every timing field divided by 1e9.
    pub fn as_seconds(&self) -> TimingStatistics {
        const NANOS_PER_SEC: f64 = 1_000_000_000.0;
        TimingStatistics {
            mean: self.mean / NANOS_PER_SEC,
            min: self.min / NANOS_PER_SEC,
            max: self.max / NANOS_PER_SEC,
            std_dev: self.std_dev / NANOS_PER_SEC,
            sample_count: self.sample_count,
        }
    }
}

/// Reduce raw samples to summary statistics.
///
/// Returns `None` for an empty sequence: "not measured" is a distinct state
/// from "measured as zero" and downstream rendering treats it as absent data.
pub fn compute_timing(samples: &[RawSample]) -> Option<TimingStatistics> {
    if samples.is_empty() {
        return None;
    }

    let costs: Vec<f64> = samples.iter().map(RawSample::per_iteration).collect();

    let mean = costs.iter().sum::<f64>() / costs.len() as f64;

    // First occurrence wins on ties; fold preserves file order.
    let min = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let std_dev = if costs.len() < 2 {
        0.0
    } else {
        let variance =
            costs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (costs.len() - 1) as f64;
        variance.sqrt()
    };

    Some(TimingStatistics {
        mean,
        min,
        max,
        std_dev,
        sample_count: costs.len(),
    })
}
