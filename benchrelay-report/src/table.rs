//! Fixed-width result table
//!
//! Four left-justified columns: benchmark, backend, mean nanoseconds, and
//! the ratio of the row's mean to the reference backend's mean. A blank line
//! separates each benchmark's block of backend rows.
//!
//! Cell conventions:
//! - ratio is rendered to two decimals; `N/A` when the reference backend has
//!   no statistics for the benchmark
//! - a row without data renders `--` in both numeric cells

use benchrelay_results::ResultSet;
use benchrelay_suite::Suite;
use std::fmt::Write;

const NO_DATA: &str = "--";

fn push_row(out: &mut String, benchmark: &str, backend: &str, mean: &str, ratio: &str) {
    // write! into a String cannot fail.
    let _ = writeln!(out, "{benchmark:<24}{backend:<12}{mean:<12}{ratio:<12}");
}

/// Render the result table for a suite.
pub fn format_table(suite: &Suite, results: &ResultSet) -> String {
    let mut out = String::new();
    push_row(
        &mut out,
        "benchmark",
        "backend",
        "avg nanos",
        &format!("{} ratio", suite.reference),
    );

    for benchmark in &suite.benchmarks {
        let reference = results.get(benchmark, &suite.reference);

        for backend in suite
            .backends
            .iter()
            .filter(|backend| suite.is_measured(benchmark, backend))
        {
            match results.get(benchmark, &backend.name) {
                Some(stats) => {
                    let ratio = match reference {
                        Some(reference) => format!("{:.2}", stats.mean / reference.mean),
                        None => "N/A".to_string(),
                    };
                    push_row(
                        &mut out,
                        benchmark,
                        &backend.name,
                        &format!("{:.0}", stats.mean),
                        &ratio,
                    );
                }
                None => push_row(&mut out, benchmark, &backend.name, NO_DATA, NO_DATA),
            }
        }

        out.push('\n');
    }

    out
}
