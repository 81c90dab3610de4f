#![warn(missing_docs)]
//! Benchrelay Report
//!
//! Renders collected statistics as a terminal table, one row per measurable
//! (benchmark, backend) pairing, with each backend's mean expressed as a
//! ratio against the reference backend.

mod table;

pub use table::format_table;
