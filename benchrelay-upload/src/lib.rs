#![warn(missing_docs)]
//! Benchrelay Upload
//!
//! Turns collected statistics into result records tagged with project and
//! commit identity, and transmits them as one batch to a codespeed-style
//! results collector. The collector is an opaque sink behind the
//! [`ResultSink`] trait; transmission is a single blocking call with no
//! retry.

mod client;
mod commit;
mod record;

pub use client::{ResultSink, SpeedCenterClient};
pub use commit::CommitResolver;
pub use record::{BatchOptions, SpeedRecord, build_batch};

use std::path::PathBuf;
use thiserror::Error;

/// Failures while building or transmitting a result batch.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A backend's owning project has no entry in the project table.
    #[error(
        "backend `{backend}` (benchmark `{benchmark}`) belongs to project \
         `{project}`, which has no entry in the project table"
    )]
    UnknownProject {
        /// Backend whose record could not be constructed.
        backend: String,
        /// Benchmark being recorded when the lookup failed.
        benchmark: String,
        /// The unmapped project name.
        project: String,
    },

    /// No commit hash could be derived for a project.
    #[error("no commit found for project `{project}`: package `{package}` in {lockfile}")]
    NoCommit {
        /// Project being resolved.
        project: String,
        /// Lockfile package that was expected to pin the commit.
        package: String,
        /// Lockfile that was searched.
        lockfile: PathBuf,
    },

    /// The lockfile could not be read or parsed.
    #[error("failed to read lockfile {path}: {detail}")]
    Lockfile {
        /// Lockfile path.
        path: PathBuf,
        /// What went wrong.
        detail: String,
    },

    /// The batch could not be serialized.
    #[error("failed to encode result batch")]
    Encode(#[from] serde_json::Error),

    /// The collector could not be reached.
    #[error("failed to reach the results collector")]
    Transport(#[from] reqwest::Error),

    /// The collector answered with a non-success status.
    #[error("results collector rejected the batch ({status}): {body}")]
    Rejected {
        /// HTTP status returned.
        status: reqwest::StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },
}
