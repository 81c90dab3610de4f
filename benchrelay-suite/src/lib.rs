#![warn(missing_docs)]
//! Benchrelay Suite Model
//!
//! Describes *what* was benchmarked: the ordered benchmark list, the backend
//! table, the designated reference backend, and the mapping from backends to
//! owning projects. All tables are plain values deserialized from
//! configuration and injected into the other crates, so tests can swap them
//! freely.

mod model;
mod projects;

pub use model::{Backend, BackendKind, Suite};
pub use projects::{CommitSource, ProjectTable, default_projects};
