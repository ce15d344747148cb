//! Resolution engine for the dependency file generator.
//!
//! Turns a loaded [`Manifest`](depgen_manifest::Manifest) into rendered
//! conda environment and requirements files.
//!
//! # Module Organization
//!
//! - [`matrix`] - Matrix expansion and branch matching
//! - [`resolve`] - Entry resolution for one group, format and combination
//! - [`dedupe`] - Deduplication and ordering of resolved entries
//! - [`plan`] - File naming and output placement
//! - [`render`] - File headers and format bodies
//! - [`generator`] - Run orchestration and artifact sinks
//! - [`lint`] - Manifest lints reported by `check`
//! - [`testing`] - Test utilities (feature-gated)

pub mod dedupe;
mod diagnostic;
mod error;
pub mod generator;
pub mod lint;
pub mod matrix;
pub mod plan;
pub mod render;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dedupe::dedupe;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use generator::{Artifact, DirectorySink, Generator, ResolvedFile, Sink, StreamSink};
pub use lint::{Lint, Linter};
pub use matrix::{Combinations, expand, matches};
pub use plan::{OutputMode, PlannedFile, Selection, file_name, plan};
pub use resolve::resolve;
