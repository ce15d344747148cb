//! Declared output files.

use std::path::{Path, PathBuf};

use depgen_core::{MatrixSpec, OutputFormat, OutputSpecError, requested_formats};
use serde::Deserialize;

use crate::serde_helpers::{OneOrMany, deserialize_matrix};

/// Configuration of one declared output file (a key under `files:`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Requested output formats
    pub output: OutputSpec,

    /// Dependency groups merged into this file, in order
    pub includes: Vec<String>,

    /// Build matrix to expand; empty means a single unsuffixed file
    #[serde(default, deserialize_with = "deserialize_matrix")]
    pub matrix: MatrixSpec,

    /// Override for the conda output directory
    pub conda_dir: Option<PathBuf>,

    /// Override for the requirements output directory
    pub requirements_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Output directory for `format`, relative to the configuration file.
    pub fn output_dir(&self, format: OutputFormat) -> &Path {
        let custom = match format {
            OutputFormat::Conda => self.conda_dir.as_deref(),
            OutputFormat::Requirements => self.requirements_dir.as_deref(),
            OutputFormat::None => None,
        };
        custom.unwrap_or_else(|| Path::new(format.default_dir()))
    }
}

/// The raw `output` value of a file: one literal or a list of literals.
///
/// Kept unvalidated so the planner decides what a value means; use
/// [`OutputSpec::formats`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany<String>")]
pub struct OutputSpec(Vec<String>);

impl OutputSpec {
    /// Formats to generate. `none` yields an empty list.
    pub fn formats(&self) -> Result<Vec<OutputFormat>, OutputSpecError> {
        requested_formats(&self.0)
    }
}

impl From<OneOrMany<String>> for OutputSpec {
    fn from(value: OneOrMany<String>) -> Self {
        OutputSpec(value.into())
    }
}
