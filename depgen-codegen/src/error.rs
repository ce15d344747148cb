use std::path::PathBuf;

use depgen_core::{Combination, OutputFormat, OutputSpecError, format_combination};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for resolution and generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("No matching matrix found in '{group}' for: {combo}", combo = format_combination(.combination))]
    #[diagnostic(
        code(depgen::matrix_coverage),
        help(
            "add a branch to '{group}' whose matrix matches this combination, or an empty `matrix:` branch as a fallback"
        )
    )]
    MatrixCoverage {
        group: String,
        combination: Combination,
    },

    #[error("'{group}' lists '{extra}' packages, which {format} files cannot express")]
    #[diagnostic(
        code(depgen::grouped_extra_unsupported),
        help("restrict the entry's output_types to 'conda'")
    )]
    GroupedExtraUnsupported {
        group: String,
        extra: String,
        format: OutputFormat,
    },

    #[error("invalid output for file '{file}'")]
    #[diagnostic(code(depgen::invalid_output))]
    InvalidOutput {
        file: String,
        #[source]
        source: OutputSpecError,
    },

    #[error("file '{file}' is not declared under 'files'")]
    #[diagnostic(code(depgen::unknown_file), help("declared files are: {available}"))]
    UnknownFile { file: String, available: String },

    #[error("dependency group '{group}' is not declared")]
    #[diagnostic(code(depgen::unknown_group))]
    UnknownGroup { group: String },

    #[error("failed to serialize '{file_name}'")]
    Serialize {
        file_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to resolve path of '{path}'")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to output stream")]
    Stream(#[source] std::io::Error),
}
