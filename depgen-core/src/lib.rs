//! Core types and utilities for the dependency file generator.
//!
//! This crate provides the fundamental types shared by the manifest parser
//! and the resolution engine: output formats, package entries, matrix
//! combinations, and generated file handling.

mod file;
mod format;
mod package;
mod paths;
mod types;

// File operations
pub use file::{File, WriteResult};
// Fundamental types
pub use format::{OutputFormat, OutputSpecError, entry_output_types, requested_formats};
pub use package::PackageEntry;
pub use paths::{relative_path, relative_to};
pub use types::{Combination, MatrixSpec, format_combination};

/// Name of the generator, as written in generated file headers.
pub const CLI_NAME: &str = "rapids-dependency-file-generator";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "dependencies.yaml";

/// Channels used when a configuration does not declare any.
pub const DEFAULT_CHANNELS: &[&str] = &[
    "rapidsai",
    "rapidsai-nightly",
    "dask/label/dev",
    "conda-forge",
    "nvidia",
];
