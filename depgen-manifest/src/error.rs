use std::path::PathBuf;

use depgen_core::OutputSpecError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a YAML error.
    pub fn parse_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|loc| {
            let len = usize::from(loc.index() < self.src.len());
            SourceSpan::from((loc.index(), len))
        });
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid output error for a declared file.
    pub fn invalid_output_error(
        &self,
        file: impl Into<String>,
        source: OutputSpecError,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidOutput {
            src: self.named_source(),
            span,
            file: file.into(),
            source,
        })
    }

    /// Create an unknown group error for a file include.
    pub fn unknown_group_error(
        &self,
        file: impl Into<String>,
        group: impl Into<String>,
        available: &[&str],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownGroup {
            src: self.named_source(),
            span,
            file: file.into(),
            group: group.into(),
            available: available.join(", "),
        })
    }

    /// Create an invalid grouped entry error.
    pub fn invalid_grouped_entry_error(
        &self,
        group: impl Into<String>,
        key_count: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidGroupedEntry {
            src: self.named_source(),
            span,
            group: group.into(),
            key_count,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the configuration file with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dependency configuration")]
    #[diagnostic(code(depgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid output for file '{file}'")]
    #[diagnostic(
        code(depgen::invalid_output),
        help("use 'conda', 'requirements', a list of both, or 'none' on its own")
    )]
    InvalidOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        file: String,
        #[source]
        source: OutputSpecError,
    },

    #[error("file '{file}' includes unknown dependency group '{group}'")]
    #[diagnostic(
        code(depgen::unknown_group),
        help("declared groups are: {available}")
    )]
    UnknownGroup {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared under 'dependencies'")]
        span: Option<SourceSpan>,
        file: String,
        group: String,
        available: String,
    },

    #[error("grouped package entry in '{group}' must have exactly one key, found {key_count}")]
    #[diagnostic(
        code(depgen::invalid_grouped_entry),
        help("write one mapping per installer, e.g. '- pip: [package]'")
    )]
    InvalidGroupedEntry {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this group")]
        span: Option<SourceSpan>,
        group: String,
        key_count: usize,
    },
}
