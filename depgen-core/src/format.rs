//! Output formats for generated dependency files.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported output formats.
///
/// Each format carries the metadata needed to name and place its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Conda environment manifest (`.yaml`)
    Conda,
    /// Pip requirements list (`.txt`)
    Requirements,
    /// Suppresses generation for a file
    None,
}

impl OutputFormat {
    /// All formats, in declaration order.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Conda,
        OutputFormat::Requirements,
        OutputFormat::None,
    ];

    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Conda => "conda",
            OutputFormat::Requirements => "requirements",
            OutputFormat::None => "none",
        }
    }

    /// File extension with the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Conda => ".yaml",
            OutputFormat::Requirements => ".txt",
            OutputFormat::None => "",
        }
    }

    /// Literal prepended to generated file names.
    pub fn file_prefix(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Requirements => Some("requirements"),
            OutputFormat::Conda | OutputFormat::None => None,
        }
    }

    /// Output directory used when a file does not override it,
    /// relative to the configuration file.
    pub fn default_dir(&self) -> &'static str {
        match self {
            OutputFormat::Conda => "conda/environments",
            OutputFormat::Requirements => "python",
            OutputFormat::None => ".",
        }
    }

    /// Whether grouped extras (e.g. `pip:` sub-lists) can be written.
    pub fn supports_grouped_entries(&self) -> bool {
        matches!(self, OutputFormat::Conda)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, OutputFormat::None)
    }

    fn non_none() -> impl Iterator<Item = OutputFormat> {
        Self::ALL.into_iter().filter(|f| !f.is_none())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown output format '{}', expected one of {}",
                    s,
                    quoted_list(Self::ALL.into_iter())
                )
            })
    }
}

/// Errors raised while interpreting `output` and `output_types` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputSpecError {
    #[error("'output: [none]' cannot be combined with any other values")]
    NoneCombined,

    #[error(
        "'output' key can only be 'conda', 'requirements', 'none', or a list of the non-'none' values (got '{value}')"
    )]
    InvalidOutput { value: String },

    #[error(
        "'output_types' key can only be 'conda', 'requirements', or a list of these values (got '{value}')"
    )]
    InvalidOutputTypes { value: String },
}

/// Determine the formats requested by a file's `output` values.
///
/// `none` on its own requests nothing; it cannot be mixed with other values.
pub fn requested_formats(values: &[String]) -> Result<Vec<OutputFormat>, OutputSpecError> {
    if values.len() == 1 && values[0] == OutputFormat::None.as_str() {
        return Ok(Vec::new());
    }

    if values.len() > 1 && values.iter().any(|v| v == OutputFormat::None.as_str()) {
        return Err(OutputSpecError::NoneCombined);
    }

    values
        .iter()
        .map(|value| {
            OutputFormat::non_none()
                .find(|f| f.as_str() == value)
                .ok_or_else(|| OutputSpecError::InvalidOutput {
                    value: value.clone(),
                })
        })
        .collect()
}

/// Determine the formats a dependency entry applies to.
pub fn entry_output_types(values: &[String]) -> Result<Vec<OutputFormat>, OutputSpecError> {
    values
        .iter()
        .map(|value| {
            OutputFormat::non_none()
                .find(|f| f.as_str() == value)
                .ok_or_else(|| OutputSpecError::InvalidOutputTypes {
                    value: value.clone(),
                })
        })
        .collect()
}

fn quoted_list(formats: impl Iterator<Item = OutputFormat>) -> String {
    formats
        .map(|f| format!("'{}'", f))
        .collect::<Vec<_>>()
        .join(", ")
}
