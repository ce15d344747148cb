//! Findings reported by manifest lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The manifest cannot be generated as written.
    Error,
    /// Likely a mistake, but generation still works.
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single finding about a manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the lint that produced this diagnostic.
    pub lint: &'static str,
    pub message: String,
    /// Dotted key path in the manifest (e.g. `files.all.includes`).
    pub location: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint,
            message: message.into(),
            location: None,
        }
    }

    pub fn error(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    pub fn info(lint: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, lint, message)
    }

    /// Attach a manifest location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
