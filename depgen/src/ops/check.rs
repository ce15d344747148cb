//! Check operation - lints plus a full dry resolution.

use depgen_codegen::{Diagnostic, Generator, Linter, OutputMode, Severity};
use depgen_manifest::DependenciesYaml;
use tracing::debug;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lints, then resolves and renders every declared file in memory so
/// coverage gaps surface without touching the filesystem.
pub fn check(config: &DependenciesYaml) -> CheckReport {
    let mut diagnostics = Linter::new().run(config.manifest());

    let file_count =
        match Generator::new(config.manifest(), config.path()).preview(OutputMode::Files) {
            Ok(artifacts) => artifacts.len(),
            Err(e) => {
                debug!(error = %e, "dry resolution failed");
                diagnostics.insert(0, Diagnostic::error("resolution", e.to_string()));
                0
            }
        };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message,
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        config_path: config.path().to_path_buf(),
        file_count,
        errors,
        warnings,
        infos,
    }
}
