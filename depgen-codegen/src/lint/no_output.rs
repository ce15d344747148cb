use depgen_manifest::Manifest;

use super::Lint;
use crate::Diagnostic;

/// Notes files that request no output formats (`none` or an empty list).
pub struct NoOutputLint;

impl Lint for NoOutputLint {
    fn name(&self) -> &'static str {
        "no-output"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (key, file) in &manifest.files {
            // Invalid output values are rejected at load time.
            let generates_nothing = file
                .output
                .formats()
                .map(|formats| formats.is_empty())
                .unwrap_or(false);

            if generates_nothing {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "file '{}' requests no output formats and is never generated",
                            key
                        ),
                    )
                    .at(format!("files.{}.output", key)),
                );
            }
        }
    }
}
