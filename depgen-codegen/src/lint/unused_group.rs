use depgen_manifest::Manifest;

use super::Lint;
use crate::Diagnostic;

/// Warns about dependency groups no file includes.
pub struct UnusedGroupLint;

impl Lint for UnusedGroupLint {
    fn name(&self) -> &'static str {
        "unused-group"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for name in manifest.dependencies.keys() {
            if !manifest.is_included(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("dependency group '{}' is not included by any file", name),
                    )
                    .at(format!("dependencies.{}", name)),
                );
            }
        }
    }
}
