use depgen_manifest::Manifest;

use super::Lint;
use crate::Diagnostic;

/// Warns about files that include no dependency groups.
pub struct EmptyIncludesLint;

impl Lint for EmptyIncludesLint {
    fn name(&self) -> &'static str {
        "empty-includes"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (key, file) in &manifest.files {
            if file.includes.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("file '{}' includes no dependency groups", key),
                    )
                    .at(format!("files.{}.includes", key)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_includes() {
        let manifest: Manifest = r#"
files:
  empty:
    output: conda
    includes: []
  full:
    output: conda
    includes: [g1]
dependencies:
  g1: {}
"#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        EmptyIncludesLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("files.empty.includes")
        );
    }
}
