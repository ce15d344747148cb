//! Manifest lints run by `check`.

mod empty_includes;
mod no_output;
mod unused_group;

use depgen_manifest::Manifest;

pub use empty_includes::EmptyIncludesLint;
pub use no_output::NoOutputLint;
pub use unused_group::UnusedGroupLint;

use crate::Diagnostic;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// A configurable set of lints.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnusedGroupLint),
                Box::new(NoOutputLint),
                Box::new(EmptyIncludesLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Run every lint, most severe findings first.
    pub fn run(&self, manifest: &Manifest) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(manifest, &mut diagnostics);
        }
        diagnostics.sort_by_key(|d| d.severity);
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lints() {
        let manifest: Manifest = r#"
files:
  skipped:
    output: none
    includes: []
dependencies:
  unused: {}
"#
        .parse()
        .unwrap();

        let lints: Vec<&str> = Linter::new().run(&manifest).iter().map(|d| d.lint).collect();
        assert_eq!(lints, vec!["unused-group", "empty-includes", "no-output"]);
    }

    #[test]
    fn test_custom_lint_and_ordering() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn check(&self, _manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let manifest: Manifest = r#"
files:
  all:
    output: none
    includes: []
dependencies: {}
"#
        .parse()
        .unwrap();

        let diagnostics = Linter::new().with_lint(AlwaysErrorLint).run(&manifest);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics.len(), 3);
    }

    #[test]
    fn test_empty_linter_reports_nothing() {
        let manifest: Manifest = "files: {}\ndependencies:\n  unused: {}\n".parse().unwrap();
        assert!(Linter::empty().run(&manifest).is_empty());
    }
}
