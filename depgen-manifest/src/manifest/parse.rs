//! Manifest parsing from files and strings.

use std::str::FromStr;

use depgen_core::{DEFAULT_CONFIG_FILE, PackageEntry};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_CONFIG_FILE)
    }
}

impl Manifest {
    /// Parse a dependencies.yaml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest =
        serde_yaml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate cross references and values serde cannot check on its own.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let groups: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();

    for (key, file) in &manifest.files {
        let file_ctx = ctx.push("files").push(key);

        if let Err(e) = file.output.formats() {
            return Err(ctx.source_context().invalid_output_error(
                key,
                e,
                file_ctx.find_span("output"),
            ));
        }

        for include in &file.includes {
            if manifest.group(include).is_none() {
                return Err(ctx.source_context().unknown_group_error(
                    key,
                    include,
                    &groups,
                    file_ctx.find_value_span(include),
                ));
            }
        }
    }

    for (name, group) in &manifest.dependencies {
        for entry in group.packages() {
            match entry {
                PackageEntry::Grouped(extras) if extras.len() != 1 => {
                    let group_ctx = ctx.push("dependencies").push(name);
                    return Err(ctx.source_context().invalid_grouped_entry_error(
                        name,
                        extras.len(),
                        group_ctx.span(),
                    ));
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = r#"
files:
  all:
    output: conda
    includes: [g1]
dependencies:
  g1:
    common:
      - output_types: conda
        packages: [dep1]
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.files.len(), 1);
        assert!(manifest.is_included("g1"));
        assert_eq!(manifest.channels()[0], "rapidsai");
    }

    #[test]
    fn test_declared_channels() {
        let manifest: Manifest = r#"
channels: [conda-forge]
files: {}
dependencies: {}
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.channels(), vec!["conda-forge".to_string()]);
    }

    #[test]
    fn test_empty_channels_use_defaults() {
        let manifest: Manifest = "channels: []\nfiles: {}\ndependencies: {}\n"
            .parse()
            .unwrap();
        assert_eq!(manifest.channels().len(), depgen_core::DEFAULT_CHANNELS.len());
    }

    #[test]
    fn test_invalid_output_rejected() {
        let err = r#"
files:
  all:
    output: [none, conda]
    includes: []
dependencies: {}
"#
        .parse::<Manifest>()
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidOutput { ref file, .. } if file == "all"));
    }

    #[test]
    fn test_unknown_output_literal_rejected() {
        let err = "files:\n  all:\n    output: pip\n    includes: []\ndependencies: {}\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidOutput { .. }));
    }

    #[test]
    fn test_unknown_group_rejected() {
        let err = r#"
files:
  all:
    output: conda
    includes: [missing]
dependencies:
  g1: {}
"#
        .parse::<Manifest>()
        .unwrap_err();

        match *err {
            Error::UnknownGroup {
                group,
                available,
                span,
                ..
            } => {
                assert_eq!(group, "missing");
                assert_eq!(available, "g1");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_multi_key_grouped_entry_rejected() {
        let err = r#"
files: {}
dependencies:
  g1:
    common:
      - output_types: conda
        packages:
          - {pip: [a], npm: [b]}
"#
        .parse::<Manifest>()
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::InvalidGroupedEntry { key_count: 2, .. }
        ));
    }

    #[test]
    fn test_unquoted_float_values_match_quoted_ones() {
        let manifest: Manifest = r#"
files:
  all:
    output: conda
    includes: [g1]
    matrix:
      cuda: [12.0, "11.8"]
dependencies:
  g1:
    specific:
      - output_types: conda
        matrices:
          - matrix: {cuda: "12.0"}
            packages: [a]
          - matrix: {cuda: 11.8}
            packages: [b]
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.files["all"].matrix["cuda"], vec!["12.0", "11.8"]);
        let branches = &manifest.dependencies["g1"].specific[0].matrices;
        assert_eq!(branches[0].matrix["cuda"], "12.0");
        assert_eq!(branches[1].matrix["cuda"], "11.8");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "files: [unclosed".parse::<Manifest>().unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_output_types_is_parse_error() {
        let err = r#"
files: {}
dependencies:
  g1:
    common:
      - output_types: none
        packages: [a]
"#
        .parse::<Manifest>()
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
        assert!(format!("{:?}", err).contains("output_types"));
    }
}
