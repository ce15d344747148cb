//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::error::SourceContext;

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the YAML hierarchy so spans can be located for nested keys.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "dependencies.yaml");
/// let file_ctx = ctx.push("files").push("all");
/// let span = file_ctx.find_span("output");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["files", "all"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Span of the current path's last key.
    pub fn span(&self) -> Option<SourceSpan> {
        find_key_path(self.source.src(), &self.path)
    }

    /// Span of `key` nested under the current path.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        let mut path = self.path.clone();
        path.push(key);
        find_key_path(self.source.src(), &path)
    }

    /// Span of a value token (e.g. an include name) under the current path.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let start = match self.span() {
            Some(span) => span.offset(),
            None => 0,
        };
        find_token(src, value, start).map(|pos| SourceSpan::from((pos, value.len())))
    }
}

/// Find the span of a nested mapping key, following `path` in order.
///
/// Each segment is searched for as a `key:` line after the previous
/// segment's match, which is enough to disambiguate the shallow structure
/// of dependencies.yaml.
pub(crate) fn find_key_path(src: &str, path: &[&str]) -> Option<SourceSpan> {
    let mut offset = 0;
    let mut found = None;

    for key in path {
        let (pos, len) = find_key(src, key, offset)?;
        found = Some(SourceSpan::from((pos, len)));
        offset = pos + len;
    }

    found
}

/// Find a line declaring `key:` at or after `from`, returning (offset, length).
fn find_key(src: &str, key: &str, from: usize) -> Option<(usize, usize)> {
    let candidates = [
        format!("{}:", key),
        format!("\"{}\":", key),
        format!("'{}':", key),
    ];

    let mut line_start = 0;
    for line in src.split_inclusive('\n') {
        let line_end = line_start + line.len();
        if line_end > from {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            let trimmed = trimmed.strip_prefix("- ").unwrap_or(trimmed);
            let dash = line.len() - indent - trimmed.len();

            for candidate in &candidates {
                if trimmed.starts_with(candidate.as_str()) && line_start + indent >= from {
                    let quoted = candidate.len() - key.len() - 1;
                    let pos = line_start + indent + dash + quoted / 2;
                    return Some((pos, key.len()));
                }
            }
        }
        line_start = line_end;
    }

    None
}

/// Find `token` as a whole word at or after `from`.
fn find_token(src: &str, token: &str, from: usize) -> Option<usize> {
    if token.is_empty() || from > src.len() {
        return None;
    }

    let is_word = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');

    src[from..].match_indices(token).find_map(|(idx, _)| {
        let pos = from + idx;
        let before_ok = src[..pos].chars().next_back().is_none_or(|c| !is_word(c));
        let after_ok = src[pos + token.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_word(c));
        (before_ok && after_ok).then_some(pos)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "\
files:
  all:
    output: conda
    includes: [build]
  test:
    output: none
    includes:
      - build
dependencies:
  build:
    common: []
";

    fn span_text(span: SourceSpan) -> &'static str {
        &SRC[span.offset()..span.offset() + span.len()]
    }

    #[test]
    fn test_find_key_path() {
        let span = find_key_path(SRC, &["files", "test", "output"]).unwrap();
        assert_eq!(span_text(span), "output");
        assert_eq!(span.offset(), SRC.find("output: none").unwrap());
    }

    #[test]
    fn test_find_key_path_missing() {
        assert!(find_key_path(SRC, &["files", "missing"]).is_none());
    }

    #[test]
    fn test_find_quoted_key() {
        let src = "files:\n  \"all\":\n    output: conda\n";
        let span = find_key_path(src, &["files", "all"]).unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "all");
    }

    #[test]
    fn test_find_value_span_after_path() {
        let ctx = ParseContext::new(SRC, "dependencies.yaml");
        let span = ctx.push("files").push("test").find_value_span("build").unwrap();
        assert_eq!(span.offset(), SRC.find("- build").unwrap() + 2);
    }

    #[test]
    fn test_find_token_respects_word_boundaries() {
        assert_eq!(find_token("builder build", "build", 0), Some(8));
        assert_eq!(find_token("builder", "build", 0), None);
    }
}
