//! Validation utilities for Python identifiers

use std::collections::HashSet;

use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// Holds the raw source, the filename and the path through the module
/// (e.g., `["Circle", "area"]` while checking a method), so errors can
/// point back into pyper.toml.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "pyper.toml");
/// ctx.validate_name("Circle", "class")?;
///
/// let nested = ctx.push("Circle");
/// nested.validate_name("area", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'Circle.area'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a name is a plain Python identifier and not a keyword.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_python_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                self.context_for(kind),
                self.src,
                self.filename,
                find_name_span(self.src, name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                find_name_span(self.src, name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name such as `abc.ABC` or `functools.wraps`.
    pub fn validate_dotted(&self, name: &str, kind: &str) -> Result<()> {
        if name.is_empty() {
            return self.validate_name(name, kind);
        }
        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(Error::invalid_identifier(
                    name,
                    self.context_for(kind),
                    "dotted names cannot contain empty segments",
                    self.src,
                    self.filename,
                    find_name_span(self.src, name),
                ));
            }
            self.validate_name(segment, kind)?;
        }
        Ok(())
    }

    /// Validate a parameter entry.
    ///
    /// Accepts the bare `/` and `*` markers, `*args` and `**kwargs`, and an
    /// optional `: annotation` after the name.
    pub fn validate_parameter(&self, param: &str) -> Result<()> {
        let param = param.trim();
        if param == "/" || param == "*" {
            return Ok(());
        }
        let name = param
            .split_once(':')
            .map_or(param, |(name, _)| name)
            .trim()
            .trim_start_matches('*');
        self.validate_name(name, "parameter")
    }

    /// Reject names that appear more than once.
    pub fn check_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name) {
                return Err(Error::duplicate_name(
                    name,
                    self.context_for(kind),
                    self.src,
                    self.filename,
                    find_duplicate_spans(self.src, name),
                ));
            }
        }
        Ok(())
    }

    /// Create a validation error pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Error::validation(
            message,
            self.src,
            self.filename,
            find_name_span(self.src, needle),
        )
    }
}

/// Python hard keywords that cannot be used as identifiers.
/// Soft keywords (`match`, `case`, `type`, `_`) are valid names.
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Names are quoted string values (`name = "area"`), so the quoted form is
/// tried first; the span excludes the quotes.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }
    if let Some(pos) = src.find(&format!("\"{}\"", name)) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Spans of the first two quoted occurrences of `name`.
fn find_duplicate_spans(src: &str, name: &str) -> (Option<SourceSpan>, Option<SourceSpan>) {
    let quoted = format!("\"{}\"", name);
    let mut spans = src
        .match_indices(&quoted)
        .map(|(pos, _)| SourceSpan::from((pos + 1, name.len())));
    (spans.next(), spans.next())
}

/// Validate that a name is a valid Python identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
