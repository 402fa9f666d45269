//! Parameter and argument lists.

use std::fmt;

use indexmap::IndexMap;
use pyper_codegen::{CodeElement, SourceWriter};
use pyper_core::Result;

/// A parenthesized, comma-separated list: positional items first, then
/// `name=value` pairs, both in insertion order.
///
/// Serves both as a `def` parameter list (keyword values are defaults) and
/// as a call's argument list (e.g., a decorator call). Renders `()` when
/// empty.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::Parameters;
///
/// let params = Parameters::new().arg("a").arg("b").kwarg("key", "value");
/// assert_eq!(params.to_string(), "(a, b, key=value)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    positional: Vec<String>,
    keyword: IndexMap<String, String>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>) -> Self {
        self.positional.push(name.into());
        self
    }

    pub fn args(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.positional.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a `name=value` pair. Re-adding a name replaces its value in place.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    pub fn kwargs<N, V>(mut self, pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.keyword
            .extend(pairs.into_iter().map(|(n, v)| (n.into(), v.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self
            .positional
            .iter()
            .cloned()
            .chain(self.keyword.iter().map(|(k, v)| format!("{}={}", k, v)))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", items)
    }
}

impl CodeElement for Parameters {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pyper_codegen::testing::emit_to_string;

    use super::*;

    #[test]
    fn test_positional_parameters() {
        let params = Parameters::new().args(["a", "b"]);
        assert_eq!(emit_to_string(&params), "(a, b)");
    }

    #[test]
    fn test_keyword_parameters() {
        let params = Parameters::new().kwargs([("a", "1"), ("b", "2")]);
        assert_eq!(emit_to_string(&params), "(a=1, b=2)");
    }

    #[test]
    fn test_empty_parameters() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(emit_to_string(&params), "()");
    }

    #[test]
    fn test_full_parameters() {
        let params = Parameters::new()
            .args(["a", "b"])
            .kwargs([("a", "1"), ("b", "2")]);
        assert_eq!(params.len(), 4);
        assert_eq!(emit_to_string(&params), "(a, b, a=1, b=2)");
    }

    #[test]
    fn test_kwarg_replaced_in_place() {
        let params = Parameters::new()
            .kwarg("x", "1")
            .kwarg("y", "2")
            .kwarg("x", "3");
        assert_eq!(params.to_string(), "(x=3, y=2)");
    }
}
