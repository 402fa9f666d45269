//! Declarations that make up a module description.

use serde::Deserialize;

/// `[module]` metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Dotted module path, e.g. `shapes` or `geometry.shapes`
    pub name: String,
    /// Comment placed at the top of the generated file
    pub header: Option<String>,
    /// Module docstring
    pub doc: Option<String>,
}

/// An `[[imports]]` entry.
///
/// With `symbols`, renders `from module import a, b`; otherwise
/// `import module` (or `import module as alias`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ImportSpec {
    pub module: String,
    pub alias: Option<String>,
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// A `name = value` pair: a keyword parameter with its default, a keyword
/// argument of a decorator call, or a class attribute.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordSpec {
    pub name: String,
    pub value: String,
}

/// A decorator, either a bare name or a call.
///
/// ```toml
/// decorators = ["staticmethod", { name = "lru_cache", kwargs = [{ name = "maxsize", value = "None" }] }]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DecoratorSpec {
    Name(String),
    Call {
        name: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        kwargs: Vec<KeywordSpec>,
    },
}

impl DecoratorSpec {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Call { name, .. } => name,
        }
    }
}

/// A `[[functions]]` entry or a class's `[[classes.methods]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FunctionSpec {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub kwargs: Vec<KeywordSpec>,
    /// Return annotation
    pub returns: Option<String>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub decorators: Vec<DecoratorSpec>,
    pub doc: Option<String>,
    /// Verbatim body source; each line is indented under the `def`
    pub body: Option<String>,
}

impl FunctionSpec {
    /// Parameter names in declaration order, without annotations or markers.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .map(|arg| arg.split_once(':').map_or(arg.as_str(), |(name, _)| name))
            .map(|name| name.trim().trim_start_matches('*'))
            .filter(|name| !name.is_empty() && *name != "/")
            .chain(self.kwargs.iter().map(|kw| kw.name.as_str()))
    }
}

/// A `[[classes]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassSpec {
    pub name: String,
    /// Base classes; `object` when empty
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub decorators: Vec<DecoratorSpec>,
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes: Vec<KeywordSpec>,
    #[serde(default)]
    pub methods: Vec<FunctionSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorator_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            decorators: Vec<DecoratorSpec>,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"decorators = ["deco1", { name = "deco2", args = ["a", "b"] }]"#,
        )
        .unwrap();

        assert_eq!(wrapper.decorators[0], DecoratorSpec::Name("deco1".into()));
        assert_eq!(wrapper.decorators[1].name(), "deco2");
        match &wrapper.decorators[1] {
            DecoratorSpec::Call { args, kwargs, .. } => {
                assert_eq!(args, &["a", "b"]);
                assert!(kwargs.is_empty());
            }
            other => panic!("Expected call decorator, got {other:?}"),
        }
    }

    #[test]
    fn test_parameter_names() {
        let function: FunctionSpec = toml::from_str(
            r#"
            name = "f"
            args = ["self", "/", "x: int", "*args", "*", "**kw"]
            kwargs = [{ name = "key", value = "None" }]
            "#,
        )
        .unwrap();

        let names: Vec<_> = function.parameter_names().collect();
        assert_eq!(names, ["self", "x", "args", "kw", "key"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = toml::from_str::<FunctionSpec>(
            r#"
            name = "f"
            argz = ["a"]
            "#,
        );
        assert!(result.is_err());
    }
}
