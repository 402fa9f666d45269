//! Parsing and validation of `pyper.toml` module descriptions.
//!
//! A module description lists the imports, classes and functions of one
//! Python module plus the style it should be emitted with:
//!
//! ```toml
//! [module]
//! name = "shapes"
//! header = "Generated by pyper. Do not edit."
//!
//! [style]
//! indent = "spaces4"
//! line_ending = "lf"
//!
//! [[imports]]
//! module = "math"
//! symbols = ["pi"]
//!
//! [[classes]]
//! name = "Circle"
//! attributes = [{ name = "radius", value = "1.0" }]
//!
//! [[classes.methods]]
//! name = "area"
//! args = ["self"]
//! body = "return pi * self.radius ** 2"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod items;
mod validate;

use std::path::Path;

pub use error::{Error, Result};
pub use items::{ClassSpec, DecoratorSpec, FunctionSpec, ImportSpec, KeywordSpec, ModuleConfig};
use pyper_core::WriterConfig;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root of a pyper.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub module: ModuleConfig,

    /// Indentation and line endings of the generated file
    #[serde(default)]
    pub style: WriterConfig,

    #[serde(default)]
    pub imports: Vec<ImportSpec>,

    /// Emitted before `functions`
    #[serde(default)]
    pub classes: Vec<ClassSpec>,

    #[serde(default)]
    pub functions: Vec<FunctionSpec>,
}

impl Manifest {
    /// Validate the manifest after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        ctx.validate_dotted(&self.module.name, "module")?;

        for import in &self.imports {
            validate_import(&ctx, import)?;
        }

        ctx.check_unique(
            self.classes
                .iter()
                .map(|c| c.name.as_str())
                .chain(self.functions.iter().map(|f| f.name.as_str())),
            "top-level definition",
        )?;

        for class in &self.classes {
            validate_class(&ctx, class)?;
        }
        for function in &self.functions {
            validate_function(&ctx, function)?;
        }

        Ok(())
    }

    /// Number of top-level definitions.
    pub fn definition_count(&self) -> usize {
        self.classes.len() + self.functions.len()
    }
}

fn validate_import(ctx: &ParseContext<'_>, import: &ImportSpec) -> Result<()> {
    ctx.validate_dotted(&import.module, "import")?;

    if let Some(alias) = &import.alias {
        if !import.symbols.is_empty() {
            return Err(ctx.validation_error(
                format!(
                    "import of '{}' cannot have both an alias and symbols",
                    import.module
                ),
                alias,
            ));
        }
        ctx.validate_name(alias, "import alias")?;
    }

    for symbol in &import.symbols {
        if symbol != "*" {
            ctx.validate_name(symbol, "imported symbol")?;
        }
    }
    Ok(())
}

fn validate_decorators(ctx: &ParseContext<'_>, decorators: &[DecoratorSpec]) -> Result<()> {
    for decorator in decorators {
        ctx.validate_dotted(decorator.name(), "decorator")?;
        if let DecoratorSpec::Call { kwargs, .. } = decorator {
            for kwarg in kwargs {
                ctx.validate_name(&kwarg.name, "decorator argument")?;
            }
        }
    }
    Ok(())
}

fn validate_class(ctx: &ParseContext<'_>, class: &ClassSpec) -> Result<()> {
    ctx.validate_name(&class.name, "class")?;

    let ctx = ctx.push(&class.name);
    for parent in &class.parents {
        ctx.validate_dotted(parent, "parent class")?;
    }
    validate_decorators(&ctx, &class.decorators)?;

    for attribute in &class.attributes {
        ctx.validate_name(&attribute.name, "attribute")?;
    }
    ctx.check_unique(class.methods.iter().map(|m| m.name.as_str()), "method")?;

    for method in &class.methods {
        validate_function(&ctx, method)?;
    }
    Ok(())
}

fn validate_function(ctx: &ParseContext<'_>, function: &FunctionSpec) -> Result<()> {
    ctx.validate_name(&function.name, "function")?;

    let ctx = ctx.push(&function.name);
    validate_decorators(&ctx, &function.decorators)?;

    for arg in &function.args {
        ctx.validate_parameter(arg)?;
    }
    for kwarg in &function.kwargs {
        ctx.validate_name(&kwarg.name, "parameter")?;
    }
    ctx.check_unique(function.parameter_names(), "parameter")?;

    Ok(())
}

/// Parse a pyper.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a pyper.toml from a string (uses "pyper.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, "pyper.toml")
}

/// Parse a pyper.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    manifest.validate(content, filename)?;
    tracing::debug!(
        module = %manifest.module.name,
        definitions = manifest.definition_count(),
        "parsed module description"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use pyper_core::{Indent, LineEnding};

    use super::*;

    const SHAPES: &str = r#"
        [module]
        name = "shapes"
        header = "Generated by pyper"

        [style]
        indent = "tab"
        line_ending = "lf"

        [[imports]]
        module = "math"
        symbols = ["pi"]

        [[classes]]
        name = "Circle"
        parents = ["abc.ABC"]
        attributes = [{ name = "radius", value = "1.0" }]

        [[classes.methods]]
        name = "area"
        args = ["self"]
        body = "return pi * self.radius ** 2"

        [[functions]]
        name = "bar"
        args = ["a", "b"]
        kwargs = [{ name = "key", value = "value" }]
        decorators = ["deco1", { name = "deco2", args = ["a", "b"] }]
    "#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = parse_str(SHAPES).unwrap();

        assert_eq!(manifest.module.name, "shapes");
        assert_eq!(
            manifest.style,
            WriterConfig::new(Indent::Tab, LineEnding::Lf)
        );
        assert_eq!(manifest.imports[0].symbols, ["pi"]);
        assert_eq!(manifest.classes[0].methods[0].name, "area");
        assert_eq!(manifest.functions[0].kwargs[0].value, "value");
        assert_eq!(manifest.definition_count(), 2);
    }

    #[test]
    fn test_style_defaults() {
        let manifest = parse_str("[module]\nname = \"empty\"").unwrap();
        assert_eq!(manifest.style, WriterConfig::default());
        assert!(manifest.classes.is_empty());
    }

    #[test]
    fn test_unknown_style_key_is_parse_error() {
        let err = parse_str("[module]\nname = \"m\"\n\n[style]\nindnet = \"tab\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_module_is_parse_error() {
        let err = parse_str("[[functions]]\nname = \"f\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_function_name_rejected() {
        let err = parse_str(
            r#"
            [module]
            name = "m"

            [[functions]]
            name = "lambda"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "lambda"));
    }

    #[test]
    fn test_invalid_parameter_reports_path() {
        let err = parse_str(
            r#"
            [module]
            name = "m"

            [[classes]]
            name = "C"

            [[classes.methods]]
            name = "run"
            args = ["self", "bad-name"]
            "#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier { context, .. } => {
                assert_eq!(context, "parameter in 'C.run'");
            }
            other => panic!("Expected InvalidIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_definitions_rejected() {
        let err = parse_str(
            r#"
            [module]
            name = "m"

            [[classes]]
            name = "thing"

            [[functions]]
            name = "thing"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateName { .. }));
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let err = parse_str(
            r#"
            [module]
            name = "m"

            [[functions]]
            name = "f"
            args = ["a"]
            kwargs = [{ name = "a", value = "1" }]
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate name 'a' (parameter in 'f')");
    }

    #[test]
    fn test_alias_with_symbols_rejected() {
        let err = parse_str(
            r#"
            [module]
            name = "m"

            [[imports]]
            module = "numpy"
            alias = "np"
            symbols = ["array"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = parse_file(temp.path().join("pyper.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pyper.toml");
        std::fs::write(&path, SHAPES).unwrap();
        let manifest = parse_file(&path).unwrap();
        assert_eq!(manifest.functions[0].decorators.len(), 2);
    }
}
