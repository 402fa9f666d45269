use pyper_codegen::{CodeElement, SourceWriter};
use pyper_core::Result;

use super::Parameters;

/// A decorator line: `@name` or `@name(args)`.
///
/// The argument list is only rendered when one was given, so
/// `Decorator::new("property")` yields `@property` while
/// `Decorator::call("cache", Parameters::new())` yields `@cache()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    name: String,
    arguments: Option<Parameters>,
}

impl Decorator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    pub fn call(name: impl Into<String>, arguments: Parameters) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CodeElement for Decorator {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        write!(writer, "@{}", self.name)?;
        writer.emit_element(&self.arguments)?.line_feed()?;
        Ok(())
    }
}
