//! Python function builder.

use std::fmt;

use pyper_codegen::{Block, CodeElement, Line, SourceWriter, Text, emit_block};
use pyper_core::Result;

use super::{Decorator, Docstring, Parameters, Pass};

/// Builder for `def` blocks, including methods.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::{Decorator, Function, Parameters};
///
/// let f = Function::new("bar")
///     .decorator(Decorator::new("deco1"))
///     .decorator(Decorator::call("deco2", Parameters::new().args(["a", "b"])));
///
/// assert_eq!(f.to_string(), "@deco1\n@deco2(a, b)\ndef bar():\n    pass\n");
/// ```
pub struct Function {
    name: String,
    decorators: Vec<Decorator>,
    is_async: bool,
    params: Parameters,
    returns: Option<String>,
    doc: Option<Docstring>,
    body: Vec<Box<dyn CodeElement>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            is_async: false,
            params: Parameters::new(),
            returns: None,
            doc: None,
            body: Vec::new(),
        }
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn arg(mut self, name: impl Into<String>) -> Self {
        self.params = self.params.arg(name);
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.params = self.params.kwarg(name, default);
        self
    }

    /// Replace the whole parameter list.
    pub fn params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// Set the return annotation.
    pub fn returns(mut self, annotation: impl Into<String>) -> Self {
        self.returns = Some(annotation.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(Docstring::new(doc));
        self
    }

    pub fn child(mut self, element: impl CodeElement + 'static) -> Self {
        self.body.push(Box::new(element));
        self
    }

    /// Add a line to the function body.
    pub fn body_line(self, line: impl Into<String>) -> Self {
        self.child(Line::new(line))
    }

    /// Add raw body content (can contain multiple lines). Blank content is
    /// ignored.
    pub fn body(self, content: &str) -> Self {
        if content.trim().is_empty() {
            return self;
        }
        self.child(Text::from_lines(content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_element(self, f)
    }
}

impl Block for Function {
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        for decorator in &self.decorators {
            decorator.emit(writer)?;
        }
        let async_kw = if self.is_async { "async " } else { "" };
        write!(writer, "{}def {}{}", async_kw, self.name, self.params)?;
        if let Some(returns) = &self.returns {
            write!(writer, " -> {}", returns)?;
        }
        writer.write(":")?.line_feed()?;
        writer.emit_indented(&self.doc)?;
        Ok(())
    }

    fn children(&self) -> &[Box<dyn CodeElement>] {
        &self.body
    }

    fn placeholder(&self) -> &dyn CodeElement {
        &Pass
    }
}

impl CodeElement for Function {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_block(self, writer)
    }
}
