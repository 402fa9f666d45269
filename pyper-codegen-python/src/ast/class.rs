//! Python class builder.

use std::fmt;

use pyper_codegen::{BlankLine, Block, CodeElement, SourceWriter, emit_block};
use pyper_core::Result;

use super::{Assign, Decorator, Docstring, Function, Pass};

/// Builder for `class Name(Parents):` blocks.
///
/// A class without parents is emitted as `class Name(object):`.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::{Class, Function};
///
/// let class = Class::new("Circle")
///     .attribute("radius", "1.0")
///     .method(Function::new("area").arg("self").body_line("return self.radius ** 2"));
///
/// assert_eq!(
///     class.to_string(),
///     "class Circle(object):\n    radius = 1.0\n\n    def area(self):\n        return self.radius ** 2\n"
/// );
/// ```
pub struct Class {
    name: String,
    parents: Vec<String>,
    decorators: Vec<Decorator>,
    doc: Option<Docstring>,
    body: Vec<Box<dyn CodeElement>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            decorators: Vec::new(),
            doc: None,
            body: Vec::new(),
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn parents(mut self, parents: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(Docstring::new(doc));
        self
    }

    /// Append a class attribute, `name = value`.
    pub fn attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.child(Assign::new(name, value))
    }

    /// Append a method, separated from earlier members by a blank line.
    pub fn method(mut self, method: Function) -> Self {
        if !self.body.is_empty() {
            self.body.push(Box::new(BlankLine));
        }
        self.child(method)
    }

    /// Append an arbitrary body element.
    pub fn child(mut self, element: impl CodeElement + 'static) -> Self {
        self.body.push(Box::new(element));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_element(self, f)
    }
}

impl Block for Class {
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        for decorator in &self.decorators {
            decorator.emit(writer)?;
        }
        if self.parents.is_empty() {
            write!(writer, "class {}(object):", self.name)?;
        } else {
            write!(writer, "class {}({}):", self.name, self.parents.join(", "))?;
        }
        writer.line_feed()?;
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

impl CodeElement for Class {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_block(self, writer)
    }
}
