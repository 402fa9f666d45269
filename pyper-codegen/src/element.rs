//! The code element protocol and generic elements.

use pyper_core::Result;

use crate::SourceWriter;

/// A node that knows how to render itself into a [`SourceWriter`].
///
/// Elements hold no reference to the writer between calls; emission takes
/// `&self`, so an element can be emitted any number of times and only the
/// writer accumulates state.
///
/// There is deliberately no default implementation: a type that forgets to
/// render itself does not compile.
pub trait CodeElement {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()>;
}

impl<T: CodeElement + ?Sized> CodeElement for &T {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        (**self).emit(writer)
    }
}

impl<T: CodeElement + ?Sized> CodeElement for Box<T> {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        self.as_ref().emit(writer)
    }
}

/// An absent element emits nothing.
impl<T: CodeElement> CodeElement for Option<T> {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        match self {
            Some(element) => element.emit(writer),
            None => Ok(()),
        }
    }
}

/// Inline text, written without a line feed.
impl CodeElement for str {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        writer.write(self)?;
        Ok(())
    }
}

impl CodeElement for String {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        self.as_str().emit(writer)
    }
}

/// One or more lines of verbatim text.
///
/// Lines are separated by the writer's line terminator and each is indented
/// at the current depth. No terminator follows the last line, so a
/// single-line `Text` can be used inline (e.g., as a condition).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    lines: Vec<String>,
}

impl Text {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            lines: vec![initial.into()],
        }
    }

    /// Split `content` on line breaks.
    pub fn from_lines(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Append a line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl CodeElement for Text {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writer.line_feed()?;
            }
            writer.write(line)?;
        }
        Ok(())
    }
}

/// A single statement line, terminated by its own line feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(String);

impl Line {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }
}

impl CodeElement for Line {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        writer.write_line(&self.0)?;
        Ok(())
    }
}

/// An empty line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankLine;

impl CodeElement for BlankLine {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        if !writer.is_at_line_start() {
            writer.line_feed()?;
        }
        writer.line_feed()?;
        Ok(())
    }
}

/// Elements emitted back to back at the same depth.
#[derive(Default)]
pub struct Sequence {
    elements: Vec<Box<dyn CodeElement>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, element: impl CodeElement + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    pub fn push(&mut self, element: impl CodeElement + 'static) {
        self.elements.push(Box::new(element));
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl CodeElement for Sequence {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        self.elements
            .iter()
            .try_for_each(|element| element.emit(writer))
    }
}
