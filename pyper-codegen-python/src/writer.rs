use std::ops::{Deref, DerefMut};

use pyper_codegen::SourceWriter;
use pyper_core::{Indent, Sink, WriterConfig};

/// A [`SourceWriter`] set up for Python: four spaces per level.
///
/// Derefs to the underlying writer, so every writer operation is available
/// directly.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::{Class, PythonWriter};
/// use pyper_core::{LineEnding, WriterConfig};
///
/// let mut out = String::new();
/// let config = WriterConfig::new(PythonWriter::INDENT, LineEnding::Lf);
/// let mut writer = PythonWriter::with_config(&mut out, config);
/// writer.emit_element(&Class::new("Foo"))?;
/// drop(writer);
///
/// assert_eq!(out, "class Foo(object):\n    pass\n");
/// # Ok::<(), pyper_core::Error>(())
/// ```
#[derive(Debug)]
pub struct PythonWriter<'w>(SourceWriter<'w>);

impl<'w> PythonWriter<'w> {
    pub const INDENT: Indent = Indent::FOUR_SPACES;

    /// Four spaces and the platform's line terminator.
    pub fn new(sink: impl Sink + 'w) -> Self {
        Self::with_config(sink, WriterConfig::default().with_indent(Self::INDENT))
    }

    pub fn with_config(sink: impl Sink + 'w, config: WriterConfig) -> Self {
        Self(SourceWriter::with_config(sink, config))
    }

    pub fn into_inner(self) -> SourceWriter<'w> {
        self.0
    }
}

impl<'w> Deref for PythonWriter<'w> {
    type Target = SourceWriter<'w>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PythonWriter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
