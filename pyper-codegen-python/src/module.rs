//! Whole-module rendering.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use pyper_codegen::{CodeElement, SourceWriter};
use pyper_core::{FmtSink, GeneratedFile, Sink, WriterConfig};

use crate::{
    PythonWriter,
    ast::{Comment, Docstring, Imports},
};

/// A Python source file: header comment, docstring, imports and top-level
/// definitions.
///
/// Sections are separated by a blank line; top-level definitions are
/// separated from each other and from what precedes them by two.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::{Function, PythonModule};
/// use pyper_core::{LineEnding, WriterConfig};
///
/// let mut module = PythonModule::new("greet")
///     .config(WriterConfig::default().with_line_ending(LineEnding::Lf));
/// module.imports_mut().import("sys");
/// module.push(Function::new("main").body_line("print(sys.argv)"));
///
/// assert_eq!(
///     module.to_string(),
///     "import sys\n\n\ndef main():\n    print(sys.argv)\n"
/// );
/// ```
pub struct PythonModule {
    name: String,
    header: Option<Comment>,
    doc: Option<Docstring>,
    imports: Imports,
    body: Vec<Box<dyn CodeElement>>,
    config: WriterConfig,
}

impl PythonModule {
    /// `name` is the dotted module path, e.g. `geometry.shapes`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            doc: None,
            imports: Imports::new(),
            body: Vec::new(),
            config: WriterConfig::default().with_indent(PythonWriter::INDENT),
        }
    }

    /// Leading comment. Blank text clears it.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.header = (!text.trim().is_empty()).then(|| Comment::new(text));
        self
    }

    /// Module docstring. Blank text clears it.
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.doc = (!text.trim().is_empty()).then(|| Docstring::new(text));
        self
    }

    pub fn config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn imports(mut self, imports: Imports) -> Self {
        self.imports.merge(&imports);
        self
    }

    pub fn imports_mut(&mut self) -> &mut Imports {
        &mut self.imports
    }

    /// Add a top-level definition.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, element: impl CodeElement + 'static) -> Self {
        self.push(element);
        self
    }

    pub fn push(&mut self, element: impl CodeElement + 'static) {
        self.body.push(Box::new(element));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the module's file relative to the package root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.py", self.name.replace('.', "/")))
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.doc.is_none()
            && self.imports.is_empty()
            && self.body.is_empty()
    }

    /// Render the module into `sink` using the module's configuration.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %self.name))]
    pub fn render_to<'a>(&'a self, sink: impl Sink + 'a) -> pyper_core::Result<()> {
        let mut writer = PythonWriter::with_config(sink, self.config);
        writer.add_element(self);
        writer.emit()
    }
}

/// Close the current line, then add `count` empty lines.
fn separate(writer: &mut SourceWriter<'_>, count: usize) -> pyper_core::Result<()> {
    if !writer.is_at_line_start() {
        writer.line_feed()?;
    }
    for _ in 0..count {
        writer.line_feed()?;
    }
    Ok(())
}

impl CodeElement for PythonModule {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> pyper_core::Result<()> {
        let mut started = false;

        let sections: [Option<&dyn CodeElement>; 3] = [
            self.header.as_ref().map(|h| h as &dyn CodeElement),
            self.doc.as_ref().map(|d| d as &dyn CodeElement),
            (!self.imports.is_empty()).then_some(&self.imports as &dyn CodeElement),
        ];
        for section in sections.into_iter().flatten() {
            if started {
                separate(writer, 1)?;
            }
            section.emit(writer)?;
            started = true;
        }

        for item in &self.body {
            if started {
                separate(writer, 2)?;
            }
            item.emit(writer)?;
            started = true;
        }

        if !writer.is_at_line_start() {
            writer.line_feed()?;
        }
        Ok(())
    }
}

impl fmt::Display for PythonModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(FmtSink::new(f)).map_err(|_| fmt::Error)
    }
}

impl GeneratedFile for PythonModule {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> eyre::Result<String> {
        let mut out = String::new();
        self.render_to(&mut out)?;
        Ok(out)
    }
}
