//! Python code elements for pyper.
//!
//! Builders for the Python constructs pyper emits ([`Class`], [`Function`],
//! [`If`] chains, [`Decorator`]s, [`Parameters`], imports and simple
//! statements), the four-space [`PythonWriter`], the whole-file
//! [`PythonModule`] and a [`Generator`] that turns a parsed `pyper.toml` into
//! a module.
//!
//! Every builder implements [`CodeElement`](pyper_codegen::CodeElement) and
//! can be emitted into any [`SourceWriter`](pyper_codegen::SourceWriter).
//! The block builders also implement `Display`, rendering with four spaces
//! and `\n`:
//!
//! ```
//! use pyper_codegen_python::Class;
//!
//! let class = Class::new("Foo").parent("Bar").parent("Baz");
//! assert_eq!(class.to_string(), "class Foo(Bar, Baz):\n    pass\n");
//! ```

use std::fmt;

use pyper_codegen::CodeElement;
use pyper_core::{FmtSink, Indent, LineEnding, WriterConfig};

mod generator;
mod module;
mod writer;

pub mod ast;

pub use ast::{
    Alternative, Assign, Class, Comment, Decorator, Docstring, Elif, Else, Function, If, Imports,
    Parameters, Pass, Return,
};
pub use generator::{Generator, PreviewFile};
pub use module::PythonModule;
pub use writer::PythonWriter;

/// Style used by the `Display` impls of individual elements.
const DISPLAY_CONFIG: WriterConfig = WriterConfig {
    indent: Indent::FOUR_SPACES,
    line_ending: LineEnding::Lf,
};

/// Render `element` into a formatter.
pub(crate) fn fmt_element(element: &dyn CodeElement, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut writer = PythonWriter::with_config(FmtSink::new(f), DISPLAY_CONFIG);
    writer.emit_element(element).map_err(|_| fmt::Error)?;
    Ok(())
}
