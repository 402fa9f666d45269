//! Language-agnostic source emission engine.
//!
//! This crate provides the pieces language bindings (e.g.,
//! `pyper-codegen-python`) compose to emit block-structured source text.
//!
//! # Module Organization
//!
//! - [`writer`] - The indentation-aware [`SourceWriter`] and its scoped
//!   [`IndentedBlock`] guard
//! - [`element`] - The [`CodeElement`] protocol and generic elements
//!   ([`Text`], [`Line`], [`BlankLine`], [`Sequence`])
//! - [`block`] - The header/body/footer pattern shared by every block construct
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use pyper_codegen::{Line, SourceWriter};
//! use pyper_core::{Indent, LineEnding, WriterConfig};
//!
//! let mut out = String::new();
//! let config = WriterConfig::new(Indent::FOUR_SPACES, LineEnding::Lf);
//! let mut writer = SourceWriter::with_config(&mut out, config);
//! writer.write_line("while True:")?;
//! writer.emit_indented(&Line::new("break"))?;
//! drop(writer);
//!
//! assert_eq!(out, "while True:\n    break\n");
//! # Ok::<(), pyper_core::Error>(())
//! ```

pub mod block;
pub mod element;
pub mod writer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use block::{Block, emit_block, emit_body};
pub use element::{BlankLine, CodeElement, Line, Sequence, Text};
pub use pyper_core::{Error, Result};
pub use writer::{IndentedBlock, SourceWriter};
