//! Core types for the pyper source emission engine.
//!
//! This crate provides the pieces every other pyper crate builds on:
//! the output [`Sink`] abstraction, indentation and line ending
//! configuration, the emission error type and generated-file persistence.

mod error;
mod file;
mod sink;
mod style;

pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Output destinations
pub use sink::{FmtSink, IoSink, Sink};
// Writer configuration
pub use style::{Indent, LineEnding, WriterConfig};
