//! Test utilities for language bindings.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;
use pyper_core::{Indent, LineEnding, WriterConfig};

use crate::{CodeElement, SourceWriter};

/// Four spaces, `\n`: the configuration expected output is written against.
pub const TEST_CONFIG: WriterConfig = WriterConfig {
    indent: Indent::FOUR_SPACES,
    line_ending: LineEnding::Lf,
};

/// Emit `element` into a fresh writer using [`TEST_CONFIG`].
pub fn emit_to_string<E: CodeElement + ?Sized>(element: &E) -> String {
    emit_with_config(element, TEST_CONFIG)
}

/// Emit `element` into a fresh writer using `config`.
pub fn emit_with_config<E: CodeElement + ?Sized>(element: &E, config: WriterConfig) -> String {
    let mut out = String::new();
    let mut writer = SourceWriter::with_config(&mut out, config);
    if let Err(e) = writer.emit_element(element) {
        panic!("emission into a String failed: {}", e);
    }
    drop(writer);
    out
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.split('\n').collect();
        let actual_lines: Vec<&str> = actual.split('\n').collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate files into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}
