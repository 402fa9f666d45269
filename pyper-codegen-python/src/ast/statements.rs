//! Simple Python statements.

use pyper_codegen::{CodeElement, SourceWriter};
use pyper_core::Result;

/// The `pass` statement, used as the body of otherwise empty blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pass;

impl CodeElement for Pass {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        writer.write_line("pass")?;
        Ok(())
    }
}

/// `target = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    target: String,
    value: String,
}

impl Assign {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }
}

impl CodeElement for Assign {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        write!(writer, "{} = {}", self.target, self.value)?;
        writer.line_feed()?;
        Ok(())
    }
}

/// `return` with an optional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Return(Option<String>);

impl Return {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }
}

impl CodeElement for Return {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        match &self.0 {
            Some(value) => write!(writer, "return {}", value)?,
            None => writer.write("return")?,
        };
        writer.line_feed()?;
        Ok(())
    }
}

/// A `#` comment; every line of the text gets its own marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl CodeElement for Comment {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        for line in self.0.lines() {
            if line.is_empty() {
                writer.write("#")?;
            } else {
                write!(writer, "# {}", line)?;
            }
            writer.line_feed()?;
        }
        Ok(())
    }
}

/// A triple-quoted docstring.
///
/// Single-line text stays on one line; longer text opens and closes the
/// quotes on their own lines. Embedded `\"\"\"` is escaped so the text
/// cannot close the string early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Docstring(String);

impl Docstring {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl CodeElement for Docstring {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        let mut text = self.0.trim().replace(r#"""""#, r#"\"\"\""#);
        if !text.contains('\n') {
            // A trailing quote would merge with the closing delimiter.
            if text.ends_with('"') && !text.ends_with(r#"\""#) {
                text.insert(text.len() - 1, '\\');
            }
            write!(writer, "\"\"\"{}\"\"\"", text)?;
            writer.line_feed()?;
            return Ok(());
        }

        writer.write_line("\"\"\"")?;
        for line in text.lines() {
            // Blank lines stay empty; `write` skips indentation for "".
            writer.write(line.trim_end())?.line_feed()?;
        }
        writer.write_line("\"\"\"")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pyper_codegen::testing::emit_to_string;

    use super::*;

    #[test]
    fn test_pass() {
        assert_eq!(emit_to_string(&Pass), "pass\n");
    }

    #[test]
    fn test_assign() {
        assert_eq!(emit_to_string(&Assign::new("radius", "1.0")), "radius = 1.0\n");
    }

    #[test]
    fn test_return() {
        assert_eq!(emit_to_string(&Return::new()), "return\n");
        assert_eq!(emit_to_string(&Return::value("a + b")), "return a + b\n");
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(
            emit_to_string(&Comment::new("Generated by pyper\n\nDo not edit.")),
            "# Generated by pyper\n#\n# Do not edit.\n"
        );
    }

    #[test]
    fn test_docstring_single_line() {
        assert_eq!(
            emit_to_string(&Docstring::new("Compute the area.")),
            "\"\"\"Compute the area.\"\"\"\n"
        );
    }

    #[test]
    fn test_docstring_escapes_triple_quotes() {
        assert_eq!(
            emit_to_string(&Docstring::new("say \"\"\"hi\"\"\"")),
            "\"\"\"say \\\"\\\"\\\"hi\\\"\\\"\\\"\"\"\"\n"
        );
        assert_eq!(
            emit_to_string(&Docstring::new("Say \"hi\"")),
            "\"\"\"Say \"hi\\\"\"\"\"\n"
        );
        assert_eq!(
            emit_to_string(&Docstring::new("a \"\"\" b\nc")),
            "\"\"\"\na \\\"\\\"\\\" b\nc\n\"\"\"\n"
        );
    }

    #[test]
    fn test_docstring_multi_line_indented() {
        let mut out = String::new();
        let mut writer = SourceWriter::with_unit(&mut out, "    ", "\n");
        writer
            .emit_indented(&Docstring::new("Summary.\n\nDetails."))
            .unwrap();
        drop(writer);
        assert_eq!(
            out,
            "    \"\"\"\n    Summary.\n\n    Details.\n    \"\"\"\n"
        );
    }
}
