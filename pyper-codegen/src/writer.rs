//! Indentation-aware writer over an output [`Sink`].

use std::{
    borrow::Cow,
    fmt,
    ops::{Deref, DerefMut},
};

use pyper_core::{Result, Sink, WriterConfig};

use crate::CodeElement;

/// Writes text into a [`Sink`], prefixing every new line with the current
/// indentation.
///
/// The writer tracks two pieces of state: the indentation depth and whether
/// the cursor sits at the start of a line. Indentation is emitted lazily on
/// the first non-empty write of each line, so blank lines never carry
/// trailing whitespace.
///
/// Depth is a `usize` and [`dedent`](Self::dedent) saturates, so it can never
/// go negative. None of the writer's operations fail on malformed
/// indentation; errors only come from the sink and are returned unmodified.
///
/// # Example
///
/// ```
/// use pyper_codegen::SourceWriter;
///
/// let mut out = String::new();
/// let mut writer = SourceWriter::with_unit(&mut out, "  ", "\n");
/// writer.write_line("def f():")?;
/// {
///     let mut body = writer.indented_block();
///     write!(body, "return {}", 1 + 1)?;
///     body.line_feed()?;
/// }
/// assert_eq!(writer.depth(), 0);
/// drop(writer);
///
/// assert_eq!(out, "def f():\n  return 2\n");
/// # Ok::<(), pyper_core::Error>(())
/// ```
pub struct SourceWriter<'w> {
    sink: Box<dyn Sink + 'w>,
    unit: Cow<'static, str>,
    line_terminator: Cow<'static, str>,
    depth: usize,
    at_line_start: bool,
    written: usize,
    elements: Vec<Box<dyn CodeElement + 'w>>,
}

impl<'w> SourceWriter<'w> {
    /// Create a writer with the default configuration (four spaces, the
    /// platform's line terminator).
    pub fn new(sink: impl Sink + 'w) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    pub fn with_config(sink: impl Sink + 'w, config: WriterConfig) -> Self {
        Self::with_unit(sink, config.indent.unit(), config.line_ending.as_str())
    }

    /// Create a writer with a raw indentation unit and line terminator.
    pub fn with_unit(
        sink: impl Sink + 'w,
        unit: impl Into<Cow<'static, str>>,
        line_terminator: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            unit: unit.into(),
            line_terminator: line_terminator.into(),
            depth: 0,
            at_line_start: true,
            written: 0,
            elements: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn line_terminator(&self) -> &str {
        &self.line_terminator
    }

    /// Whether the next write will be preceded by indentation.
    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Bytes of text and line terminators appended so far, not counting
    /// indentation. Never decreases.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    pub fn indent(&mut self, levels: usize) -> &mut Self {
        self.depth = self.depth.saturating_add(levels);
        self
    }

    /// Decrease the depth by `levels`, clamping at zero.
    pub fn dedent(&mut self, levels: usize) -> &mut Self {
        if levels > self.depth {
            tracing::trace!(depth = self.depth, levels, "dedent clamped at zero");
        }
        self.depth = self.depth.saturating_sub(levels);
        self
    }

    /// Increase the depth by one level until the returned guard is dropped.
    ///
    /// The guard dereferences to the writer, and restores the depth on every
    /// exit path, including early returns through `?` and unwinding.
    pub fn indented_block(&mut self) -> IndentedBlock<'_, 'w> {
        self.indent(1);
        IndentedBlock { writer: self }
    }

    /// Run `f` one level deeper, restoring the depth afterwards.
    pub fn indented<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut block = self.indented_block();
        f(&mut *block)
    }

    /// Append `text`, preceded by the indentation if the cursor is at the
    /// start of a line.
    ///
    /// Empty text is a no-op: it neither touches the sink nor consumes the
    /// pending indentation.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        if text.is_empty() {
            return Ok(self);
        }
        if self.at_line_start {
            for _ in 0..self.depth {
                self.sink.append(&self.unit)?;
            }
            self.at_line_start = false;
        }
        self.sink.append(text)?;
        self.written += text.len();
        Ok(self)
    }

    /// Formatted variant of [`write`](Self::write), which makes the writer
    /// usable with the `write!` macro.
    ///
    /// `writeln!` appends a literal `\n` rather than the configured
    /// terminator; use [`line_feed`](Self::line_feed) instead.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self> {
        match args.as_str() {
            Some(text) => self.write(text),
            None => self.write(&args.to_string()),
        }
    }

    pub fn write_line(&mut self, text: &str) -> Result<&mut Self> {
        self.write(text)?.line_feed()
    }

    /// Append the line terminator. Does not change the depth.
    pub fn line_feed(&mut self) -> Result<&mut Self> {
        self.sink.append(&self.line_terminator)?;
        self.written += self.line_terminator.len();
        self.at_line_start = true;
        Ok(self)
    }

    /// Emit `element` into this writer at the current depth.
    ///
    /// `Option<E>` is itself a [`CodeElement`] that emits nothing when
    /// `None`, so optional slots need no checks at the call site.
    pub fn emit_element<E>(&mut self, element: &E) -> Result<&mut Self>
    where
        E: CodeElement + ?Sized,
    {
        element.emit(self)?;
        Ok(self)
    }

    /// Emit `element` one level deeper than the current depth.
    pub fn emit_indented<E>(&mut self, element: &E) -> Result<&mut Self>
    where
        E: CodeElement + ?Sized,
    {
        self.indented(|writer| element.emit(writer))?;
        Ok(self)
    }

    /// Register a top-level element for [`emit`](Self::emit).
    pub fn add_element(&mut self, element: impl CodeElement + 'w) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Emit every registered element in insertion order.
    #[tracing::instrument(level = "debug", skip_all, fields(elements = self.elements.len()))]
    pub fn emit(&mut self) -> Result<()> {
        let elements = std::mem::take(&mut self.elements);
        let result = elements.iter().try_for_each(|element| element.emit(self));
        let added = std::mem::replace(&mut self.elements, elements);
        self.elements.extend(added);
        result
    }

    /// Return to depth zero at the start of a line, keeping the registered
    /// elements, so the writer can be reused for another full emission.
    pub fn reset(&mut self) -> &mut Self {
        self.depth = 0;
        self.at_line_start = true;
        self
    }
}

impl fmt::Debug for SourceWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceWriter")
            .field("unit", &self.unit)
            .field("line_terminator", &self.line_terminator)
            .field("depth", &self.depth)
            .field("at_line_start", &self.at_line_start)
            .field("written", &self.written)
            .field("elements", &self.elements.len())
            .finish_non_exhaustive()
    }
}

/// One extra level of indentation, released when dropped.
pub struct IndentedBlock<'a, 'w> {
    writer: &'a mut SourceWriter<'w>,
}

impl Drop for IndentedBlock<'_, '_> {
    fn drop(&mut self) {
        self.writer.dedent(1);
    }
}

impl<'w> Deref for IndentedBlock<'_, 'w> {
    type Target = SourceWriter<'w>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for IndentedBlock<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use pyper_core::{Error, Indent, LineEnding};

    use super::*;
    use crate::{Line, Text};

    fn lf_writer(out: &mut String) -> SourceWriter<'_> {
        SourceWriter::with_config(out, WriterConfig::new(Indent::FOUR_SPACES, LineEnding::Lf))
    }

    /// Accepts `remaining` appends, then fails.
    struct FailingSink {
        remaining: usize,
    }

    impl Sink for FailingSink {
        fn append(&mut self, _text: &str) -> Result<()> {
            if self.remaining == 0 {
                return Err(Error::Io(std::io::Error::other("sink closed")));
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_indents_at_line_start() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer.indent(2);
        writer.write("a").unwrap().write("b").unwrap();
        drop(writer);
        assert_eq!(out, "        ab");
    }

    #[test]
    fn test_write_empty_is_noop() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer.indent(1);
        writer.write("").unwrap();
        assert!(writer.is_at_line_start());
        assert_eq!(writer.depth(), 1);
        writer.write("x").unwrap();
        drop(writer);
        assert_eq!(out, "    x");
    }

    #[test]
    fn test_write_fmt_interpolates() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        write!(writer, "class {}({}):", "Foo", "object").unwrap();
        writer.line_feed().unwrap();
        write!(writer, "{}", "").unwrap();
        assert!(writer.is_at_line_start());
        drop(writer);
        assert_eq!(out, "class Foo(object):\n");
    }

    #[test]
    fn test_bytes_written_skips_indentation() {
        let mut out = String::new();
        let mut writer = SourceWriter::with_unit(&mut out, "    ", "\r\n");
        writer.indent(2).write("").unwrap();
        assert_eq!(writer.bytes_written(), 0);
        writer.write_line("abc").unwrap();
        assert_eq!(writer.bytes_written(), 5);
        writer.reset();
        assert_eq!(writer.bytes_written(), 5);
    }

    #[test]
    fn test_line_feed_keeps_depth() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer.indent(1).write_line("x").unwrap();
        assert_eq!(writer.depth(), 1);
        assert!(writer.is_at_line_start());
        writer.line_feed().unwrap().write_line("y").unwrap();
        drop(writer);
        assert_eq!(out, "    x\n\n    y\n");
    }

    #[test]
    fn test_dedent_clamps_at_zero() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        for (start, levels) in [(0, 1), (1, 3), (2, 2), (3, 100)] {
            writer.reset().indent(start).dedent(levels);
            assert_eq!(writer.depth(), start.saturating_sub(levels));
        }
        writer.dedent(usize::MAX);
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_balanced_indent_dedent_restores_depth() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer.indent(3);
        writer.indent(2).indent(1).dedent(1).indent(4).dedent(4).dedent(2);
        assert_eq!(writer.depth(), 3);
    }

    #[test]
    fn test_indented_block_restores_depth() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        {
            let mut outer = writer.indented_block();
            assert_eq!(outer.depth(), 1);
            {
                let inner = outer.indented_block();
                assert_eq!(inner.depth(), 2);
            }
            assert_eq!(outer.depth(), 1);
        }
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_indented_block_restores_depth_on_error() {
        // "ok" at depth 2 takes four appends: two units, the text, the terminator.
        let mut writer = SourceWriter::new(FailingSink { remaining: 4 });
        writer.indent(1);

        let result = writer.indented(|w| {
            w.write_line("ok")?;
            w.indented(|w| w.write_line("fails").map(|_| ()))
        });

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(writer.depth(), 1);
    }

    #[test]
    fn test_indented_block_restores_depth_on_panic() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _block = writer.indented_block();
            panic!("element blew up");
        }));

        assert!(result.is_err());
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_emit_indented_with_tab() {
        let mut out = String::new();
        let config = WriterConfig::default().with_indent(Indent::TAB);
        let mut writer = SourceWriter::with_config(&mut out, config);
        writer.emit_indented(&Text::new("hello")).unwrap();
        assert_eq!(writer.depth(), 0);
        drop(writer);
        assert_eq!(out, "\thello");
    }

    #[test]
    fn test_emit_element_skips_none() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        let absent: Option<Line> = None;
        writer.emit_element(&absent).unwrap();
        writer.emit_indented(&absent).unwrap();
        assert!(writer.is_at_line_start());
        writer.emit_element(&Some(Line::new("x"))).unwrap();
        drop(writer);
        assert_eq!(out, "x\n");
    }

    #[test]
    fn test_emit_registered_elements_in_order() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer
            .add_element(Line::new("import os"))
            .add_element(Line::new("import sys"));
        writer.emit().unwrap();
        drop(writer);
        assert_eq!(out, "import os\nimport sys\n");
    }

    #[test]
    fn test_emit_is_repeatable_after_reset() {
        let mut out = String::new();
        let mut writer = lf_writer(&mut out);
        writer.add_element(Line::new("x = 1"));
        writer.emit().unwrap();
        writer.indent(3).reset();
        writer.emit().unwrap();
        drop(writer);
        assert_eq!(out, "x = 1\nx = 1\n");
    }

    #[test]
    fn test_sink_error_propagates_from_emit() {
        let mut writer = SourceWriter::new(FailingSink { remaining: 0 });
        writer.add_element(Line::new("pass"));
        assert!(matches!(writer.emit(), Err(Error::Io(_))));
    }

    #[test]
    fn test_custom_unit_and_terminator() {
        let mut out = String::new();
        let mut writer = SourceWriter::with_unit(&mut out, "..", "\r\n");
        assert_eq!(writer.unit(), "..");
        assert_eq!(writer.line_terminator(), "\r\n");
        writer.write_line("a").unwrap();
        writer.indent(2).write_line("b").unwrap();
        drop(writer);
        assert_eq!(out, "a\r\n....b\r\n");
    }
}
