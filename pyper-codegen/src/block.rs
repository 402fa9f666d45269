//! The header/body/footer pattern for block-structured constructs.
//!
//! Every block construct (a class, a function, a conditional branch) is
//! emitted the same way:
//!
//! 1. the header line(s), terminated by the header itself;
//! 2. the children, one level deeper, with a placeholder substituted when
//!    they write nothing, followed by a line feed only if the last child
//!    left the line open;
//! 3. the footer (e.g., a chained `else`) back at the original depth.
//!
//! Constructs implement [`Block`] and delegate their
//! [`CodeElement::emit`] to [`emit_block`]; they differ only in header and
//! footer.

use pyper_core::Result;

use crate::{CodeElement, SourceWriter};

/// A construct with a header, an indented body and an optional footer.
pub trait Block {
    /// Write the header, including its terminating line feed.
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()>;

    /// Body elements in emission order.
    fn children(&self) -> &[Box<dyn CodeElement>];

    /// Emitted in place of an empty body.
    fn placeholder(&self) -> &dyn CodeElement;

    /// Write whatever follows the body at the block's own depth.
    fn emit_footer(&self, _writer: &mut SourceWriter<'_>) -> Result<()> {
        Ok(())
    }
}

/// Emit `block` as header, body, footer.
pub fn emit_block<B>(block: &B, writer: &mut SourceWriter<'_>) -> Result<()>
where
    B: Block + ?Sized,
{
    block.emit_header(writer)?;
    emit_body(block.children(), block.placeholder(), writer)?;
    block.emit_footer(writer)
}

/// Emit `children` one level deeper than the current depth.
///
/// The body is never empty: when the children write nothing (there are
/// none, or each one is an empty `Text`, `Sequence` or `None`),
/// `placeholder` is emitted once. Afterwards the line is closed unless the
/// writer already sits at the start of a line.
pub fn emit_body(
    children: &[Box<dyn CodeElement>],
    placeholder: &dyn CodeElement,
    writer: &mut SourceWriter<'_>,
) -> Result<()> {
    {
        let mut body = writer.indented_block();
        let before = body.bytes_written();
        for child in children {
            child.emit(&mut body)?;
        }
        if body.bytes_written() == before {
            placeholder.emit(&mut body)?;
        }
    }
    if !writer.is_at_line_start() {
        writer.line_feed()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Sequence, Text, testing::emit_to_string};

    /// `loop:` block with an optional `then:` footer block.
    struct Loop {
        body: Vec<Box<dyn CodeElement>>,
        then: Option<Box<Loop>>,
    }

    impl Loop {
        fn new() -> Self {
            Self {
                body: Vec::new(),
                then: None,
            }
        }

        fn child(mut self, element: impl CodeElement + 'static) -> Self {
            self.body.push(Box::new(element));
            self
        }

        fn then(mut self, next: Loop) -> Self {
            self.then = Some(Box::new(next));
            self
        }
    }

    impl Block for Loop {
        fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
            writer.write_line("loop:")?;
            Ok(())
        }

        fn children(&self) -> &[Box<dyn CodeElement>] {
            &self.body
        }

        fn placeholder(&self) -> &dyn CodeElement {
            &"noop"
        }

        fn emit_footer(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
            writer.emit_element(&self.then)?;
            Ok(())
        }
    }

    impl CodeElement for Loop {
        fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
            emit_block(self, writer)
        }
    }

    #[test]
    fn test_empty_body_gets_one_placeholder_line() {
        assert_eq!(emit_to_string(&Loop::new()), "loop:\n    noop\n");
    }

    #[test]
    fn test_silent_children_get_one_placeholder_line() {
        let silent = [
            Loop::new().child(Text::from_lines("")),
            Loop::new().child(Text::new("")),
            Loop::new().child(Sequence::new()),
            Loop::new().child(None::<Line>),
            Loop::new().child(None::<Line>).child(Sequence::new()),
        ];
        for block in &silent {
            assert_eq!(emit_to_string(block), "loop:\n    noop\n");
        }
    }

    #[test]
    fn test_placeholder_skipped_when_any_child_writes() {
        let block = Loop::new().child(Sequence::new()).child(Line::new("x"));
        assert_eq!(emit_to_string(&block), "loop:\n    x\n");
    }

    #[test]
    fn test_silent_child_in_nested_block() {
        let block = Loop::new()
            .child(Loop::new().child(Sequence::new()))
            .then(Loop::new().child(None::<Line>));
        assert_eq!(
            emit_to_string(&block),
            "loop:\n    loop:\n        noop\nloop:\n    noop\n"
        );
    }

    #[test]
    fn test_no_duplicate_line_feed_after_terminated_child() {
        let open = Loop::new().child(Text::new("x"));
        let closed = Loop::new().child(Line::new("x"));
        assert_eq!(emit_to_string(&open), "loop:\n    x\n");
        assert_eq!(emit_to_string(&closed), "loop:\n    x\n");
    }

    #[test]
    fn test_children_in_insertion_order() {
        let block = Loop::new()
            .child(Line::new("a"))
            .child(Line::new("b"))
            .child(Text::new("c"));
        assert_eq!(emit_to_string(&block), "loop:\n    a\n    b\n    c\n");
    }

    #[test]
    fn test_nested_blocks() {
        let block = Loop::new().child(Loop::new().child(Line::new("inner")));
        assert_eq!(emit_to_string(&block), "loop:\n    loop:\n        inner\n");
    }

    #[test]
    fn test_footer_at_original_depth() {
        let block = Loop::new()
            .child(Loop::new().then(Loop::new()))
            .then(Loop::new().child(Line::new("z")));
        assert_eq!(
            emit_to_string(&block),
            "loop:\n    loop:\n        noop\n    loop:\n        noop\nloop:\n    z\n"
        );
    }

    #[test]
    fn test_depth_restored_after_block() {
        let mut out = String::new();
        let mut writer = SourceWriter::with_unit(&mut out, "    ", "\n");
        writer.indent(2);
        Loop::new().emit(&mut writer).unwrap();
        assert_eq!(writer.depth(), 2);
        assert!(writer.is_at_line_start());
    }
}
