//! `if` / `elif` / `else` chains.
//!
//! Each branch is its own block. A branch's successor is emitted as its
//! footer, so the next keyword lands back at the depth of the `if`.

use std::fmt;

use pyper_codegen::{Block, CodeElement, SourceWriter, emit_block};
use pyper_core::Result;

use super::Pass;

/// What follows an `if` or `elif` branch.
pub enum Alternative {
    Elif(Box<Elif>),
    Else(Else),
}

impl CodeElement for Alternative {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        match self {
            Self::Elif(elif) => elif.emit(writer),
            Self::Else(otherwise) => otherwise.emit(writer),
        }
    }
}

/// Attach `alternative` at the end of the chain starting at `slot`.
///
/// An existing `else` always stays last: a later `elif` is inserted in front
/// of it, a later `else` replaces it.
fn append_alternative(slot: &mut Option<Alternative>, alternative: Alternative) {
    if let Some(Alternative::Elif(elif)) = slot {
        return append_alternative(&mut elif.alternative, alternative);
    }
    match alternative {
        Alternative::Elif(mut elif) if slot.is_some() => {
            elif.alternative = slot.take();
            *slot = Some(Alternative::Elif(elif));
        }
        alternative => *slot = Some(alternative),
    }
}

/// `keyword condition:` followed by a line feed.
fn emit_branch_header(
    keyword: &str,
    condition: &dyn CodeElement,
    writer: &mut SourceWriter<'_>,
) -> Result<()> {
    writer.write(keyword)?.write(" ")?;
    condition.emit(writer)?;
    writer.write(":")?.line_feed()?;
    Ok(())
}

/// An `if` block and its chain of alternatives.
///
/// # Example
///
/// ```
/// use pyper_codegen::Text;
/// use pyper_codegen_python::{Else, If};
///
/// let stmt = If::new("X").child(Text::new("Y")).else_(Else::new().child(Text::new("Z")));
/// assert_eq!(stmt.to_string(), "if X:\n    Y\nelse:\n    Z\n");
/// ```
pub struct If {
    condition: Box<dyn CodeElement>,
    body: Vec<Box<dyn CodeElement>>,
    alternative: Option<Alternative>,
}

impl If {
    pub fn new(condition: impl CodeElement + 'static) -> Self {
        Self {
            condition: Box::new(condition),
            body: Vec::new(),
            alternative: None,
        }
    }

    pub fn child(mut self, element: impl CodeElement + 'static) -> Self {
        self.body.push(Box::new(element));
        self
    }

    pub fn elif(mut self, elif: Elif) -> Self {
        append_alternative(&mut self.alternative, Alternative::Elif(Box::new(elif)));
        self
    }

    pub fn else_(mut self, otherwise: Else) -> Self {
        append_alternative(&mut self.alternative, Alternative::Else(otherwise));
        self
    }
}

impl fmt::Display for If {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_element(self, f)
    }
}

impl Block for If {
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_branch_header("if", &*self.condition, writer)
    }

    fn children(&self) -> &[Box<dyn CodeElement>] {
        &self.body
    }

    fn placeholder(&self) -> &dyn CodeElement {
        &Pass
    }

    fn emit_footer(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        self.alternative.emit(writer)
    }
}

impl CodeElement for If {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_block(self, writer)
    }
}

/// An `elif` branch. Only emitted as part of an [`If`] chain.
pub struct Elif {
    condition: Box<dyn CodeElement>,
    body: Vec<Box<dyn CodeElement>>,
    alternative: Option<Alternative>,
}

impl Elif {
    pub fn new(condition: impl CodeElement + 'static) -> Self {
        Self {
            condition: Box::new(condition),
            body: Vec::new(),
            alternative: None,
        }
    }

    pub fn child(mut self, element: impl CodeElement + 'static) -> Self {
        self.body.push(Box::new(element));
        self
    }

    pub fn elif(mut self, elif: Elif) -> Self {
        append_alternative(&mut self.alternative, Alternative::Elif(Box::new(elif)));
        self
    }

    pub fn else_(mut self, otherwise: Else) -> Self {
        append_alternative(&mut self.alternative, Alternative::Else(otherwise));
        self
    }
}

impl Block for Elif {
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_branch_header("elif", &*self.condition, writer)
    }

    fn children(&self) -> &[Box<dyn CodeElement>] {
        &self.body
    }

    fn placeholder(&self) -> &dyn CodeElement {
        &Pass
    }

    fn emit_footer(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        self.alternative.emit(writer)
    }
}

impl CodeElement for Elif {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_block(self, writer)
    }
}

/// The closing `else` branch.
#[derive(Default)]
pub struct Else {
    body: Vec<Box<dyn CodeElement>>,
}

impl Else {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, element: impl CodeElement + 'static) -> Self {
        self.body.push(Box::new(element));
        self
    }
}

impl Block for Else {
    fn emit_header(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        writer.write_line("else:")?;
        Ok(())
    }

    fn children(&self) -> &[Box<dyn CodeElement>] {
        &self.body
    }

    fn placeholder(&self) -> &dyn CodeElement {
        &Pass
    }
}

impl CodeElement for Else {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        emit_block(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use pyper_codegen::{Line, Text, testing::emit_to_string};

    use super::*;
    use crate::ast::Return;

    #[test]
    fn test_if_else() {
        let stmt = If::new("X")
            .child(Text::new("Y"))
            .else_(Else::new().child(Text::new("Z")));
        assert_eq!(emit_to_string(&stmt), "if X:\n    Y\nelse:\n    Z\n");
    }

    #[test]
    fn test_if_elif_else() {
        let stmt = If::new("x > 0")
            .child(Return::value("1"))
            .elif(Elif::new("x < 0").child(Return::value("-1")))
            .else_(Else::new().child(Return::value("0")));
        assert_eq!(
            emit_to_string(&stmt),
            "if x > 0:\n    return 1\nelif x < 0:\n    return -1\nelse:\n    return 0\n"
        );
    }

    #[test]
    fn test_empty_branches_get_pass() {
        let stmt = If::new("ready").else_(Else::new());
        assert_eq!(emit_to_string(&stmt), "if ready:\n    pass\nelse:\n    pass\n");
    }

    #[test]
    fn test_elif_added_after_else_stays_before_it() {
        let stmt = If::new("a")
            .child(Line::new("f()"))
            .else_(Else::new().child(Line::new("h()")))
            .elif(Elif::new("b").child(Line::new("g()")));
        assert_eq!(
            emit_to_string(&stmt),
            "if a:\n    f()\nelif b:\n    g()\nelse:\n    h()\n"
        );
    }

    #[test]
    fn test_chained_elifs_keep_order() {
        let stmt = If::new("a")
            .elif(Elif::new("b"))
            .elif(Elif::new("c"));
        assert_eq!(
            emit_to_string(&stmt),
            "if a:\n    pass\nelif b:\n    pass\nelif c:\n    pass\n"
        );
    }

    #[test]
    fn test_nested_if_alternative_at_inner_depth() {
        let stmt = If::new("outer").child(
            If::new("inner")
                .child(Line::new("x()"))
                .else_(Else::new().child(Line::new("y()"))),
        );
        assert_eq!(
            emit_to_string(&stmt),
            "if outer:\n    if inner:\n        x()\n    else:\n        y()\n"
        );
    }

    #[test]
    fn test_condition_element_is_inline() {
        let stmt = If::new(Text::new("a and b")).child(Line::new("go()"));
        assert_eq!(stmt.to_string(), "if a and b:\n    go()\n");
    }
}
