//! Template tree builder.
//!
//! Consumes the tokenizer's flat stream left to right with no backtracking and
//! assembles the [`Root`]. A stack of open containers, seeded with the root,
//! tracks nesting; any malformed input aborts the pass.

use crate::ast::{Element, ElementKind, Expression, Node, Root, Text};
use crate::shared::{Span, TagSet, Token, TokenKind, TreeBuilderError};

mod attributes;
mod stack;
mod tree_fmt;

use stack::OpenElementsStack;
pub use tree_fmt::format_tree;

#[derive(Clone, Debug)]
pub struct TreeBuilderConfig {
    /// Tags that never keep children; content before their close tag is
    /// parsed and then discarded.
    pub void_elements: TagSet,
}

impl Default for TreeBuilderConfig {
    fn default() -> Self {
        Self {
            void_elements: TagSet::void_elements(),
        }
    }
}

/// Build a tree from `tokens`, treating `void_elements` as childless.
pub fn parse(tokens: &[Token], void_elements: &TagSet) -> Result<Root, TreeBuilderError> {
    BuildPass::new(tokens, void_elements).run()
}

#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    config: TreeBuilderConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeBuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeBuilderConfig {
        &self.config
    }

    pub fn build(&self, tokens: &[Token]) -> Result<Root, TreeBuilderError> {
        parse(tokens, &self.config.void_elements)
    }
}

/// One pass over a token slice.
struct BuildPass<'a> {
    tokens: &'a [Token],
    pos: usize,
    stack: OpenElementsStack,
    void_elements: &'a TagSet,
}

impl<'a> BuildPass<'a> {
    fn new(tokens: &'a [Token], void_elements: &'a TagSet) -> Self {
        Self {
            tokens,
            pos: 0,
            stack: OpenElementsStack::new(),
            void_elements,
        }
    }

    fn run(mut self) -> Result<Root, TreeBuilderError> {
        while let Some(token) = self.bump() {
            match &token.kind {
                TokenKind::Text(value) => self.text(value, token.span),
                TokenKind::Expression(hole) => self.stack.append(Node::Expression(Expression {
                    hole: *hole,
                    span: token.span,
                })),
                TokenKind::OpenAngle => self.tag(token)?,
                other => {
                    return Err(fail(TreeBuilderError::UnexpectedToken {
                        found: other.name(),
                        offset: token.span.start,
                    }));
                }
            }
        }
        self.stack.finish().map_err(fail)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Next token, or `UnexpectedEndOfInput` when the stream ran out mid-tag.
    fn expect_token(&mut self) -> Result<&'a Token, TreeBuilderError> {
        match self.bump() {
            Some(token) => Ok(token),
            None => {
                let offset = self.tokens.last().map_or(0, |token| token.span.end);
                Err(fail(TreeBuilderError::UnexpectedEndOfInput { offset }))
            }
        }
    }

    fn expect_close_angle(&mut self) -> Result<Span, TreeBuilderError> {
        let token = self.expect_token()?;
        match &token.kind {
            TokenKind::CloseAngle => Ok(token.span),
            other => Err(fail(TreeBuilderError::UnexpectedToken {
                found: other.name(),
                offset: token.span.start,
            })),
        }
    }

    /// Whitespace-only text is dropped when it directly follows a `>` or
    /// directly precedes a `<`; otherwise it is kept verbatim.
    fn text(&mut self, value: &str, span: Span) {
        if value.trim().is_empty() {
            let index = self.pos - 1;
            let prev = index.checked_sub(1).and_then(|i| self.tokens.get(i));
            let next = self.tokens.get(index + 1);
            if prev.is_some_and(|t| t.kind == TokenKind::CloseAngle)
                || next.is_some_and(|t| t.kind == TokenKind::OpenAngle)
            {
                return;
            }
        }
        self.stack.append(Node::Text(Text {
            value: value.to_string(),
            span,
        }));
    }

    fn tag(&mut self, open: &'a Token) -> Result<(), TreeBuilderError> {
        let next = self.expect_token()?;
        match &next.kind {
            TokenKind::Slash => self.closing_tag(open),
            TokenKind::Identifier(name) => self.opening_tag(open, name, next.span),
            other => Err(fail(TreeBuilderError::ExpectedIdentifier {
                found: other.name(),
                offset: next.span.start,
            })),
        }
    }

    fn closing_tag(&mut self, open: &Token) -> Result<(), TreeBuilderError> {
        let name_token = self.expect_token()?;
        let found = match &name_token.kind {
            TokenKind::Identifier(name) => Some(name.as_str()),
            _ => None,
        };
        let expected = self.stack.current_name();
        if found.is_none() || found != expected {
            return Err(fail(TreeBuilderError::MismatchedClosingTag {
                expected: expected.map(str::to_string),
                found: found.map(str::to_string),
                offset: open.span.start,
            }));
        }
        let close = self.expect_close_angle()?;
        self.stack.pop(open.span.cover(close), self.void_elements);
        Ok(())
    }

    fn opening_tag(
        &mut self,
        open: &Token,
        name: &str,
        name_span: Span,
    ) -> Result<(), TreeBuilderError> {
        let props = self.attributes()?;
        let mut element = Element {
            kind: ElementKind::for_tag_name(name),
            name: name.to_string(),
            name_span,
            props,
            children: Vec::new(),
            open: open.span,
            close: name_span,
            self_closing: None,
            end_tag: None,
        };
        // `attributes` stops only before `/` or `>`.
        let end = self.expect_token()?;
        if end.kind == TokenKind::Slash {
            element.self_closing = Some(end.span);
            element.close = self.expect_close_angle()?;
            self.stack.append(Node::Element(element));
        } else {
            element.close = end.span;
            self.stack.push(element);
        }
        Ok(())
    }
}

fn fail(err: TreeBuilderError) -> TreeBuilderError {
    log::debug!(target: "sld.tree_builder", "{err}");
    err
}

#[cfg(test)]
mod tests;
