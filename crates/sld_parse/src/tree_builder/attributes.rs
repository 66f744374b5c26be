//! Attribute list parsing.

use super::{BuildPass, fail};
use crate::ast::{Property, ValuePart};
use crate::shared::{Quote, Span, Token, TokenKind, TreeBuilderError};

impl BuildPass<'_> {
    /// Parse properties up to, but not including, the `/` or `>` that ends the
    /// opening tag.
    pub(super) fn attributes(&mut self) -> Result<Vec<Property>, TreeBuilderError> {
        let mut props = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                // Let the caller report the truncated tag.
                return Ok(props);
            };
            match &token.kind {
                TokenKind::Slash | TokenKind::CloseAngle => return Ok(props),
                TokenKind::Spread => {
                    self.pos += 1;
                    props.push(self.spread(token)?);
                }
                TokenKind::Identifier(name) => {
                    self.pos += 1;
                    props.push(self.named(name, token.span)?);
                }
                other => {
                    return Err(fail(TreeBuilderError::InvalidAttribute {
                        found: other.name(),
                        offset: token.span.start,
                    }));
                }
            }
        }
    }

    fn spread(&mut self, spread: &Token) -> Result<Property, TreeBuilderError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Expression(hole),
                span,
            }) => {
                self.pos += 1;
                Ok(Property::Spread {
                    hole: *hole,
                    span: spread.span.cover(*span),
                })
            }
            _ => Err(fail(TreeBuilderError::SpreadWithoutExpression {
                offset: spread.span.start,
            })),
        }
    }

    fn named(&mut self, name: &str, name_span: Span) -> Result<Property, TreeBuilderError> {
        if !self.peek().is_some_and(|t| t.kind == TokenKind::Equals) {
            return Ok(Property::Boolean {
                name: name.to_string(),
                name_span,
            });
        }
        self.pos += 1;
        let value = self.expect_token()?;
        match &value.kind {
            TokenKind::Expression(hole) => Ok(Property::Expression {
                name: name.to_string(),
                name_span,
                hole: *hole,
                quote: None,
                span: name_span.cover(value.span),
            }),
            TokenKind::QuoteChar(quote) => self.quoted(name, name_span, *quote),
            // Unquoted literal values are not supported; only a bare hole is.
            other => Err(fail(TreeBuilderError::InvalidAttribute {
                found: other.name(),
                offset: value.span.start,
            })),
        }
    }

    /// Collect the parts of a quoted value and classify them.
    fn quoted(
        &mut self,
        name: &str,
        name_span: Span,
        quote: Quote,
    ) -> Result<Property, TreeBuilderError> {
        let mut parts = Vec::new();
        let close = loop {
            let token = self.expect_token()?;
            match &token.kind {
                TokenKind::QuoteChar(_) => break token.span,
                TokenKind::AttributeValueText(text) => {
                    if !text.is_empty() {
                        parts.push(ValuePart::Literal(text.clone()));
                    }
                }
                TokenKind::Expression(hole) => parts.push(ValuePart::Hole(*hole)),
                other => {
                    return Err(fail(TreeBuilderError::InvalidAttribute {
                        found: other.name(),
                        offset: token.span.start,
                    }));
                }
            }
        };
        let name = name.to_string();
        let span = name_span.cover(close);
        if parts.len() > 1 {
            return Ok(Property::Mixed {
                name,
                name_span,
                parts,
                quote,
                span,
            });
        }
        Ok(match parts.pop() {
            None => Property::Static {
                name,
                name_span,
                value: String::new(),
                quote,
                span,
            },
            Some(ValuePart::Literal(value)) => Property::Static {
                name,
                name_span,
                value,
                quote,
                span,
            },
            Some(ValuePart::Hole(hole)) => Property::Expression {
                name,
                name_span,
                hole,
                quote: Some(quote),
                span,
            },
        })
    }
}
