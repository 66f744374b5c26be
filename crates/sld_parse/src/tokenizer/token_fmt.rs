//! Deterministic one-line token formatting for golden tests and debugging.

use crate::fmt::escape_text;
use crate::shared::{Quote, Token, TokenKind};

/// Format a token as `KIND [payload] @start..end`.
pub fn format_token(token: &Token) -> String {
    let span = token.span;
    let head = match &token.kind {
        TokenKind::OpenAngle => "OPEN_ANGLE".to_string(),
        TokenKind::CloseAngle => "CLOSE_ANGLE".to_string(),
        TokenKind::Slash => "SLASH".to_string(),
        TokenKind::Equals => "EQUALS".to_string(),
        TokenKind::Spread => "SPREAD".to_string(),
        TokenKind::Identifier(name) => format!("IDENT \"{}\"", escape_text(name)),
        TokenKind::AttributeValueText(text) => format!("ATTR_TEXT \"{}\"", escape_text(text)),
        TokenKind::Text(text) => format!("TEXT \"{}\"", escape_text(text)),
        TokenKind::Expression(hole) => format!("EXPR #{hole}"),
        TokenKind::QuoteChar(Quote::Double) => "QUOTE double".to_string(),
        TokenKind::QuoteChar(Quote::Single) => "QUOTE single".to_string(),
    };
    format!("{head} @{}..{}", span.start, span.end)
}
