//! Token emission helpers.

use crate::shared::{Span, Token, TokenKind};
use crate::tokenizer::ChunkLexer;

impl ChunkLexer<'_> {
    /// Emit a token spanning `start..end`, both relative to the current chunk.
    pub(super) fn emit(&mut self, kind: TokenKind, start: usize, end: usize) {
        let base = self.state.offset;
        let token = Token::new(kind, Span::new(base + start, base + end));
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "sld.tokenizer", "emit token: {token:?}");
        self.state.after_slash = matches!(token.kind, TokenKind::Slash);
        self.tokens.push(token);
    }

    pub(super) fn emit_text(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        let text = self.chunk[start..end].to_string();
        self.emit(TokenKind::Text(text), start, end);
    }

    pub(super) fn emit_attribute_text(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        let text = self.chunk[start..end].to_string();
        self.emit(TokenKind::AttributeValueText(text), start, end);
    }
}
