//! Template tokenizer.
//!
//! Turns literal chunks into a flat token stream. Holes sit between chunks and
//! become zero-width `Expression` tokens. The tokenizer is an explicit state
//! machine whose state is threaded from one chunk to the next, so tokenizing a
//! chunk is a pure `(chunk, state) -> (tokens, state)` step.
//!
//! Invariants:
//! - Offsets are byte offsets into the concatenation of all chunks and are
//!   monotonic non-decreasing across the stream.
//! - Tag syntax never spans a hole: a hole inside a tag is an `Expression`
//!   token, a hole inside a quoted value splits the value, and a hole inside a
//!   comment is dropped.

use crate::shared::{Quote, Span, TagSet, Token, TokenKind, TokenStream, TokenizeError};

mod emit;
mod scan;
mod states;
mod token_fmt;

pub use states::{LexMode, TokenizerState};
pub use token_fmt::format_token;

/// Configuration for the tokenizer.
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    /// Tags whose body is captured verbatim up to the matching close tag.
    pub raw_text_elements: TagSet,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            raw_text_elements: TagSet::raw_text_elements(),
        }
    }
}

/// Tokenize every chunk of a template.
///
/// `chunks` holds the N+1 literal pieces surrounding N holes.
pub fn tokenize<S: AsRef<str>>(
    chunks: &[S],
    raw_text_elements: &TagSet,
) -> Result<TokenStream, TokenizeError> {
    let mut tokenizer = TemplateTokenizer::new(TokenizerConfig {
        raw_text_elements: raw_text_elements.clone(),
    });
    for (index, chunk) in chunks.iter().enumerate() {
        if index > 0 {
            tokenizer.push_hole();
        }
        tokenizer.push_chunk(chunk.as_ref())?;
    }
    Ok(tokenizer.finish())
}

/// Tokenize one chunk starting from `state`.
///
/// Returns the chunk's tokens and the state to resume from at the next hole.
pub fn tokenize_chunk(
    chunk: &str,
    state: TokenizerState,
    raw_text_elements: &TagSet,
) -> Result<(Vec<Token>, TokenizerState), TokenizeError> {
    let mut lexer = ChunkLexer {
        chunk,
        bytes: chunk.as_bytes(),
        cursor: 0,
        state,
        raw_text_elements,
        tokens: Vec::new(),
    };
    lexer.run()?;
    let ChunkLexer {
        tokens, mut state, ..
    } = lexer;
    state.offset += chunk.len();
    Ok((tokens, state))
}

/// Cross the hole boundary that follows the last tokenized chunk.
///
/// Emits the hole's `Expression` token unless the boundary falls inside a
/// comment.
pub fn tokenize_hole(mut state: TokenizerState) -> (Option<Token>, TokenizerState) {
    let index = state.holes;
    state.holes += 1;
    if state.mode == LexMode::Comment {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "sld.tokenizer", "hole {index} dropped inside comment @{}", state.offset);
        return (None, state);
    }
    state.after_slash = false;
    let token = Token::new(
        TokenKind::Expression(index),
        Span::empty(state.offset),
    );
    #[cfg(any(test, feature = "debug-stats"))]
    log::trace!(target: "sld.tokenizer", "emit token: {token:?}");
    (Some(token), state)
}

/// Incremental driver that owns the state between `push_chunk` calls.
#[derive(Debug)]
pub struct TemplateTokenizer {
    config: TokenizerConfig,
    state: TokenizerState,
    tokens: Vec<Token>,
    /// A chunk was pushed since the last hole.
    chunk_pushed: bool,
}

impl TemplateTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            state: TokenizerState::new(),
            tokens: Vec::new(),
            chunk_pushed: false,
        }
    }

    /// Tokenize the next literal chunk.
    ///
    /// Consecutive chunks must be separated by `push_hole`.
    pub fn push_chunk(&mut self, chunk: &str) -> Result<(), TokenizeError> {
        if self.chunk_pushed {
            return Err(TokenizeError::MissingHole {
                offset: self.state.offset,
            });
        }
        let state = std::mem::take(&mut self.state);
        let (tokens, state) = tokenize_chunk(chunk, state, &self.config.raw_text_elements)?;
        self.tokens.extend(tokens);
        self.state = state;
        self.chunk_pushed = true;
        Ok(())
    }

    /// Record a hole boundary. A hole with no chunk pushed before it behaves as
    /// if an empty chunk preceded it.
    pub fn push_hole(&mut self) {
        let state = std::mem::take(&mut self.state);
        let (token, state) = tokenize_hole(state);
        self.tokens.extend(token);
        self.state = state;
        self.chunk_pushed = false;
    }

    pub fn state(&self) -> &TokenizerState {
        &self.state
    }

    /// Tokens produced so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn finish(self) -> TokenStream {
        TokenStream::new(self.tokens, self.state.offset, self.state.holes)
    }
}

/// Single-chunk scanner. Lives only for one `tokenize_chunk` call.
pub(crate) struct ChunkLexer<'a> {
    chunk: &'a str,
    bytes: &'a [u8],
    cursor: usize,
    state: TokenizerState,
    raw_text_elements: &'a TagSet,
    tokens: Vec<Token>,
}

impl ChunkLexer<'_> {
    fn run(&mut self) -> Result<(), TokenizeError> {
        while self.cursor < self.bytes.len() {
            match self.state.mode {
                LexMode::Text => self.step_text(),
                LexMode::Tag => self.step_tag()?,
                LexMode::AttributeValue => self.step_attribute_value(),
                LexMode::RawText => self.step_raw_text(),
                LexMode::Comment => self.step_comment(),
            }
        }
        Ok(())
    }

    fn transition_to(&mut self, next: LexMode) {
        if self.state.mode == next {
            return;
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "sld.tokenizer",
            "mode {:?} -> {:?} @{}",
            self.state.mode,
            next,
            self.state.offset + self.cursor
        );
        self.state.mode = next;
    }

    fn step_text(&mut self) {
        let start = self.cursor;
        let Some(lt) = scan::find_byte(self.bytes, start, b'<') else {
            self.emit_text(start, self.bytes.len());
            self.cursor = self.bytes.len();
            return;
        };
        self.emit_text(start, lt);
        if self.bytes[lt + 1..].starts_with(scan::COMMENT_OPEN_TAIL) {
            self.cursor = lt + 1 + scan::COMMENT_OPEN_TAIL.len();
            self.transition_to(LexMode::Comment);
            return;
        }
        self.emit(TokenKind::OpenAngle, lt, lt + 1);
        self.state.begin_tag();
        self.cursor = lt + 1;
        self.transition_to(LexMode::Tag);
    }

    fn step_tag(&mut self) -> Result<(), TokenizeError> {
        let at = self.cursor;
        let b = self.bytes[at];
        match b {
            b if scan::is_tag_whitespace(b) => {
                self.cursor += 1;
            }
            b'>' => {
                let enters_raw_text = !self.state.closing_tag
                    && !self.state.after_slash
                    && self
                        .state
                        .tag_name
                        .as_deref()
                        .is_some_and(|name| self.raw_text_elements.contains(name));
                self.emit(TokenKind::CloseAngle, at, at + 1);
                self.cursor += 1;
                if enters_raw_text {
                    self.transition_to(LexMode::RawText);
                } else {
                    self.state.tag_name = None;
                    self.transition_to(LexMode::Text);
                }
            }
            b'=' => {
                self.emit(TokenKind::Equals, at, at + 1);
                self.cursor += 1;
            }
            b'/' => {
                if self.state.tag_name.is_none() {
                    self.state.closing_tag = true;
                }
                self.emit(TokenKind::Slash, at, at + 1);
                self.cursor += 1;
            }
            b'"' | b'\'' => {
                let quote = if b == b'"' { Quote::Double } else { Quote::Single };
                self.emit(TokenKind::QuoteChar(quote), at, at + 1);
                self.state.quote = Some(quote);
                self.cursor += 1;
                self.transition_to(LexMode::AttributeValue);
            }
            b if scan::is_identifier_start(b) => {
                let end = scan::identifier_end(self.bytes, at);
                let name = &self.chunk[at..end];
                self.state.record_tag_name(name);
                self.emit(TokenKind::Identifier(name.to_string()), at, end);
                self.cursor = end;
            }
            b'.' if self.bytes[at..].starts_with(scan::SPREAD) => {
                self.emit(TokenKind::Spread, at, at + scan::SPREAD.len());
                self.cursor += scan::SPREAD.len();
            }
            _ => {
                let ch = self.chunk[at..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                let offset = self.state.offset + at;
                log::debug!(target: "sld.tokenizer", "unexpected character {ch:?} at {offset}");
                return Err(TokenizeError::UnexpectedCharacter { ch, offset });
            }
        }
        Ok(())
    }

    fn step_attribute_value(&mut self) {
        let start = self.cursor;
        let Some(quote) = self.state.quote else {
            // No pending quote means the value was already closed.
            self.transition_to(LexMode::Tag);
            return;
        };
        match scan::find_byte(self.bytes, start, quote.as_byte()) {
            Some(end) => {
                self.emit_attribute_text(start, end);
                self.emit(TokenKind::QuoteChar(quote), end, end + 1);
                self.state.quote = None;
                self.cursor = end + 1;
                self.transition_to(LexMode::Tag);
            }
            None => {
                self.emit_attribute_text(start, self.bytes.len());
                self.cursor = self.bytes.len();
            }
        }
    }

    fn step_raw_text(&mut self) {
        let start = self.cursor;
        let found = match self.state.tag_name.as_deref() {
            Some(name) => scan::find_raw_text_close(&self.chunk[start..], name),
            None => Some(0),
        };
        match found {
            Some(rel) => {
                self.emit_text(start, start + rel);
                self.state.tag_name = None;
                self.cursor = start + rel;
                self.transition_to(LexMode::Text);
            }
            None => {
                self.emit_text(start, self.bytes.len());
                self.cursor = self.bytes.len();
            }
        }
    }

    fn step_comment(&mut self) {
        match scan::find_comment_close(self.bytes, self.cursor) {
            Some(at) => {
                self.cursor = at + scan::COMMENT_CLOSE.len();
                self.transition_to(LexMode::Text);
            }
            None => {
                self.cursor = self.bytes.len();
            }
        }
    }
}
