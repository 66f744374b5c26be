//! Tokenizer lexical modes and the resumable state carried between chunks.

use crate::shared::Quote;

/// Lexical mode of the tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexMode {
    /// Content: literal text until the next `<`.
    #[default]
    Text,
    /// Inside `<...>`.
    Tag,
    /// Inside a quoted attribute value.
    AttributeValue,
    /// Body of a raw-text element, up to its matching close tag.
    RawText,
    /// Inside `<!-- ... -->`; nothing is tokenized and holes are dropped.
    Comment,
}

/// Everything the tokenizer needs to resume at the next chunk.
///
/// Tokenizing a chunk is a pure function of the chunk and this state, so two
/// independent templates never share anything mutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerState {
    pub(crate) mode: LexMode,
    /// Quote awaited by `AttributeValue`.
    pub(crate) quote: Option<Quote>,
    /// First identifier seen since the current tag was opened. Kept while in
    /// `RawText` so the matching close tag can be found.
    pub(crate) tag_name: Option<String>,
    /// The current tag cycle is a closing tag (`/` came before any identifier).
    pub(crate) closing_tag: bool,
    /// The last emitted token was `/`.
    pub(crate) after_slash: bool,
    /// Absolute byte offset where the next chunk starts.
    pub(crate) offset: usize,
    /// Hole boundaries crossed so far.
    pub(crate) holes: usize,
}

impl TokenizerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Quote character an unterminated attribute value is waiting for.
    pub fn pending_quote(&self) -> Option<Quote> {
        self.quote
    }

    /// Tag name recorded for the current open-tag cycle or raw-text body.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Total bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Hole boundaries crossed so far.
    pub fn holes(&self) -> usize {
        self.holes
    }

    pub(crate) fn begin_tag(&mut self) {
        self.tag_name = None;
        self.closing_tag = false;
    }

    pub(crate) fn record_tag_name(&mut self, name: &str) {
        if self.tag_name.is_none() {
            self.tag_name = Some(name.to_string());
        }
    }
}
