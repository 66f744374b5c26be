//! Template token model.

use super::Span;

/// Quote character delimiting an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    pub(crate) fn as_byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `<`
    OpenAngle,
    /// `>`
    CloseAngle,
    /// `/`
    Slash,
    /// Tag or attribute name.
    Identifier(String),
    /// `=`
    Equals,
    /// Literal run inside a quoted attribute value.
    AttributeValueText(String),
    /// Literal run in content or raw-text position.
    Text(String),
    /// Hole boundary, carrying the zero-based hole index.
    Expression(usize),
    /// Opening or closing quote of an attribute value.
    QuoteChar(Quote),
    /// `...`
    Spread,
}

impl TokenKind {
    /// Short human-readable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::OpenAngle => "'<'",
            TokenKind::CloseAngle => "'>'",
            TokenKind::Slash => "'/'",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Equals => "'='",
            TokenKind::AttributeValueText(_) => "attribute value text",
            TokenKind::Text(_) => "text",
            TokenKind::Expression(_) => "expression",
            TokenKind::QuoteChar(_) => "quote",
            TokenKind::Spread => "'...'",
        }
    }
}

/// A token and the byte span it was read from.
///
/// Determinism contract: tokens are produced in source order and their spans
/// are monotonic non-decreasing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Owned output of a complete tokenizer run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenStream {
    tokens: Vec<Token>,
    source_len: usize,
    hole_count: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, source_len: usize, hole_count: usize) -> Self {
        Self {
            tokens,
            source_len,
            hole_count,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Total byte length of all literal chunks.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of hole boundaries crossed, including holes dropped inside comments.
    pub fn hole_count(&self) -> usize {
        self.hole_count
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
