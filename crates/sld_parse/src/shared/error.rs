//! Fatal errors raised while tokenizing or building a template tree.
//!
//! Every error aborts the current parse. There is no recovery mode and no
//! partial tree is ever returned alongside an error.

use thiserror::Error;

/// Lexical errors raised by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unexpected character {ch:?} inside tag at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
    /// Two chunks were pushed without a hole between them.
    #[error("chunk pushed without a preceding hole at offset {offset}")]
    MissingHole { offset: usize },
}

impl TokenizeError {
    pub fn offset(&self) -> usize {
        match self {
            TokenizeError::UnexpectedCharacter { offset, .. }
            | TokenizeError::MissingHole { offset } => *offset,
        }
    }
}

/// Structural errors raised by the tree builder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeBuilderError {
    #[error(
        "mismatched closing tag at offset {offset}: expected </{}>, found {}",
        expected.as_deref().unwrap_or("<nothing open>"),
        found.as_deref().unwrap_or("<no tag name>")
    )]
    MismatchedClosingTag {
        /// Name of the innermost open container, `None` at the root.
        expected: Option<String>,
        /// Name written in the closing tag, `None` when no identifier followed `</`.
        found: Option<String>,
        offset: usize,
    },
    #[error("expected identifier after '<' at offset {offset}, found {found}")]
    ExpectedIdentifier { found: &'static str, offset: usize },
    #[error("spread '...' at offset {offset} must be followed by an expression")]
    SpreadWithoutExpression { offset: usize },
    #[error("invalid attribute at offset {offset}: unexpected {found}")]
    InvalidAttribute { found: &'static str, offset: usize },
    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: &'static str, offset: usize },
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },
    #[error("unclosed tag <{name}> opened at offset {offset}")]
    UnclosedTag { name: String, offset: usize },
}

impl TreeBuilderError {
    pub fn offset(&self) -> usize {
        match self {
            TreeBuilderError::MismatchedClosingTag { offset, .. }
            | TreeBuilderError::ExpectedIdentifier { offset, .. }
            | TreeBuilderError::SpreadWithoutExpression { offset }
            | TreeBuilderError::InvalidAttribute { offset, .. }
            | TreeBuilderError::UnexpectedToken { offset, .. }
            | TreeBuilderError::UnexpectedEndOfInput { offset }
            | TreeBuilderError::UnclosedTag { offset, .. } => *offset,
        }
    }
}

/// Either stage failing during a full template parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    TreeBuilder(#[from] TreeBuilderError),
}

impl TemplateError {
    /// Byte offset into the concatenated chunks where the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            TemplateError::Tokenize(err) => err.offset(),
            TemplateError::TreeBuilder(err) => err.offset(),
        }
    }
}
