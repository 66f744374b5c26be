//! Types shared by the tokenizer and the tree builder.
//!
//! The module itself is private; downstream consumers import these types from the
//! crate root.

mod error;
mod span;
mod tag_set;
mod token;

pub use error::{TemplateError, TokenizeError, TreeBuilderError};
pub use span::Span;
pub use tag_set::TagSet;
pub use token::{Quote, Token, TokenKind, TokenStream};
