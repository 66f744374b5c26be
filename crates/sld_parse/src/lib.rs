//! Parser for chunked markup templates.
//!
//! A template is a list of literal chunks with a hole between each pair. The
//! [`tokenizer`] turns the chunks into a flat token stream, with each hole as
//! a zero-width `Expression` token, and the [`tree_builder`] assembles the
//! stream into a [`Root`] of elements, components, text and expressions.
//!
//! ```
//! use sld_parse::{ParseConfig, Property, parse_template};
//!
//! let root = parse_template(&["<div class=\"btn ", "\"></div>"], &ParseConfig::default())?;
//! let div = root.children[0].as_element().unwrap();
//! assert!(matches!(div.prop("class"), Some(Property::Mixed { .. })));
//! # Ok::<(), sld_parse::TemplateError>(())
//! ```

pub mod ast;
pub mod fmt;
pub mod session;
mod shared;
pub mod tokenizer;
pub mod traverse;
pub mod tree_builder;

pub use crate::ast::{
    Element, ElementKind, Expression, Node, NodeKind, Property, Root, Text, ValuePart,
};
pub use crate::session::{ParseConfig, TemplateSession, parse_template};
pub use crate::shared::{
    Quote, Span, TagSet, TemplateError, Token, TokenKind, TokenStream, TokenizeError,
    TreeBuilderError,
};
pub use crate::tokenizer::{
    LexMode, TemplateTokenizer, TokenizerConfig, TokenizerState, tokenize, tokenize_chunk,
    tokenize_hole,
};
pub use crate::tree_builder::{TreeBuilder, TreeBuilderConfig, parse};
