//! Full pipeline: chunks in, tree out.

use crate::ast::Root;
use crate::shared::TemplateError;
use crate::tokenizer::{TemplateTokenizer, TokenizerConfig};
use crate::tree_builder::{TreeBuilder, TreeBuilderConfig};

#[derive(Clone, Debug, Default)]
pub struct ParseConfig {
    pub tokenizer: TokenizerConfig,
    pub tree_builder: TreeBuilderConfig,
}

/// Tokenize and build `chunks` (N+1 literal pieces around N holes).
pub fn parse_template<S: AsRef<str>>(
    chunks: &[S],
    config: &ParseConfig,
) -> Result<Root, TemplateError> {
    let mut session = TemplateSession::new(config.clone());
    for (index, chunk) in chunks.iter().enumerate() {
        if index > 0 {
            session.push_hole();
        }
        session.push_chunk(chunk.as_ref())?;
    }
    session.finish()
}

/// Incremental session for callers that receive chunks one at a time.
///
/// Tokens accumulate until `finish`, which builds the tree in one pass.
#[derive(Debug)]
pub struct TemplateSession {
    tokenizer: TemplateTokenizer,
    builder: TreeBuilder,
}

impl TemplateSession {
    pub fn new(config: ParseConfig) -> Self {
        Self {
            tokenizer: TemplateTokenizer::new(config.tokenizer),
            builder: TreeBuilder::new(config.tree_builder),
        }
    }

    pub fn push_chunk(&mut self, chunk: &str) -> Result<(), TemplateError> {
        self.tokenizer.push_chunk(chunk)?;
        Ok(())
    }

    pub fn push_hole(&mut self) {
        self.tokenizer.push_hole();
    }

    pub fn finish(self) -> Result<Root, TemplateError> {
        let stream = self.tokenizer.finish();
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "sld.tree_builder",
            "building from {} tokens ({} holes, {} bytes)",
            stream.len(),
            stream.hole_count(),
            stream.source_len()
        );
        Ok(self.builder.build(stream.tokens())?)
    }
}
