//! One-pass index construction.

use crate::analysis::tokenizer::WordTokenizer;
use crate::corpus::corpus::Corpus;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;

/// Builds an [`InvertedIndex`] from a corpus in a single pass.
///
/// Building cannot fail for a well-formed corpus and does not mutate it; an
/// empty corpus yields an empty index.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    tokenizer: WordTokenizer,
}

impl IndexBuilder {
    /// Create a builder with the default tokenizer.
    pub fn new() -> Result<Self> {
        Ok(IndexBuilder {
            tokenizer: WordTokenizer::new()?,
        })
    }

    /// Build the inverted index for `corpus`.
    pub fn build(&self, corpus: &Corpus) -> InvertedIndex {
        let mut index = InvertedIndex::default();
        for (pos, verse) in corpus.iter() {
            for token in self.tokenizer.tokens(&verse.text) {
                index.push(token, pos);
            }
        }
        log::debug!(
            "built index: {} terms over {} verses",
            index.term_count(),
            corpus.len()
        );
        index
    }
}
