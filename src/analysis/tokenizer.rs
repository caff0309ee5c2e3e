//! Word tokenization for index construction.

use regex::Regex;

use crate::error::{ConcordError, Result};

/// Tokens shorter than this are not indexed.
pub const MIN_TOKEN_LEN: usize = 3;

/// Extracts normalized word tokens from verse text.
///
/// The text is lowercased, maximal `\w+` runs are extracted, and tokens
/// shorter than [`MIN_TOKEN_LEN`] characters are discarded. These are
/// exactly the terms the inverted index stores.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Create a tokenizer with the default word pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\w+")
            .map_err(|e| ConcordError::analysis(format!("invalid token pattern: {e}")))?;
        Ok(WordTokenizer { pattern })
    }

    /// Extract the normalized index terms of `text`, in order of occurrence.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("default token pattern should be valid")
    }
}
