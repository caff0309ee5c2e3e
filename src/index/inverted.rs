//! The in-memory inverted index.

use ahash::AHashMap;

use crate::corpus::corpus::VersePos;

/// Mapping from normalized word to its posting list.
///
/// Posting lists are ascending verse positions, deduplicated per verse: a
/// word repeated within one verse contributes exactly one posting, so
/// multi-word AND matching stays verse-presence based (a repeated word can
/// never inflate a per-verse hit count).
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, Vec<VersePos>>,
}

impl InvertedIndex {
    /// Posting list for `term`, or `None` if the term is not indexed.
    pub fn postings(&self, term: &str) -> Option<&[VersePos]> {
        self.postings.get(term).map(|p| p.as_slice())
    }

    /// Whether `term` is present in the index.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index has no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Append `pos` to the posting list of `term`.
    ///
    /// Positions arrive in ascending corpus order, so comparing against the
    /// list tail is enough to deduplicate repeats within one verse.
    pub(crate) fn push(&mut self, term: String, pos: VersePos) {
        let list = self.postings.entry(term).or_default();
        if list.last() != Some(&pos) {
            list.push(pos);
        }
    }
}
