//! Validated search queries and advanced filter options.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::MIN_TOKEN_LEN;
use crate::corpus::books::Testament;
use crate::corpus::verse::VerseRecord;

/// A validated, non-blank search query.
///
/// `parse` rejects empty and whitespace-only input by returning `None`, so
/// the evaluator can never be invoked with a blank query; callers treat
/// `None` as a reset to the idle state, not as a zero-result search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    display: String,
    normalized: String,
}

impl SearchQuery {
    /// Parse user input into a query, or `None` for blank input.
    pub fn parse(input: &str) -> Option<SearchQuery> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(SearchQuery {
            display: trimmed.to_string(),
            normalized: trimmed.to_lowercase(),
        })
    }

    /// The trimmed query text with its original casing, used for display
    /// and highlighting.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The lowercased form used for matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether this query takes the indexed multi-word path rather than the
    /// linear substring fallback.
    pub fn uses_index(&self) -> bool {
        self.normalized.chars().count() >= MIN_TOKEN_LEN
    }

    /// The distinct whitespace-separated words of the normalized query, in
    /// first-appearance order.
    ///
    /// The query is split on whitespace, not re-tokenized, so punctuation
    /// attached to a word stays attached and misses the index.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = Vec::new();
        for word in self.normalized.split_whitespace() {
            if !words.contains(&word) {
                words.push(word);
            }
        }
        words
    }
}

/// Options narrowing a filtered search.
///
/// Every set filter must pass for a verse to be included; the chapter range
/// always applies, defaulting to 1..=150.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilter {
    pub book: Option<String>,
    pub testament: Option<Testament>,
    pub min_chapter: u32,
    pub max_chapter: u32,
}

impl Default for AdvancedFilter {
    fn default() -> Self {
        AdvancedFilter {
            book: None,
            testament: None,
            min_chapter: 1,
            max_chapter: 150,
        }
    }
}

impl AdvancedFilter {
    /// Create a filter with the default (pass-everything) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single book by exact name.
    pub fn with_book<S: Into<String>>(mut self, book: S) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Restrict to one testament.
    pub fn with_testament(mut self, testament: Testament) -> Self {
        self.testament = Some(testament);
        self
    }

    /// Restrict the chapter range (inclusive).
    pub fn with_chapters(mut self, min: u32, max: u32) -> Self {
        self.min_chapter = min;
        self.max_chapter = max;
        self
    }

    /// Whether `verse` passes the book, testament, and chapter-range
    /// filters. Text matching is the evaluator's concern, not the filter's.
    pub fn admits(&self, verse: &VerseRecord) -> bool {
        if let Some(book) = &self.book
            && verse.book != *book
        {
            return false;
        }
        if let Some(testament) = self.testament
            && !testament.admits(&verse.book)
        {
            return false;
        }
        verse.chapter >= self.min_chapter && verse.chapter <= self.max_chapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \t\n").is_none());
    }

    #[test]
    fn test_normalization_keeps_display_casing() {
        let query = SearchQuery::parse("  Love JOY  ").unwrap();
        assert_eq!(query.display(), "Love JOY");
        assert_eq!(query.normalized(), "love joy");
    }

    #[test]
    fn test_short_queries_fall_back_to_substring() {
        assert!(!SearchQuery::parse("of").unwrap().uses_index());
        assert!(SearchQuery::parse("god").unwrap().uses_index());
    }

    #[test]
    fn test_words_are_distinct() {
        let query = SearchQuery::parse("love love joy").unwrap();
        assert_eq!(query.words(), vec!["love", "joy"]);
    }

    #[test]
    fn test_filter_admits() {
        let verse = VerseRecord::new("Matthew", 5, 3, "Blessed are the poor in spirit");
        assert!(AdvancedFilter::new().admits(&verse));
        assert!(AdvancedFilter::new().with_book("Matthew").admits(&verse));
        assert!(!AdvancedFilter::new().with_book("Mark").admits(&verse));
        assert!(
            AdvancedFilter::new()
                .with_testament(Testament::New)
                .admits(&verse)
        );
        assert!(
            !AdvancedFilter::new()
                .with_testament(Testament::Old)
                .admits(&verse)
        );
        assert!(!AdvancedFilter::new().with_chapters(6, 10).admits(&verse));
    }
}
