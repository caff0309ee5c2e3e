//! Verse records, the fundamental unit of the corpus.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single verse of the corpus.
///
/// A record is immutable once loaded. Its identity is its zero-based
/// position in the corpus sequence, not its content; two verses may have
/// identical content but are still distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// The book this verse belongs to (e.g. "Genesis").
    pub book: String,
    /// 1-based chapter number within the book.
    pub chapter: u32,
    /// 1-based verse number within the chapter.
    pub verse: u32,
    /// The verse text.
    pub text: String,
}

impl VerseRecord {
    /// Create a new verse record.
    pub fn new<B, T>(book: B, chapter: u32, verse: u32, text: T) -> Self
    where
        B: Into<String>,
        T: Into<String>,
    {
        VerseRecord {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// The human-readable reference for this verse, e.g. "Genesis 1:1".
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for VerseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{} {}", self.book, self.chapter, self.verse, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        let verse = VerseRecord::new("Genesis", 1, 1, "In the beginning");
        assert_eq!(verse.reference(), "Genesis 1:1");
    }

    #[test]
    fn test_json_round_trip() {
        let verse = VerseRecord::new("John", 3, 16, "For God so loved the world");
        let json = serde_json::to_string(&verse).unwrap();
        let back: VerseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verse);
    }
}
