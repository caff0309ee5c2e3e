//! Canonical book ordering and testament classification.
//!
//! The 66-book canonical order is static reference data: it is not derived
//! from the corpus and is used only for result sorting and for the
//! old/new-testament boundary test. Books the table does not know about get
//! a sentinel rank greater than any real rank, so they sort last
//! deterministically instead of panicking.

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Number of books in the canonical ordering.
pub const BOOK_COUNT: usize = 66;

/// Rank of the first New Testament book (Matthew).
pub const NEW_TESTAMENT_RANK: u32 = 40;

/// Sentinel rank for books absent from the canonical table.
pub const UNKNOWN_RANK: u32 = u32::MAX;

#[rustfmt::skip]
const CANONICAL_ORDER: [&str; BOOK_COUNT] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles",
    "Ezra", "Nehemiah", "Esther", "Job", "Psalms",
    "Proverbs", "Ecclesiastes", "Song of Solomon", "Isaiah",
    "Jeremiah", "Lamentations", "Ezekiel", "Daniel",
    "Hosea", "Joel", "Amos", "Obadiah", "Jonah",
    "Micah", "Nahum", "Habakkuk", "Zephaniah", "Haggai",
    "Zechariah", "Malachi", "Matthew", "Mark", "Luke",
    "John", "Acts", "Romans", "1 Corinthians", "2 Corinthians",
    "Galatians", "Ephesians", "Philippians", "Colossians",
    "1 Thessalonians", "2 Thessalonians", "1 Timothy", "2 Timothy",
    "Titus", "Philemon", "Hebrews", "James", "1 Peter",
    "2 Peter", "1 John", "2 John", "3 John", "Jude",
    "Revelation",
];

lazy_static! {
    static ref BOOK_RANKS: AHashMap<&'static str, u32> = CANONICAL_ORDER
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i as u32 + 1))
        .collect();
}

/// Canonical rank of a book (1..=66), or [`UNKNOWN_RANK`] if absent.
pub fn book_rank(book: &str) -> u32 {
    BOOK_RANKS.get(book).copied().unwrap_or(UNKNOWN_RANK)
}

/// The canonical book names in order.
pub fn canonical_books() -> &'static [&'static str] {
    &CANONICAL_ORDER
}

/// A binary partition of the canonical books by rank threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Classify a book, or `None` if the book is not in the canonical table.
    pub fn of(book: &str) -> Option<Testament> {
        match book_rank(book) {
            UNKNOWN_RANK => None,
            rank if rank >= NEW_TESTAMENT_RANK => Some(Testament::New),
            _ => Some(Testament::Old),
        }
    }

    /// Whether a book belongs to this testament.
    ///
    /// Unknown books are not New Testament, so `New` excludes them and
    /// `Old` admits them, matching the rank-threshold test.
    pub fn admits(&self, book: &str) -> bool {
        let is_new = matches!(Testament::of(book), Some(Testament::New));
        match self {
            Testament::New => is_new,
            Testament::Old => !is_new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_ranks() {
        assert_eq!(book_rank("Genesis"), 1);
        assert_eq!(book_rank("Malachi"), 39);
        assert_eq!(book_rank("Matthew"), 40);
        assert_eq!(book_rank("Revelation"), 66);
    }

    #[test]
    fn test_unknown_book_sorts_last() {
        assert_eq!(book_rank("Apocrypha"), UNKNOWN_RANK);
        assert!(book_rank("Apocrypha") > book_rank("Revelation"));
    }

    #[test]
    fn test_testament_boundary() {
        assert_eq!(Testament::of("Malachi"), Some(Testament::Old));
        assert_eq!(Testament::of("Matthew"), Some(Testament::New));
        assert_eq!(Testament::of("Apocrypha"), None);
    }

    #[test]
    fn test_testament_admits_unknown_books_as_old() {
        assert!(Testament::Old.admits("Apocrypha"));
        assert!(!Testament::New.admits("Apocrypha"));
        assert!(Testament::New.admits("John"));
        assert!(!Testament::Old.admits("John"));
    }
}
