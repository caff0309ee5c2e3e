//! The corpus: an ordered, read-only sequence of verse records.

use serde::{Deserialize, Serialize};

use crate::corpus::verse::VerseRecord;

/// Zero-based position of a verse in the corpus sequence.
///
/// Positions are stable for the lifetime of the loaded corpus and are the
/// unit the inverted index stores.
pub type VersePos = u32;

/// The full ordered collection of verse records for a session.
///
/// Built once at load time; no mutation API exists afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    verses: Vec<VerseRecord>,
}

/// Summary statistics for a loaded corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub verse_count: usize,
    pub book_count: usize,
    pub chapter_count: usize,
}

impl Corpus {
    /// Create a corpus from an ordered sequence of verse records.
    pub fn new(verses: Vec<VerseRecord>) -> Self {
        Corpus { verses }
    }

    /// Get the verse at a position.
    pub fn get(&self, pos: VersePos) -> Option<&VerseRecord> {
        self.verses.get(pos as usize)
    }

    /// All verses in corpus order.
    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Iterate over `(position, verse)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (VersePos, &VerseRecord)> {
        self.verses
            .iter()
            .enumerate()
            .map(|(i, v)| (i as VersePos, v))
    }

    /// Number of verses.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Whether the corpus has no verses.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Distinct book names in first-appearance order.
    pub fn book_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for verse in &self.verses {
            if names.last() != Some(&verse.book.as_str()) && !names.contains(&verse.book.as_str())
            {
                names.push(&verse.book);
            }
        }
        names
    }

    /// Summary statistics (verse, book, and chapter counts).
    pub fn stats(&self) -> CorpusStats {
        let mut book_count = 0;
        let mut chapter_count = 0;
        let mut current: Option<(&str, u32)> = None;
        for verse in &self.verses {
            match current {
                Some((book, chapter)) if book == verse.book && chapter == verse.chapter => {}
                Some((book, _)) if book == verse.book => {
                    chapter_count += 1;
                    current = Some((&verse.book, verse.chapter));
                }
                _ => {
                    book_count += 1;
                    chapter_count += 1;
                    current = Some((&verse.book, verse.chapter));
                }
            }
        }
        CorpusStats {
            verse_count: self.verses.len(),
            book_count,
            chapter_count,
        }
    }
}
