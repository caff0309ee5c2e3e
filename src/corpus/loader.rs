//! Corpus loading from JSON documents.
//!
//! Two document shapes are accepted:
//!
//! - the canonical flat shape: an array of `{book, chapter, verse, text}`
//!   records in corpus order;
//! - the nested shape used by reader front ends: an array of
//!   `{name, chapters: [[verse text, ...], ...]}` book objects, which is
//!   adapted to flat records with 1-based chapter and verse numbers.
//!
//! A missing file or malformed document yields
//! [`ConcordError::DataUnavailable`], which is fatal to the session's search
//! capability and never silently retried.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::corpus::corpus::Corpus;
use crate::corpus::verse::VerseRecord;
use crate::error::{ConcordError, Result};

/// A book object in the nested document shape.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDocument {
    pub name: String,
    pub chapters: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Flat(Vec<VerseRecord>),
    Nested(Vec<BookDocument>),
}

/// Load a corpus from a JSON file at `path`.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ConcordError::data_unavailable(format!("failed to open {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);
    let document: CorpusDocument = serde_json::from_reader(reader).map_err(|e| {
        ConcordError::data_unavailable(format!("malformed corpus document {}: {e}", path.display()))
    })?;
    let corpus = into_corpus(document);
    log::info!("loaded {} verses from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parse a corpus from an in-memory JSON string.
pub fn parse_corpus(json: &str) -> Result<Corpus> {
    let document: CorpusDocument = serde_json::from_str(json)
        .map_err(|e| ConcordError::data_unavailable(format!("malformed corpus document: {e}")))?;
    Ok(into_corpus(document))
}

fn into_corpus(document: CorpusDocument) -> Corpus {
    match document {
        CorpusDocument::Flat(verses) => Corpus::new(verses),
        CorpusDocument::Nested(books) => flatten_books(books),
    }
}

/// Adapt nested book objects to the flat record shape.
pub fn flatten_books(books: Vec<BookDocument>) -> Corpus {
    let mut verses = Vec::new();
    for book in books {
        for (chapter_idx, chapter) in book.chapters.into_iter().enumerate() {
            for (verse_idx, text) in chapter.into_iter().enumerate() {
                verses.push(VerseRecord {
                    book: book.name.clone(),
                    chapter: chapter_idx as u32 + 1,
                    verse: verse_idx as u32 + 1,
                    text,
                });
            }
        }
    }
    Corpus::new(verses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_shape() {
        let json = r#"[
            {"book": "Genesis", "chapter": 1, "verse": 1, "text": "In the beginning"},
            {"book": "Genesis", "chapter": 1, "verse": 2, "text": "And the earth"}
        ]"#;
        let corpus = parse_corpus(json).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().reference(), "Genesis 1:2");
    }

    #[test]
    fn test_parse_nested_shape() {
        let json = r#"[
            {"name": "Genesis", "chapters": [["In the beginning", "And the earth"], ["Thus the heavens"]]},
            {"name": "Exodus", "chapters": [["Now these are the names"]]}
        ]"#;
        let corpus = parse_corpus(json).unwrap();
        assert_eq!(corpus.len(), 4);
        // 1-based numbering from array offsets
        assert_eq!(corpus.get(2).unwrap().reference(), "Genesis 2:1");
        assert_eq!(corpus.get(3).unwrap().reference(), "Exodus 1:1");
    }

    #[test]
    fn test_malformed_document_is_data_unavailable() {
        let err = parse_corpus("{\"not\": \"a corpus\"}").unwrap_err();
        assert!(matches!(err, ConcordError::DataUnavailable(_)));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = load_corpus("/nonexistent/corpus.json").unwrap_err();
        assert!(matches!(err, ConcordError::DataUnavailable(_)));
    }
}
