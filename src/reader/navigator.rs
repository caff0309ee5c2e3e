//! Chapter navigation over the corpus outline.
//!
//! The navigator tracks a current (book, chapter) position and resolves it
//! to the addressed chapter's verses. Chapter stepping is clamped to the
//! current book: `next_chapter` at the last chapter and `prev_chapter` at
//! the first are no-ops, and crossing into another book is an explicit
//! `go_to_book`, which resets to that book's first chapter.

use std::ops::Range;

use crate::corpus::corpus::Corpus;
use crate::error::{ConcordError, Result};

/// One book's chapters as position ranges into the corpus.
#[derive(Debug, Clone)]
struct BookOutline {
    name: String,
    /// Verse position range per chapter, in chapter order.
    chapters: Vec<Range<usize>>,
}

/// The verses of the currently addressed chapter.
#[derive(Debug, Clone)]
pub struct ChapterView<'a> {
    /// Book name.
    pub book: &'a str,
    /// 1-based chapter number.
    pub chapter: u32,
    /// Verse texts in verse order.
    pub verses: Vec<&'a str>,
}

impl ChapterView<'_> {
    /// Number of verses in the chapter.
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// Tracks the current reading position in a corpus.
#[derive(Debug)]
pub struct Navigator<'a> {
    corpus: &'a Corpus,
    books: Vec<BookOutline>,
    book_idx: usize,
    chapter_idx: usize,
}

impl<'a> Navigator<'a> {
    /// Build a navigator positioned at the first book's first chapter.
    pub fn new(corpus: &'a Corpus) -> Result<Self> {
        let books = outline(corpus);
        if books.is_empty() {
            return Err(ConcordError::corpus("cannot navigate an empty corpus"));
        }
        Ok(Navigator {
            corpus,
            books,
            book_idx: 0,
            chapter_idx: 0,
        })
    }

    /// Book names in corpus order.
    pub fn book_names(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.name.as_str()).collect()
    }

    /// Number of chapters in the book at `book_idx`, if it exists.
    pub fn chapter_count(&self, book_idx: usize) -> Option<usize> {
        self.books.get(book_idx).map(|b| b.chapters.len())
    }

    /// The currently addressed book's index.
    pub fn current_book(&self) -> usize {
        self.book_idx
    }

    /// The currently addressed chapter, resolved to its verses.
    pub fn current_chapter(&self) -> ChapterView<'_> {
        let book = &self.books[self.book_idx];
        let range = book.chapters[self.chapter_idx].clone();
        let verses = self.corpus.verses()[range]
            .iter()
            .map(|v| v.text.as_str())
            .collect();
        ChapterView {
            book: &book.name,
            chapter: self.chapter_idx as u32 + 1,
            verses,
        }
    }

    /// Jump to a book by index, resetting to its first chapter. Returns
    /// whether the position changed.
    pub fn go_to_book(&mut self, book_idx: usize) -> bool {
        if book_idx >= self.books.len() {
            return false;
        }
        self.book_idx = book_idx;
        self.chapter_idx = 0;
        true
    }

    /// Jump to a 0-based chapter of the current book. Returns whether the
    /// position changed.
    pub fn go_to_chapter(&mut self, chapter_idx: usize) -> bool {
        if chapter_idx >= self.books[self.book_idx].chapters.len() {
            return false;
        }
        self.chapter_idx = chapter_idx;
        true
    }

    /// Step back one chapter; a no-op at the book's first chapter.
    pub fn prev_chapter(&mut self) -> bool {
        if self.chapter_idx == 0 {
            return false;
        }
        self.chapter_idx -= 1;
        true
    }

    /// Step forward one chapter; a no-op at the book's last chapter.
    pub fn next_chapter(&mut self) -> bool {
        if self.chapter_idx + 1 >= self.books[self.book_idx].chapters.len() {
            return false;
        }
        self.chapter_idx += 1;
        true
    }
}

/// Group consecutive verses into a book/chapter outline.
fn outline(corpus: &Corpus) -> Vec<BookOutline> {
    let mut books: Vec<BookOutline> = Vec::new();
    let mut last_chapter = 0;
    for (pos, verse) in corpus.iter() {
        let pos = pos as usize;
        let new_book = books.last().map(|b| b.name != verse.book).unwrap_or(true);
        if new_book {
            books.push(BookOutline {
                name: verse.book.clone(),
                chapters: vec![pos..pos + 1],
            });
            last_chapter = verse.chapter;
            continue;
        }
        let book = books.last_mut().expect("book pushed above");
        if verse.chapter != last_chapter {
            book.chapters.push(pos..pos + 1);
            last_chapter = verse.chapter;
        } else {
            let chapter = book.chapters.last_mut().expect("chapter pushed above");
            chapter.end = pos + 1;
        }
    }
    books
}
