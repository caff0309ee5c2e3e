//! Result ranking, truncation, and presentation.

use serde::Serialize;

use crate::corpus::books::book_rank;
use crate::corpus::verse::VerseRecord;
use crate::search::highlight::highlight;
use crate::search::query::SearchQuery;

/// Default maximum number of rendered results.
pub const DEFAULT_RESULT_LIMIT: usize = 500;

/// A single rendered result entry.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedVerse {
    /// Human-readable reference, e.g. "Genesis 1:1".
    pub reference: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Verse text with query occurrences wrapped in highlight tags.
    pub highlighted_text: String,
}

/// Notice that a listing was cut at the display limit.
#[derive(Debug, Clone, Serialize)]
pub struct TruncationNotice {
    /// Entries actually rendered.
    pub shown: usize,
    /// True match count before truncation.
    pub total: usize,
}

/// Summary statistics for one evaluated search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStats {
    pub total_matches: usize,
    pub elapsed_ms: f64,
}

/// A renderable result set.
///
/// Zero matches produce the distinct `Empty` variant rather than a listing
/// with no entries, so a no-results render is always distinguishable from
/// an idle state and from an error state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSet {
    Empty {
        query: String,
    },
    Listing {
        entries: Vec<RenderedVerse>,
        total_matches: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        truncation: Option<TruncationNotice>,
    },
}

impl ResultSet {
    /// Number of rendered entries.
    pub fn rendered_len(&self) -> usize {
        match self {
            ResultSet::Empty { .. } => 0,
            ResultSet::Listing { entries, .. } => entries.len(),
        }
    }
}

/// Sort matches canonically, truncate to `limit`, and highlight the query.
///
/// Sort key is ascending (canonical book rank, chapter, verse); books
/// absent from the canonical table get a sentinel rank greater than any
/// real rank, so they sort last, stably among themselves.
pub fn present(matches: &[&VerseRecord], query: &SearchQuery, limit: usize) -> ResultSet {
    if matches.is_empty() {
        return ResultSet::Empty {
            query: query.display().to_string(),
        };
    }

    let mut sorted: Vec<&VerseRecord> = matches.to_vec();
    sorted.sort_by_key(|v| (book_rank(&v.book), v.chapter, v.verse));

    let total_matches = sorted.len();
    let entries: Vec<RenderedVerse> = sorted
        .into_iter()
        .take(limit)
        .map(|v| RenderedVerse {
            reference: v.reference(),
            book: v.book.clone(),
            chapter: v.chapter,
            verse: v.verse,
            highlighted_text: highlight(&v.text, query.display()),
        })
        .collect();

    let truncation = (total_matches > entries.len()).then(|| TruncationNotice {
        shown: entries.len(),
        total: total_matches,
    });

    ResultSet::Listing {
        entries,
        total_matches,
        truncation,
    }
}
