//! The search engine: owns the corpus and its inverted index.
//!
//! The engine is constructed from a loaded corpus (building the index as
//! part of construction), so an engine can never be observed with a
//! partially built index; readiness gating for callers that may not have
//! loaded a corpus yet lives in
//! [`SearchSession`](crate::search::session::SearchSession).

use std::time::{Duration, Instant};

use ahash::AHashMap;

use crate::corpus::corpus::{Corpus, VersePos};
use crate::corpus::verse::VerseRecord;
use crate::error::Result;
use crate::index::builder::IndexBuilder;
use crate::index::inverted::InvertedIndex;
use crate::search::query::{AdvancedFilter, SearchQuery};

/// Which evaluation path produced a set of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Indexed multi-word AND intersection by posting-hit counting.
    Indexed,
    /// Linear substring scan of the whole corpus.
    Scan,
}

/// Matches for one evaluated query, in corpus order.
#[derive(Debug)]
pub struct SearchMatches<'a> {
    pub verses: Vec<&'a VerseRecord>,
    pub strategy: MatchStrategy,
    pub elapsed: Duration,
}

/// A build-once/read-many search engine over a single corpus.
#[derive(Debug)]
pub struct SearchEngine {
    corpus: Corpus,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Build an engine for `corpus`, constructing its inverted index.
    pub fn new(corpus: Corpus) -> Result<Self> {
        let index = IndexBuilder::new()?.build(&corpus);
        log::info!(
            "search engine ready: {} verses, {} indexed terms",
            corpus.len(),
            index.term_count()
        );
        Ok(SearchEngine { corpus, index })
    }

    /// The corpus this engine searches.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The engine's inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Evaluate a query.
    ///
    /// Queries long enough to have been indexed take the multi-word AND
    /// path: the query is split on whitespace, and a verse matches iff
    /// every distinct query word has a posting for it. Shorter queries fall
    /// back to an exhaustive substring scan, which also matches inside
    /// longer words ("of" matches "profit").
    pub fn search(&self, query: &SearchQuery) -> SearchMatches<'_> {
        let started = Instant::now();
        let (verses, strategy) = if query.uses_index() {
            (self.indexed_matches(query), MatchStrategy::Indexed)
        } else {
            (self.scan_matches(query.normalized()), MatchStrategy::Scan)
        };
        let elapsed = started.elapsed();
        log::debug!(
            "query {:?}: {} matches via {:?} in {:?}",
            query.display(),
            verses.len(),
            strategy,
            elapsed
        );
        SearchMatches {
            verses,
            strategy,
            elapsed,
        }
    }

    /// Evaluate a query restricted by an [`AdvancedFilter`].
    ///
    /// Always a linear scan: per verse, the book, testament, and
    /// chapter-range filters apply first, then a substring text match. This
    /// is an explicit user-initiated refinement and does not share the
    /// indexed path.
    pub fn filtered_search(
        &self,
        query: &SearchQuery,
        filter: &AdvancedFilter,
    ) -> Vec<&VerseRecord> {
        let needle = query.normalized();
        self.corpus
            .verses()
            .iter()
            .filter(|v| filter.admits(v) && v.text.to_lowercase().contains(needle))
            .collect()
    }

    fn indexed_matches(&self, query: &SearchQuery) -> Vec<&VerseRecord> {
        let words = query.words();
        let mut hit_counts: AHashMap<VersePos, usize> = AHashMap::new();
        for word in &words {
            if let Some(postings) = self.index.postings(word) {
                for &pos in postings {
                    *hit_counts.entry(pos).or_insert(0) += 1;
                }
            }
            // A word absent from the index contributes no hits, so the AND
            // becomes unsatisfiable for every verse.
        }
        let mut positions: Vec<VersePos> = hit_counts
            .into_iter()
            .filter(|&(_, count)| count == words.len())
            .map(|(pos, _)| pos)
            .collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|pos| self.corpus.get(pos))
            .collect()
    }

    fn scan_matches(&self, needle: &str) -> Vec<&VerseRecord> {
        self.corpus
            .verses()
            .iter()
            .filter(|v| v.text.to_lowercase().contains(needle))
            .collect()
    }
}
