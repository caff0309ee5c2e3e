//! Search sessions: readiness gating and supersede-on-new-input queries.
//!
//! Input surfaces deliver keystrokes faster than anyone wants results, and
//! the reference behavior is debounce-as-cancellation: only the latest
//! query in a burst is ever evaluated. The session models that without
//! timers — a single pending-query slot that each `submit` overwrites, and
//! a `flush` that evaluates whatever the slot holds at quiet time.
//!
//! The session also owns the not-ready boundary: until a corpus-backed
//! engine is attached, flushing a pending query fails with
//! [`ConcordError::NotReady`] and the query stays pending (deferred, never
//! run against a missing or partially built index).

use crate::error::{ConcordError, Result};
use crate::search::engine::SearchEngine;
use crate::search::history::SearchHistory;
use crate::search::presenter::{self, DEFAULT_RESULT_LIMIT, ResultSet, SearchStats};
use crate::search::query::SearchQuery;

/// Outcome of flushing a session.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Nothing to evaluate: no pending query (blank input resets to idle).
    Idle,
    /// The latest pending query was evaluated and presented.
    Evaluated {
        result: ResultSet,
        stats: SearchStats,
    },
}

/// A user-facing search session over at most one engine.
#[derive(Debug)]
pub struct SearchSession {
    engine: Option<SearchEngine>,
    pending: Option<SearchQuery>,
    history: SearchHistory,
    limit: usize,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// A session with no engine attached yet (not ready).
    pub fn new() -> Self {
        SearchSession {
            engine: None,
            pending: None,
            history: SearchHistory::in_memory(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// A ready session over `engine`.
    pub fn with_engine(engine: SearchEngine) -> Self {
        let mut session = Self::new();
        session.attach(engine);
        session
    }

    /// Use `history` instead of the default in-memory log.
    pub fn with_history(mut self, history: SearchHistory) -> Self {
        self.history = history;
        self
    }

    /// Override the result display limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Attach the corpus-backed engine, making the session ready.
    pub fn attach(&mut self, engine: SearchEngine) {
        self.engine = Some(engine);
    }

    /// Whether searches can be evaluated.
    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Submit input, superseding any pending query.
    ///
    /// Blank input clears the slot: an empty query never reaches the
    /// matching logic and leaves the session idle.
    pub fn submit(&mut self, input: &str) {
        self.pending = SearchQuery::parse(input);
    }

    /// Whether a query is waiting to be evaluated.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluate the latest pending query, if any.
    ///
    /// On success the slot is cleared and the search is recorded to the
    /// history log (best-effort). Without an engine the pending query is
    /// kept and `NotReady` is returned.
    pub fn flush(&mut self) -> Result<SearchOutcome> {
        let Some(query) = self.pending.take() else {
            return Ok(SearchOutcome::Idle);
        };
        let Some(engine) = &self.engine else {
            // Defer: keep the query pending until an engine is attached.
            self.pending = Some(query);
            return Err(ConcordError::not_ready(
                "corpus is not loaded; search input should be disabled until it is",
            ));
        };

        let matches = engine.search(&query);
        let stats = SearchStats {
            total_matches: matches.verses.len(),
            elapsed_ms: matches.elapsed.as_secs_f64() * 1000.0,
        };
        let result = presenter::present(&matches.verses, &query, self.limit);
        self.history.record(query.display(), stats.total_matches);

        Ok(SearchOutcome::Evaluated { result, stats })
    }

    /// The session's history log.
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }
}
