//! Best-effort search-history log.
//!
//! Most-recent-first, capped at [`HISTORY_CAP`] entries. Persistence is a
//! best-effort side channel: a failure to read or write the history file is
//! logged at warn level and never propagated, so it cannot affect search
//! correctness.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 50;

/// One recorded search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub result_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// The capped search-history log.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: VecDeque<HistoryEntry>,
    path: Option<PathBuf>,
}

impl SearchHistory {
    /// An in-memory history with no persistence.
    pub fn in_memory() -> Self {
        SearchHistory::default()
    }

    /// A history persisted to `path`, seeded with whatever entries the file
    /// already holds (best-effort: an unreadable file starts empty).
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("ignoring unreadable history file {}: {e}", path.display());
                VecDeque::new()
            }
        };
        SearchHistory {
            entries,
            path: Some(path),
        }
    }

    /// Record a search, evicting the oldest entry beyond the cap, and
    /// persist if a file is configured.
    pub fn record<S: Into<String>>(&mut self, query: S, result_count: usize) {
        self.entries.push_front(HistoryEntry {
            query: query.into(),
            result_count,
            timestamp: Utc::now(),
        });
        self.entries.truncate(HISTORY_CAP);
        if let Some(path) = &self.path
            && let Err(e) = write_entries(path, &self.entries)
        {
            log::warn!("failed to persist search history to {}: {e}", path.display());
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no searches have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> std::io::Result<VecDeque<HistoryEntry>> {
    if !path.exists() {
        return Ok(VecDeque::new());
    }
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<HistoryEntry> = serde_json::from_reader(reader)?;
    Ok(entries.into())
}

fn write_entries(path: &Path, entries: &VecDeque<HistoryEntry>) -> std::io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let entries: Vec<&HistoryEntry> = entries.iter().collect();
    serde_json::to_writer(writer, &entries)?;
    Ok(())
}
