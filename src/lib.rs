//! # Concord
//!
//! A concordance-style reader and search engine for versified text corpora
//! (books → chapters → verses).
//!
//! ## Features
//!
//! - In-memory inverted index built in one pass over the corpus
//! - Multi-word AND queries with a literal substring fallback for short input
//! - Canonical book/chapter/verse result ordering with truncation
//! - Literal (injection-safe) case-insensitive highlighting
//! - Book / testament / chapter-range filtered search
//! - Chapter navigation over the corpus outline

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod reader;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
