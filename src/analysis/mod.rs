//! Text analysis module for Concord.
//!
//! Indexing and the indexed query path share one normalization: lowercase
//! word tokens extracted by boundary matching, with short tokens dropped.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::*;
