//! Corpus model: an ordered, immutable collection of verse records.
//!
//! A corpus is loaded once per session from a JSON document and read-only
//! thereafter. Verses are identified by their zero-based position in the
//! sequence; canonical book ordering is static reference data, not derived
//! from the corpus.

pub mod books;
#[allow(clippy::module_inception)]
pub mod corpus;
pub mod loader;
pub mod verse;

// Re-export commonly used types
pub use books::*;
pub use corpus::*;
pub use loader::*;
pub use verse::*;
