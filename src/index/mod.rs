//! Inverted index over verse positions.
//!
//! The index maps each normalized word to the ascending list of verse
//! positions containing it. It is built once per corpus load and never
//! mutated afterward; there is no incremental update or on-disk form.

pub mod builder;
pub mod inverted;

// Re-export commonly used types
pub use builder::*;
pub use inverted::*;
