//! Reader module: chapter navigation over the corpus outline.

pub mod navigator;

// Re-export commonly used types
pub use navigator::*;
