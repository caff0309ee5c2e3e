//! Search module: query evaluation, ranking, highlighting, and sessions.

pub mod engine;
pub mod highlight;
pub mod history;
pub mod presenter;
pub mod query;
pub mod session;

// Re-export commonly used types
pub use engine::*;
pub use highlight::*;
pub use history::*;
pub use presenter::*;
pub use query::*;
pub use session::*;
