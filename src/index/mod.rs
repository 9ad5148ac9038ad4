//! Clue indexing
//!
//! Inverted indices per character slot, the clue result cache, and the
//! constraint index that combines them into the candidate listing capability.

mod cache;
mod constraint;
mod inverted;
mod lister;

pub use cache::{Cache, ClueCache, ClueKey, ClueKeyEncoder, InMemoryCache, KeyEncoder};
pub use constraint::ConstraintIndex;
pub use inverted::PositionIndex;
pub use lister::CandidateLister;
