//! Entropy-based guess selection
//!
//! The solver replays the clue history on a candidate lister and scores guesses
//! by the expected entropy of the words they would leave, searching either the
//! whole vocabulary or group representatives first.

mod engine;
pub mod entropy;
mod error;
mod search_space;

pub use engine::EntropySolver;
pub use entropy::{expected_entropy, remaining_entropy};
pub use error::SolverError;
pub use search_space::{DEFAULT_MAX_SEARCH_SIZE, Groups, SearchSpace};
