//! Solver error type

/// Failure to pick a next guess
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("No candidates remain: no word is consistent with the clues received")]
    NoCandidatesRemain,

    #[error("The search space has no candidate guesses")]
    EmptySearchSpace,

    #[error("No simulated target leaves a possible word for candidate \"{candidate}\"")]
    NoValidTargets { candidate: String },
}
