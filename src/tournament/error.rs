//! Tournament error types

use thiserror::Error;

use super::Phase;

/// Errors raised by the bracket state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TournamentError {
    /// Fewer than two usable images
    #[error("At least 2 images are needed, found {found}")]
    NotEnoughCandidates { found: usize },

    /// Operation not available in the current phase
    #[error("Expected phase {expected:?}, bracket is in {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },

    /// A pick is still animating
    #[error("A selection is already in progress")]
    Busy,

    /// `settle` called without a pending pick
    #[error("No selection to settle")]
    NothingPending,

    /// Preview operation without an open preview
    #[error("No candidate is being previewed")]
    NoPreview,

    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),
}

/// Result type alias for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TournamentError::NotEnoughCandidates { found: 1 };
        assert_eq!(err.to_string(), "At least 2 images are needed, found 1");

        let err = TournamentError::InvalidPhase {
            expected: Phase::Playing,
            actual: Phase::Setup,
        };
        assert_eq!(err.to_string(), "Expected phase Playing, bracket is in Setup");
    }
}
