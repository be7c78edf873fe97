//! Memory game error types

use thiserror::Error;

use super::MemoryPhase;

/// Errors raised while building decks or driving the memory game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// Auto mode needs at least two image files
    #[error("At least 2 images are needed, found {found}")]
    NotEnoughImages { found: usize },

    /// Custom mode needs at least two complete pairs
    #[error("At least 2 complete pairs are needed, found {found}")]
    NotEnoughPairs { found: usize },

    /// Operation not available in the current phase
    #[error("Expected phase {expected:?}, game is in {actual:?}")]
    InvalidPhase {
        expected: MemoryPhase,
        actual: MemoryPhase,
    },

    /// Result requested before every pair was found
    #[error("Not every pair has been matched yet")]
    NotCleared,

    #[error("Unknown pair row: {0}")]
    UnknownRow(u64),
}

/// Result type alias for memory game operations
pub type MemoryResult<T> = Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemoryError::NotEnoughPairs { found: 1 };
        assert_eq!(err.to_string(), "At least 2 complete pairs are needed, found 1");

        let err = MemoryError::UnknownRow(9);
        assert_eq!(err.to_string(), "Unknown pair row: 9");
    }
}
