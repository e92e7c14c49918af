use thiserror::Error;

use crate::types::*;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("pool has {have} categories, the board needs {need}")]
    InsufficientPool { have: usize, need: usize },
    #[error("clue {0} is not on the active board")]
    ClueNotFound(ClueId),
    #[error("category {0} does not match the configured clue count")]
    ClueCountMismatch(CategoryId),
    #[error("category {0} appears more than once in the selection")]
    DuplicateCategory(CategoryId),
    #[error("clue {0} appears more than once on the board")]
    DuplicateClue(ClueId),
}

pub type Result<T> = core::result::Result<T, GameError>;
