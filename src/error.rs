//! Engine errors.
//!
//! Every error is local and recoverable: the engine validates an action
//! completely before mutating anything, so a returned error always leaves
//! the Round or Match exactly as it was.

use serde::{Deserialize, Serialize};

/// Which pile an operation needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileKind {
    Draw,
    Discard,
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileKind::Draw => write!(f, "draw"),
            PileKind::Discard => write!(f, "discard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Target slot is out of range, or not in the required face-up/face-down state.
    #[error("invalid position (col {col}, row {row}): {reason}")]
    InvalidPosition {
        col: usize,
        row: usize,
        reason: &'static str,
    },

    #[error("the {0} pile is empty")]
    EmptyPile(PileKind),

    /// The action is not legal in the current phase or for this seat.
    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error("deck has {available} cards but the deal needs {required}")]
    InsufficientCards { required: usize, available: usize },

    /// Draw pile empty and the discard pile has nothing to reshuffle.
    #[error("draw pile exhausted and nothing to reshuffle")]
    DeckExhausted,

    #[error("round did not finish within {0} turns")]
    TurnLimitExceeded(u32),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        EngineError::IllegalAction(message.into())
    }
}
