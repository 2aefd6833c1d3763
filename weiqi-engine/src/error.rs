use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoError {
    Occupied,
    KoViolation,
    Suicide,
    GameOver,
    OutOfTurn,
    NotOnBoard,
}

impl GoError {
    /// True for the illegal-move outcomes of normal play, as opposed to
    /// actions taken at the wrong time or caller mistakes.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GoError::Occupied | GoError::KoViolation | GoError::Suicide
        )
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Occupied => write!(f, "point is occupied"),
            GoError::KoViolation => write!(f, "ko forbids immediate recapture"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::GameOver => write!(f, "game is over"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::NotOnBoard => write!(f, "not on board"),
        }
    }
}

impl std::error::Error for GoError {}
