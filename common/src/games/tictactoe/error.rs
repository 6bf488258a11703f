use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    CellOccupied,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove(IllegalMoveReason),
    IndexOutOfRange { index: usize, len: usize },
    NoLegalMoves,
    InvalidState(&'static str),
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::CellOccupied => write!(f, "cell is already marked"),
            IllegalMoveReason::GameOver => write!(f, "game is already over"),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(reason) => write!(f, "Illegal move: {}", reason),
            GameError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range (expected below {})", index, len)
            }
            GameError::NoLegalMoves => write!(f, "No legal moves in this position"),
            GameError::InvalidState(what) => write!(f, "Invalid state: {}", what),
        }
    }
}

impl std::error::Error for GameError {}
