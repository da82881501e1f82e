use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("square {0} is already marked")]
    CellOccupied(Position),

    #[error("board has {x} X marks and {o} O marks, which no legal game reaches")]
    InconsistentBoard { x: usize, o: usize },
}
