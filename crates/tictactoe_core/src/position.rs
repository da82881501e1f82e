use std::fmt;

use crate::GameError;

pub const BOARD_SIZE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8, // 0-2, top to bottom
    pub col: u8, // 0-2, left to right
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 1-based label as printed on an empty board.
    pub fn label(self) -> u8 {
        self.row * BOARD_SIZE + self.col + 1
    }

    pub fn from_label(label: u8) -> Option<Self> {
        if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&label) {
            return None;
        }
        let index = label - 1;
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    pub fn is_corner(self) -> bool {
        let edge = |i: u8| i == 0 || i == BOARD_SIZE - 1;
        edge(self.row) && edge(self.col)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = GameError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(GameError::OutOfBounds { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
