use std::fmt;

/// A player's mark. The human always plays `X` and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const HUMAN: Mark = Mark::X;
    pub const AI: Mark = Mark::O;

    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single square.
///
/// Empty squares keep their 1-based label (`row * 3 + col + 1`) so a board can
/// be printed the way players number the grid. The label is cosmetic: game
/// logic only ever asks whether a cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty(u8),
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty(_))
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Taken(mark) => Some(mark),
            Cell::Empty(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty(label) => write!(f, "{}", label),
            Cell::Taken(mark) => write!(f, "{}", mark),
        }
    }
}
