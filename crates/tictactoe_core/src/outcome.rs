use std::fmt;

use crate::{Board, Mark, Position};

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[(u8, u8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Result of a position. Always derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// The mark owning a complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.mark_at(Position { row, col }));
        match a {
            Some(mark) if b == a && c == a => Some(mark),
            _ => None,
        }
    })
}

/// How many complete lines `mark` owns.
pub fn completed_lines(board: &Board, mark: Mark) -> usize {
    LINES
        .into_iter()
        .filter(|line| {
            line.iter()
                .all(|&(row, col)| board.mark_at(Position { row, col }) == Some(mark))
        })
        .count()
}

/// True when every square is marked. Only meaningful once `winner` has come
/// back empty: the last mark on a full board can also complete a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Win(mark)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
