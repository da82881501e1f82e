use std::fmt;

use log::trace;

use crate::{outcome, position::BOARD_SIZE, Cell, GameError, Mark, Outcome, Position};

const SIZE: usize = BOARD_SIZE as usize;

/// The 3x3 grid.
///
/// A board is a plain value: `clone()` yields a fully independent copy, which
/// is what move exploration relies on. Turn order is not tracked here; the
/// session decides who may move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty(0); SIZE]; SIZE];
        for pos in Position::all() {
            cells[pos.row as usize][pos.col as usize] = Cell::Empty(pos.label());
        }
        Self { cells }
    }

    /// Builds a board from rows of optional marks, `None` meaning empty.
    pub fn from_rows(rows: [[Option<Mark>; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for pos in Position::all() {
            if let Some(mark) = rows[pos.row as usize][pos.col as usize] {
                board.set(pos, mark);
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.get(pos).mark()
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Marks an empty square, rejecting squares that are off the board or
    /// already taken.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        let pos = Position::try_from((pos.row, pos.col))?;
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        self.set(pos, mark);
        trace!("placed {} at {}", mark, pos);
        Ok(())
    }

    /// Marks a square without checking it. Callers own legality; overwriting
    /// a taken square leaves the board in a state no game can reach.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Taken(mark);
    }

    /// Empties a square again, restoring its label.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty(pos.label());
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    pub fn winner(&self) -> Option<Mark> {
        outcome::winner(self)
    }

    pub fn outcome(&self) -> Outcome {
        outcome::outcome(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
