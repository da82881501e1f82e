//! Screen geometry for the board.
//!
//! Window coordinates have their origin in the top-left corner with y growing
//! downwards (what `Window::cursor_position` reports). World coordinates are
//! centred on the window with y growing upwards (the default 2D camera).

use bevy::math::Vec2;
use tictactoe_core::{position::BOARD_SIZE, Position};

const CELLS: f32 = BOARD_SIZE as f32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub width: f32,
    pub height: f32,
}

impl BoardLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Side of one square. The board is the largest square fitting the window.
    pub fn square_size(&self) -> f32 {
        self.width.min(self.height) / CELLS
    }

    fn board_size(&self) -> f32 {
        self.square_size() * CELLS
    }

    /// Top-left corner of the board in window coordinates.
    fn origin(&self) -> Vec2 {
        Vec2::new(
            (self.width - self.board_size()) / 2.0,
            (self.height - self.board_size()) / 2.0,
        )
    }

    /// The square under a cursor position, if the cursor is on the board.
    pub fn cell_at(&self, cursor: Vec2) -> Option<Position> {
        let square = self.square_size();
        if square <= 0.0 {
            return None;
        }
        let local = cursor - self.origin();
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = (local.x / square).floor();
        let row = (local.y / square).floor();
        if col >= CELLS || row >= CELLS {
            return None;
        }
        Position::new(row as u8, col as u8)
    }

    /// Centre of a square in world coordinates.
    pub fn cell_center(&self, pos: Position) -> Vec2 {
        let square = self.square_size();
        let window = self.origin()
            + Vec2::new(
                (pos.col as f32 + 0.5) * square,
                (pos.row as f32 + 0.5) * square,
            );
        self.to_world(window)
    }

    /// Endpoints of the inner grid lines in world coordinates.
    pub fn grid_lines(&self) -> Vec<(Vec2, Vec2)> {
        let square = self.square_size();
        let size = self.board_size();
        let origin = self.origin();
        (1..BOARD_SIZE)
            .flat_map(|i| {
                let offset = i as f32 * square;
                [
                    (
                        origin + Vec2::new(0.0, offset),
                        origin + Vec2::new(size, offset),
                    ),
                    (
                        origin + Vec2::new(offset, 0.0),
                        origin + Vec2::new(offset, size),
                    ),
                ]
            })
            .map(|(start, end)| (self.to_world(start), self.to_world(end)))
            .collect()
    }

    fn to_world(&self, window: Vec2) -> Vec2 {
        Vec2::new(window.x - self.width / 2.0, self.height / 2.0 - window.y)
    }
}
