// Core tic-tac-toe game logic modules
pub mod board;
pub mod error;
pub mod mark;
pub mod outcome;
pub mod position;

// Re-export main types for convenience
pub use board::Board;
pub use error::GameError;
pub use mark::{Cell, Mark};
pub use outcome::{completed_lines, is_draw, outcome, winner, Outcome};
pub use position::Position;
