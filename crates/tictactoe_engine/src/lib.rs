pub mod ai;
pub mod difficulty;
pub mod evaluation;
pub mod search;
pub mod session;

pub use ai::select_move;
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use evaluation::evaluate;
pub use search::search_best_move;
pub use session::{GameSession, SessionState};
