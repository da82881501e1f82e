use log::debug;
use rand::{seq::SliceRandom, Rng};
use tictactoe_core::{Board, Position};

use crate::{search::search_best_move, Difficulty};

/// Chance that a Medium move is played at random instead of optimally.
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

/// Picks O's next square for the given difficulty, or `None` when the board
/// is full. The board is only read.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let chosen = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            // Flipped on every call, so one game can mix both behaviours.
            if rng.gen_bool(MEDIUM_RANDOM_CHANCE) {
                random_move(board, rng)
            } else {
                best_move(board)
            }
        }
        Difficulty::Hard => best_move(board),
    };

    match chosen {
        Some(pos) => debug!("{} ai picked {}", difficulty, pos),
        None => debug!("{} ai found no empty square", difficulty),
    }
    chosen
}

pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_cells().choose(rng).copied()
}

pub fn best_move(board: &Board) -> Option<Position> {
    search_best_move(board).map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use tictactoe_core::Mark;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn every_difficulty_reports_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            assert_eq!(select_move(&board, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn easy_picks_the_only_square() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_move(&board, Difficulty::Easy, &mut rng),
            Some(Position { row: 2, col: 2 })
        );
    }

    #[test]
    fn easy_covers_every_empty_square() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn hard_answers_center_with_first_corner() {
        let board = Board::from_rows([[E, E, E], [E, X, E], [E, E, E]]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_move(&board, Difficulty::Hard, &mut rng),
            Some(Position { row: 0, col: 0 })
        );
    }
}
