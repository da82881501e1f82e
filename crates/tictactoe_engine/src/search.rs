use log::debug;
use rayon::prelude::*;
use tictactoe_core::{Board, Mark, Position};

use crate::evaluation::evaluate;

/// Scores every empty square as O's reply, in row-major order.
///
/// Each candidate is explored on its own copy of the board, so the root
/// branches run in parallel without sharing state.
pub fn score_replies(board: &Board) -> Vec<(Position, i32)> {
    board
        .empty_cells()
        .par_iter()
        .map(|&pos| {
            let mut hypothetical = board.clone();
            hypothetical.set(pos, Mark::O);
            (pos, evaluate(&hypothetical, false))
        })
        .collect()
}

/// O's optimal move and its score, or `None` on a full board.
///
/// Ties go to the first square in row-major order: a later square only
/// replaces the current best when it scores strictly higher.
pub fn search_best_move(board: &Board) -> Option<(Position, i32)> {
    let scored = score_replies(board);
    debug!("root scores: {:?}", scored);

    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in scored {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!("best move {} with score {}", pos, score);
    }
    best
}
