use tictactoe_core::{outcome, Board, Mark};

// Scores are always from O's point of view: O maximizes, X minimizes.
pub const O_WINS: i32 = 1;
pub const X_WINS: i32 = -1;
pub const DRAW: i32 = 0;

/// Exhaustive minimax value of `board`.
///
/// `maximizing` says whose turn it is: `true` for O, `false` for X. The search
/// runs to the end of the game with no pruning, caching or depth limit; the
/// whole game tree has fewer than 550k nodes. The caller's board is never
/// touched.
pub fn evaluate(board: &Board, maximizing: bool) -> i32 {
    let mut scratch = board.clone();
    minimax(&mut scratch, maximizing)
}

// Place, recurse, clear: the board is identical after each branch returns.
fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let (mark, mut best) = if maximizing {
        (Mark::O, i32::MIN)
    } else {
        (Mark::X, i32::MAX)
    };

    for pos in board.empty_cells() {
        board.set(pos, mark);
        let score = minimax(board, !maximizing);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn terminal_score(board: &Board) -> Option<i32> {
    match outcome::winner(board) {
        Some(Mark::O) => Some(O_WINS),
        Some(Mark::X) => Some(X_WINS),
        None if outcome::is_draw(board) => Some(DRAW),
        None => None,
    }
}
