use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use tictactoe_core::{Board, Mark, Position};
use tictactoe_engine::{evaluate, search_best_move, select_move, Difficulty};

fn center_opening() -> Board {
    let mut board = Board::new();
    board.set(Position { row: 1, col: 1 }, Mark::X);
    board
}

fn mid_game() -> Board {
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    Board::from_rows([[x, None, None], [None, o, None], [None, None, x]])
}

fn hard_vs_hard_game() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mut mark = Mark::X;
    while !board.outcome().is_terminal() {
        // The selector always plays O, so mirror the board for X's turns.
        let pos = if mark == Mark::O {
            select_move(&board, Difficulty::Hard, &mut rng)
        } else {
            select_move(&mirrored(&board), Difficulty::Hard, &mut rng)
        };
        match pos {
            Some(pos) => board.set(pos, mark),
            None => break,
        }
        mark = mark.opponent();
    }
}

fn mirrored(board: &Board) -> Board {
    let mut swapped = Board::new();
    for pos in Position::all() {
        if let Some(mark) = board.mark_at(pos) {
            swapped.set(pos, mark.opponent());
        }
    }
    swapped
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("evaluate_empty", |b| {
        b.iter(|| evaluate(black_box(&Board::new()), false))
    });

    group.bench_function("best_move_center_opening", |b| {
        let board = center_opening();
        b.iter(|| search_best_move(black_box(&board)))
    });

    group.bench_function("best_move_mid_game", |b| {
        let board = mid_game();
        b.iter(|| search_best_move(black_box(&board)))
    });

    group.bench_function("hard_vs_hard_game", |b| b.iter(hard_vs_hard_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
