//! Micro-benchmarks for individual technique scans.
//!
//! Measures the cost of `find_move` for representative techniques on
//! puzzle states where the technique does and does not fire.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench techniques
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deduku_core::{Board, Value, ValueSet};
use deduku_solver::technique::{HiddenSingle, NakedSet, SolvedSquare, Technique as _};

fn empty_board() -> Board {
    Board::from_digits(&[0; 81]).expect("valid shape")
}

fn solved_square_board() -> Board {
    let mut board = empty_board();
    let shape = board.shape();
    let keep = ValueSet::from_elem(Value::new(5));
    let cell = shape.cell_at(4, 4);
    let drop = board.candidates_of(cell).difference(keep);
    board.block_values(cell, drop);
    board
}

fn hidden_single_board() -> Board {
    let mut board = empty_board();
    let shape = board.shape();
    for col in 1..9 {
        board.block_values(shape.cell_at(0, col), ValueSet::from_elem(Value::new(2)));
    }
    board
}

fn naked_set_board() -> Board {
    let mut board = empty_board();
    let shape = board.shape();
    for col in [0, 3] {
        let cell = shape.cell_at(0, col);
        let keep = ValueSet::from_iter([Value::new(4), Value::new(7)]);
        let drop = board.candidates_of(cell).difference(keep);
        board.block_values(cell, drop);
    }
    board
}

fn bench_technique<T: Technique>(c: &mut Criterion, name: &str, technique: &T, boards: &[(&str, Board)]) {
    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new(name, param), board, |b, board| {
            b.iter(|| {
                let view = hint::black_box(board).view();
                let mv = technique.find_move(&view);
                hint::black_box(mv)
            });
        });
    }
}

fn bench_solved_square(c: &mut Criterion) {
    let boards = [
        ("solved_square", solved_square_board()),
        ("empty", empty_board()),
    ];
    bench_technique(c, "solved_square_find", &SolvedSquare::new(), &boards);
}

fn bench_hidden_single(c: &mut Criterion) {
    let boards = [
        ("hidden_single", hidden_single_board()),
        ("empty", empty_board()),
    ];
    bench_technique(c, "hidden_single_find", &HiddenSingle::new(), &boards);
}

fn bench_naked_set(c: &mut Criterion) {
    let boards = [("naked_set", naked_set_board()), ("empty", empty_board())];
    bench_technique(c, "naked_set_find", &NakedSet::new(), &boards);
}

criterion_group!(
    benches,
    bench_solved_square,
    bench_hidden_single,
    bench_naked_set,
);
criterion_main!(benches);
