//! Benchmarks for the BFS engine.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use npuzzle_core::Board;
use npuzzle_solver::BfsSolver;

fn bench_shortest(c: &mut Criterion) {
    let easy = Board::from_rows([[4, 1, 3], [7, 2, 5], [0, 8, 6]]).unwrap();
    // One of the two boards at the state graph's 31-move diameter
    let hard = Board::from_rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap();

    let solver = BfsSolver::shortest();
    c.bench_function("shortest_easy_board", |b| {
        b.iter(|| solver.solve(black_box(&easy)));
    });
    c.bench_function("shortest_diameter_board", |b| {
        b.iter(|| solver.solve(black_box(&hard)));
    });
}

fn bench_all_shortest(c: &mut Criterion) {
    let board = Board::from_rows([[0, 4, 3], [2, 5, 6], [7, 8, 1]]).unwrap();

    let solver = BfsSolver::all_shortest();
    c.bench_function("all_shortest_symmetric_board", |b| {
        b.iter(|| solver.solve(black_box(&board)));
    });
}

criterion_group!(benches, bench_shortest, bench_all_shortest);
criterion_main!(benches);
