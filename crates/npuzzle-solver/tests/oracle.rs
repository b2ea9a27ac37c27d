//! Cross-checks against an exhaustive reachability oracle.
//!
//! These tests build the ground truth by breadth-first traversal of the
//! entire solved component (9!/2 = 181,440 boards) and compare it against
//! the parity test and the engine's reported solution lengths.

use std::collections::{HashMap, VecDeque};

use npuzzle_core::Board;
use npuzzle_solver::{BfsSolver, SolveOutcome};

/// True graph distance from every reachable board to the goal, keyed by the
/// canonical board encoding. Moves are involutive, so distances from the
/// goal equal distances to it.
fn distances_from_goal() -> HashMap<u32, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(Board::SOLVED.key().value(), 0);
    queue.push_back(Board::SOLVED);

    while let Some(board) = queue.pop_front() {
        let depth = dist[&board.key().value()];
        for direction in board.legal_moves() {
            let next = board.apply(direction).unwrap();
            let key = next.key().value();
            if !dist.contains_key(&key) {
                dist.insert(key, depth + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Calls `f` with every permutation of 0-8 (Heap's algorithm).
fn for_each_permutation(mut f: impl FnMut(&[u8; 9])) {
    let mut cells: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut counters = [0_usize; 9];
    f(&cells);
    let mut i = 0;
    while i < 9 {
        if counters[i] < i {
            if i % 2 == 0 {
                cells.swap(0, i);
            } else {
                cells.swap(counters[i], i);
            }
            f(&cells);
            counters[i] += 1;
            i = 0;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

#[test]
fn test_goal_component_size_and_diameter() {
    let dist = distances_from_goal();
    assert_eq!(dist.len(), 181_440);
    assert_eq!(dist.values().copied().max(), Some(31));
}

#[test]
fn test_solvability_agrees_with_reachability() {
    let dist = distances_from_goal();
    let mut solvable = 0_usize;
    for_each_permutation(|cells| {
        let board = Board::from_cells(*cells).unwrap();
        let reachable = dist.contains_key(&board.key().value());
        assert_eq!(
            board.is_solvable(),
            reachable,
            "parity test disagrees with reachability for\n{board}"
        );
        if reachable {
            solvable += 1;
        }
    });
    assert_eq!(solvable, 181_440);
}

#[test]
fn test_bfs_length_matches_graph_distance() {
    let dist = distances_from_goal();
    let solver = BfsSolver::shortest();

    // One representative board per sampled depth
    for target_depth in [1, 2, 4, 6, 8, 10, 12, 14] {
        let key = dist
            .iter()
            .find(|&(_, &depth)| depth == target_depth)
            .map(|(&key, _)| key)
            .unwrap();
        let board = board_from_key(key);

        match solver.solve(&board).unwrap() {
            SolveOutcome::Solved(report) => assert_eq!(
                report.length(),
                target_depth,
                "wrong solution length for\n{board}"
            ),
            SolveOutcome::NoSolution(_) => panic!("reachable board reported unsolvable"),
        }
    }
}

/// Unpacks a radix-9 canonical key back into a board.
fn board_from_key(key: u32) -> Board {
    let mut cells = [0_u8; 9];
    let mut rest = key;
    for cell in cells.iter_mut().rev() {
        *cell = u8::try_from(rest % 9).unwrap();
        rest /= 9;
    }
    Board::from_cells(cells).unwrap()
}
