//! Solution paths and parent-chain tracing.

use npuzzle_core::{Board, Move};

use crate::node::{NodeArena, NodeId};

/// One state along a solution path, paired with the move that produced it.
///
/// The start state carries no move; every later state carries the move that
/// led to it from the previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    moved: Option<Move>,
    board: Board,
}

impl Step {
    /// The move that produced this state, or `None` for the start state.
    #[must_use]
    pub fn moved(&self) -> Option<Move> {
        self.moved
    }

    /// The board at this point along the path.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }
}

/// An ordered start-to-goal path.
///
/// A solution of length `n` (n moves) holds `n + 1` steps: the start board at
/// depth 0 through the goal board at depth `n`.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Board;
/// use npuzzle_solver::{BfsSolver, SolveOutcome};
///
/// let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]])?;
/// let SolveOutcome::Solved(report) = BfsSolver::shortest().solve(&board)? else {
///     unreachable!("board is solvable");
/// };
///
/// let solution = report.best();
/// assert_eq!(solution.length(), 1);
/// assert_eq!(solution.steps().len(), 2);
/// assert_eq!(solution.steps()[0].board(), board);
/// assert!(solution.steps()[1].board().is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    /// The states from start to goal, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The number of moves in the solution (one less than the step count).
    #[must_use]
    pub fn length(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Returns an iterator over the moves from start to goal.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().filter_map(Step::moved)
    }
}

/// Walks parent links from `terminal` back to the root, then reverses.
///
/// O(depth); only follows indices the engine already built, recomputing no
/// boards.
pub(crate) fn trace(arena: &NodeArena, terminal: NodeId) -> Solution {
    let mut steps = Vec::new();
    let mut current = Some(terminal);
    while let Some(id) = current {
        let node = arena.get(id);
        steps.push(Step {
            moved: node.moved(),
            board: node.board(),
        });
        current = node.parent();
    }
    steps.reverse();
    Solution { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npuzzle_core::Move;

    #[test]
    fn test_trace_of_root_is_single_step() {
        let mut arena = NodeArena::new();
        let root = arena.push_root(Board::SOLVED);
        let solution = trace(&arena, root);
        assert_eq!(solution.length(), 0);
        assert_eq!(solution.steps().len(), 1);
        assert_eq!(solution.steps()[0].board(), Board::SOLVED);
        assert!(solution.steps()[0].moved().is_none());
        assert_eq!(solution.moves().count(), 0);
    }

    #[test]
    fn test_trace_orders_start_to_terminal() {
        let start = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let mid = start.apply(Move::Down).unwrap();
        let end = mid.apply(Move::Right).unwrap();

        let mut arena = NodeArena::new();
        let root = arena.push_root(start);
        let child = arena.push_child(root, Move::Down, mid);
        let terminal = arena.push_child(child, Move::Right, end);

        let solution = trace(&arena, terminal);
        assert_eq!(solution.length(), 2);
        assert_eq!(solution.steps()[0].board(), start);
        assert_eq!(solution.steps()[1].board(), mid);
        assert_eq!(solution.steps()[2].board(), end);
        let moves: Vec<_> = solution.moves().collect();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
    }
}
