//! The BFS search engine.

use std::collections::{HashSet, VecDeque};

use npuzzle_core::{Board, BoardKey};

use crate::{
    error::SolverError,
    node::{NodeArena, NodeId},
    trace::{self, Solution},
};

/// Which solutions a solve call collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Stop at the first goal reached; BFS guarantees it is shortest.
    #[default]
    Shortest,
    /// Keep draining the frontier that produced the first goal, collecting
    /// every minimum-depth solution plus a capped list of all solutions
    /// discovered.
    AllShortest,
}

/// Tuning for a [`BfsSolver`].
///
/// # Examples
///
/// ```
/// use npuzzle_solver::{SearchConfig, SearchMode};
///
/// let config = SearchConfig::new(SearchMode::AllShortest);
/// assert_eq!(config.depth_ceiling, SearchConfig::DEPTH_CEILING);
/// assert_eq!(config.solution_cap, SearchConfig::SOLUTION_CAP);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// The search mode.
    pub mode: SearchMode,
    /// Nodes at this depth are never expanded. The default is the diameter
    /// of the 8-puzzle state graph, so no shortest solution is ever
    /// discarded; the ceiling only bounds exploration of an unreachable
    /// component when the solvability gate is bypassed.
    pub depth_ceiling: u8,
    /// Maximum number of solutions retained in the discovered list
    /// (all-shortest mode).
    pub solution_cap: usize,
}

impl SearchConfig {
    /// Default depth ceiling: the 8-puzzle state graph's diameter.
    pub const DEPTH_CEILING: u8 = 31;

    /// Default cap on the discovered-solutions list.
    pub const SOLUTION_CAP: usize = 10;

    /// Creates a config for the given mode with default limits.
    #[must_use]
    pub const fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            depth_ceiling: Self::DEPTH_CEILING,
            solution_cap: Self::SOLUTION_CAP,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(SearchMode::default())
    }
}

/// Counters collected during one solve call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes whose children were generated.
    pub expanded: usize,
    /// Number of nodes added to the frontier (excluding the start node).
    pub enqueued: usize,
    /// Deepest node created.
    pub max_depth: u8,
}

/// The result of a solve call.
///
/// An unsolvable board is a defined outcome, not an error: the engine
/// reports it as [`NoSolution`](Self::NoSolution) after exhausting the
/// start board's reachable component (or hitting the depth ceiling).
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// At least one solution was found.
    Solved(SolveReport),
    /// The goal is unreachable from the start board.
    NoSolution(SearchStats),
}

/// The solutions found by a successful solve call.
#[derive(Debug, Clone)]
pub struct SolveReport {
    shortest: Vec<Solution>,
    discovered: Vec<Solution>,
    stats: SearchStats,
}

impl SolveReport {
    fn single(solution: Solution, stats: SearchStats) -> Self {
        Self {
            shortest: vec![solution.clone()],
            discovered: vec![solution],
            stats,
        }
    }

    /// The first shortest solution found.
    #[must_use]
    pub fn best(&self) -> &Solution {
        &self.shortest[0]
    }

    /// Every minimum-depth solution found, in discovery order.
    ///
    /// In [`SearchMode::Shortest`] this holds exactly one solution.
    #[must_use]
    pub fn shortest(&self) -> &[Solution] {
        &self.shortest
    }

    /// The solutions discovered, ordered by length ascending and capped at
    /// [`SearchConfig::solution_cap`].
    #[must_use]
    pub fn discovered(&self) -> &[Solution] {
        &self.discovered
    }

    /// Counters from the search that produced this report.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The shortest solution length in moves.
    #[must_use]
    pub fn length(&self) -> usize {
        self.best().length()
    }
}

/// Breadth-first solver over the 8-puzzle state space.
///
/// Each solve call owns its own queue, visited set, and node arena; nothing
/// is shared across calls. Children are expanded in the canonical move order
/// Up, Down, Left, Right, so results are deterministic.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Board;
/// use npuzzle_solver::{BfsSolver, SolveOutcome};
///
/// let solver = BfsSolver::shortest();
/// let SolveOutcome::Solved(report) = solver.solve(&Board::SOLVED)? else {
///     unreachable!("the solved board solves trivially");
/// };
/// assert_eq!(report.length(), 0);
/// # Ok::<(), npuzzle_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver {
    config: SearchConfig,
}

impl BfsSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates a single-shortest solver with default limits.
    #[must_use]
    pub const fn shortest() -> Self {
        Self::new(SearchConfig::new(SearchMode::Shortest))
    }

    /// Creates an all-shortest solver with default limits.
    #[must_use]
    pub const fn all_shortest() -> Self {
        Self::new(SearchConfig::new(SearchMode::AllShortest))
    }

    /// Returns the solver's configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches for shortest solutions from `start`.
    ///
    /// The engine does not pre-check solvability; see
    /// [`Board::is_solvable`](npuzzle_core::Board::is_solvable) for the
    /// parity gate. An unreachable start terminates with
    /// [`SolveOutcome::NoSolution`] once its component is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the engine applies a move its own
    /// legality check should have filtered out; this cannot happen short of
    /// an internal bug.
    pub fn solve(&self, start: &Board) -> Result<SolveOutcome, SolverError> {
        let mut arena = NodeArena::new();
        let root = arena.push_root(*start);
        let mut stats = SearchStats::default();

        // A solved start never enters the queue.
        if start.is_solved() {
            let solution = trace::trace(&arena, root);
            return Ok(SolveOutcome::Solved(SolveReport::single(solution, stats)));
        }

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        let mut visited: HashSet<BoardKey> = HashSet::new();
        visited.insert(start.key());
        queue.push_back(root);

        match self.config.mode {
            SearchMode::Shortest => {
                self.run_shortest(&mut arena, &mut queue, &mut visited, &mut stats)
            }
            SearchMode::AllShortest => {
                self.run_all_shortest(&mut arena, &mut queue, &mut visited, &mut stats)
            }
        }
    }

    fn run_shortest(
        &self,
        arena: &mut NodeArena,
        queue: &mut VecDeque<NodeId>,
        visited: &mut HashSet<BoardKey>,
        stats: &mut SearchStats,
    ) -> Result<SolveOutcome, SolverError> {
        while let Some(id) = queue.pop_front() {
            let node = *arena.get(id);
            if node.board().is_solved() {
                let solution = trace::trace(arena, id);
                return Ok(SolveOutcome::Solved(SolveReport::single(solution, *stats)));
            }
            if node.depth() >= self.config.depth_ceiling {
                continue;
            }
            stats.expanded += 1;
            for direction in node.board().legal_moves() {
                let next = node.board().apply(direction)?;
                if !visited.insert(next.key()) {
                    continue;
                }
                let child = arena.push_child(id, direction, next);
                stats.enqueued += 1;
                stats.max_depth = stats.max_depth.max(arena.get(child).depth());
                queue.push_back(child);
            }
        }
        Ok(SolveOutcome::NoSolution(*stats))
    }

    fn run_all_shortest(
        &self,
        arena: &mut NodeArena,
        queue: &mut VecDeque<NodeId>,
        visited: &mut HashSet<BoardKey>,
        stats: &mut SearchStats,
    ) -> Result<SolveOutcome, SolverError> {
        let mut goal_depth: Option<u8> = None;
        let mut found: Vec<Solution> = Vec::new();

        while let Some(id) = queue.pop_front() {
            let node = *arena.get(id);
            // Once a goal is known, expansion stops at its depth: deeper
            // frontiers cannot contain a shorter solution.
            let ceiling = goal_depth.map_or(self.config.depth_ceiling, |depth| {
                depth.min(self.config.depth_ceiling)
            });
            if node.depth() >= ceiling {
                continue;
            }
            stats.expanded += 1;
            for direction in node.board().legal_moves() {
                let next = node.board().apply(direction)?;
                if next.is_solved() {
                    // Goal nodes are recorded but never expanded or marked
                    // visited, so each distinct predecessor of the goal
                    // contributes its own trace.
                    let child = arena.push_child(id, direction, next);
                    let depth = arena.get(child).depth();
                    stats.max_depth = stats.max_depth.max(depth);
                    if goal_depth.is_none() {
                        goal_depth = Some(depth);
                    }
                    found.push(trace::trace(arena, child));
                    continue;
                }
                if !visited.insert(next.key()) {
                    continue;
                }
                let child = arena.push_child(id, direction, next);
                stats.enqueued += 1;
                stats.max_depth = stats.max_depth.max(arena.get(child).depth());
                queue.push_back(child);
            }
        }

        if found.is_empty() {
            return Ok(SolveOutcome::NoSolution(*stats));
        }

        let min_length = found.iter().map(Solution::length).min().unwrap_or(0);
        let shortest: Vec<Solution> = found
            .iter()
            .filter(|solution| solution.length() == min_length)
            .cloned()
            .collect();
        let mut discovered = found;
        // Stable sort keeps discovery order within a length group.
        discovered.sort_by_key(Solution::length);
        discovered.truncate(self.config.solution_cap);

        Ok(SolveOutcome::Solved(SolveReport {
            shortest,
            discovered,
            stats: *stats,
        }))
    }
}
