//! Search engine errors.

use npuzzle_core::MoveError;

/// Errors surfaced by the search engine.
///
/// The engine only applies moves it has already enumerated as legal, so any
/// error here indicates an internal invariant violation rather than bad
/// input; unsolvable boards are reported through
/// [`SolveOutcome::NoSolution`](crate::SolveOutcome::NoSolution), not as
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// Applying an enumerated move failed.
    #[display("internal move error: {_0}")]
    Move(#[from] MoveError),
}
