//! Engine configuration errors.

use crate::types::Label;
use derive_more::{Display, Error};

/// Errors raised when configuring a game engine.
///
/// These cover construction only. Runtime misuse (out-of-range
/// coordinates, applying an unvalidated move) is a contract violation
/// and panics instead; see the `GameEngine` method docs.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Fewer than two players were supplied.
    #[display("A game needs at least two players, got {_0}")]
    NotEnoughPlayers(#[error(not(source))] usize),

    /// Two players share the same label.
    #[display("Duplicate player label \"{_0}\"")]
    DuplicateLabel(#[error(not(source))] Label),

    /// The board size was zero.
    #[display("Board size must be at least 1")]
    ZeroBoardSize,
}
