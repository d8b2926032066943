//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};

/// Short identifier marking which player occupies a cell ("X", "O", ...).
///
/// Labels are unique per game: the engine rejects configurations where
/// two players share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct Label(String);

impl Label {
    /// Creates a label from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Content of one board cell: a player's label, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    Empty,
    /// Cell taken by the player with this label.
    Taken(Label),
}

impl Mark {
    /// Returns true if the cell is unoccupied.
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Returns the occupying label, if any.
    pub fn label(&self) -> Option<&Label> {
        match self {
            Mark::Empty => None,
            Mark::Taken(label) => Some(label),
        }
    }
}

/// Player in the game: a unique label plus a display color.
///
/// The color is an opaque tag carried through for the presentation
/// layer; the engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    label: Label,
    color: String,
}

impl Player {
    /// Creates a player.
    pub fn new(label: impl Into<Label>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    /// Returns the player's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns the player's display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The default roster: X in blue moves first, O in red second.
    pub fn default_pair() -> Vec<Player> {
        vec![Player::new("X", "blue"), Player::new("O", "red")]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.color)
    }
}

/// A mark at a zero-based (row, col).
///
/// Board cells are moves too: a freshly initialized cell is a `Move`
/// carrying [`Mark::Empty`] at its own coordinates, and a cell's
/// coordinates never change after setup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
    mark: Mark,
}

impl Move {
    /// Creates a move placing `label` at (row, col).
    pub fn new(row: usize, col: usize, label: impl Into<Label>) -> Self {
        Self {
            row,
            col,
            mark: Mark::Taken(label.into()),
        }
    }

    /// Creates the unoccupied cell value at (row, col).
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            mark: Mark::Empty,
        }
    }

    /// Returns the zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-based column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the mark this move carries.
    pub fn mark(&self) -> &Mark {
        &self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.mark {
            Mark::Empty => write!(f, "({}, {}) empty", self.row, self.col),
            Mark::Taken(label) => write!(f, "{} -> ({}, {})", label, self.row, self.col),
        }
    }
}

/// Current phase of a game round.
///
/// A read-model projection of the engine's winner and tie queries;
/// terminal phases only exit via reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won,
    /// Board is full with no winner.
    Tied,
}
