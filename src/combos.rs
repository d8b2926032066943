//! Winning-line derivation for an N-by-N board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One candidate winning line: exactly N distinct (row, col) pairs
/// forming a full row, a full column, or one of the two diagonals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningCombo(Vec<(usize, usize)>);

impl WinningCombo {
    /// Returns the coordinate pairs of this line.
    pub fn coords(&self) -> &[(usize, usize)] {
        &self.0
    }

    /// Checks whether (row, col) lies on this line.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.0.contains(&(row, col))
    }
}

/// Derives every winning line of an N-by-N board.
///
/// Rows come first, then columns (the transpose of the rows), then the
/// main diagonal and the anti-diagonal: `2 * size + 2` combos in all.
/// The order is stable for the lifetime of an engine.
#[instrument]
pub(crate) fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows: Vec<Vec<(usize, usize)>> = (0..size)
        .map(|row| (0..size).map(|col| (row, col)).collect())
        .collect();
    let columns: Vec<Vec<(usize, usize)>> = (0..size)
        .map(|col| (0..size).map(|row| (row, col)).collect())
        .collect();
    let first_diagonal: Vec<(usize, usize)> = (0..size).map(|i| rows[i][i]).collect();
    let second_diagonal: Vec<(usize, usize)> =
        (0..size).map(|j| columns[size - 1 - j][j]).collect();

    rows.into_iter()
        .chain(columns)
        .chain([first_diagonal, second_diagonal])
        .map(WinningCombo)
        .collect()
}
