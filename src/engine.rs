//! The game engine: move validation, application, rotation, and reset.

use crate::board::Board;
use crate::combos::{WinningCombo, winning_combos};
use crate::error::EngineError;
use crate::types::{GameStatus, Mark, Move, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Tic-tac-toe engine for an N-by-N board and a fixed ordered roster
/// of two or more players.
///
/// The engine owns the board, the turn rotation, and win/tie
/// detection; it never touches presentation concerns. The expected
/// drive loop is:
///
/// 1. build a [`Move`] from [`current_player`](Self::current_player)'s label,
/// 2. check it with [`is_valid_move`](Self::is_valid_move),
/// 3. apply it with [`apply_move`](Self::apply_move),
/// 4. poll [`has_winner`](Self::has_winner) / [`is_tied`](Self::is_tied),
/// 5. if neither, call [`advance_turn`](Self::advance_turn) and repeat.
///
/// `advance_turn` is deliberately not called after a terminal move, so
/// at game end `current_player` is the player who just moved and can
/// be reported as the winner.
///
/// Each game is one engine value; independent games are independent
/// engines with no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    players: Vec<Player>,
    turn: usize,
    board: Board,
    combos: Vec<WinningCombo>,
    winner: Option<usize>,
}

impl GameEngine {
    /// Creates an engine with an empty board, the winning lines derived
    /// from the board geometry, and the first configured player to move.
    ///
    /// # Errors
    ///
    /// Fails on fewer than two players, duplicate player labels, or a
    /// zero board size.
    #[instrument(skip(players))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, EngineError> {
        if players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(players.len()));
        }
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.label().clone()) {
                return Err(EngineError::DuplicateLabel(player.label().clone()));
            }
        }
        if board_size == 0 {
            return Err(EngineError::ZeroBoardSize);
        }

        Ok(Self {
            players,
            turn: 0,
            board: Board::new(board_size),
            combos: winning_combos(board_size),
            winner: None,
        })
    }

    /// Returns the board size N.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, board_size)`.
    pub fn mark(&self, row: usize, col: usize) -> &Mark {
        self.board.mark(row, col)
    }

    /// Returns the configured players in rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player whose move is expected next.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns every winning line of this board, in derivation order.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    /// Checks whether a move may be applied.
    ///
    /// True iff no winner has been declared yet and the target cell is
    /// unoccupied. Turn ownership is NOT checked: callers are expected
    /// to build the move from [`current_player`](Self::current_player)'s
    /// label, and a move constructed otherwise is accepted as-is.
    ///
    /// Pure query, no side effects.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, board_size)`.
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.winner.is_none() && self.board.is_empty(mv.row(), mv.col())
    }

    /// Applies a move the caller has already validated, then scans the
    /// precomputed winning lines.
    ///
    /// The first line whose cells all carry the same non-empty label is
    /// recorded as the winner and the scan stops; if one move completes
    /// several lines, only the first in derivation order is kept.
    ///
    /// # Panics
    ///
    /// Panics if the move carries an empty mark, if
    /// [`is_valid_move`](Self::is_valid_move) would return false, or if
    /// either coordinate is out of range. All three are caller bugs,
    /// not recoverable conditions.
    #[instrument(skip(self, mv), fields(row = mv.row(), col = mv.col()))]
    pub fn apply_move(&mut self, mv: &Move) {
        assert!(
            !mv.mark().is_empty(),
            "apply_move requires a move carrying a player label"
        );
        assert!(
            self.is_valid_move(mv),
            "apply_move called without a passing is_valid_move check"
        );

        debug!(%mv, "mark placed");
        self.board.set(mv.clone());
        self.winner = self.scan_combos();
        if let Some(index) = self.winner {
            debug!(combo = ?self.combos[index].coords(), "winning line completed");
        }
    }

    /// Finds the first combo fully occupied by a single label.
    fn scan_combos(&self) -> Option<usize> {
        for (index, combo) in self.combos.iter().enumerate() {
            let (row, col) = combo.coords()[0];
            let Mark::Taken(first) = self.board.mark(row, col) else {
                continue;
            };
            let monochromatic = combo
                .coords()
                .iter()
                .all(|&(row, col)| self.board.mark(row, col).label() == Some(first));
            if monochromatic {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if a winning line has been completed this round.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns true if the board is full with no winner.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Returns the completed winning line, or an empty slice until a
    /// win is declared.
    pub fn winner_combo(&self) -> &[(usize, usize)] {
        self.winner
            .map(|index| self.combos[index].coords())
            .unwrap_or(&[])
    }

    /// Projects the winner and tie queries into a single status value.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Rotates to the next player in the configured order, cycling
    /// back to the first after the last.
    ///
    /// Callers invoke this only after a non-terminal move; skipping it
    /// at game end leaves the winner as the current player.
    ///
    /// # Panics
    ///
    /// Panics if the round is already won or tied. Rotating past a
    /// terminal outcome would silently replace the winner as the
    /// current player; it is a caller bug, not a recoverable
    /// condition.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        assert!(
            !self.has_winner() && !self.is_tied(),
            "advance_turn called after a terminal outcome"
        );
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Empties every cell and clears the winner, ready for a new round.
    ///
    /// The turn rotation is deliberately left where it is: whoever was
    /// due to move continues, rather than play returning to the first
    /// configured player. Safe to call repeatedly.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.winner = None;
        debug!("board reset");
    }
}

impl Default for GameEngine {
    /// The classic game: X (blue) and O (red) on a 3x3 board.
    fn default() -> Self {
        Self::new(Player::default_pair(), 3).expect("default configuration is valid")
    }
}
