//! Pure N-by-N tic-tac-toe game logic.
//!
//! The crate ships one component: [`GameEngine`], which owns the board,
//! the cyclic turn rotation, and win/tie detection. Rendering and input
//! capture live elsewhere; a presentation layer constructs the engine,
//! submits candidate moves, and reads back state to decide what to show.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Move};
//!
//! let mut game = GameEngine::default();
//! let mv = Move::new(0, 0, game.current_player().label().clone());
//! assert!(game.is_valid_move(&mv));
//! game.apply_move(&mv);
//! assert!(!game.has_winner() && !game.is_tied());
//! game.advance_turn();
//! assert_eq!(game.current_player().label().as_str(), "O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod combos;
mod engine;
mod error;
mod types;

// Crate-level exports - Board and winning lines
pub use board::Board;
pub use combos::WinningCombo;

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use error::EngineError;

// Crate-level exports - Domain values
pub use types::{GameStatus, Label, Mark, Move, Player};
