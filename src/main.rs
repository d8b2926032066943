//! Scenario runner: drives a [`GameEngine`] from stdin commands.
//!
//! This is the thin terminal stand-in for a presentation layer. It
//! builds each move from the current player's label, validates it,
//! applies it, and branches on tie/win/continue.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead};
use tictactoe_engine::{GameEngine, Move};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let players = cli::parse_players(&cli.players)?;
    let mut game = GameEngine::new(players, cli.board_size)?;

    println!("Ready? Player \"{}\" starts!", game.current_player().label());
    println!("Enter ROW COL to play, \"reset\" for a new round, \"quit\" to exit.");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "reset" => {
                game.reset();
                println!("Ready? Player \"{}\" starts!", game.current_player().label());
            }
            command => play(&mut game, command),
        }
    }

    Ok(())
}

/// Handles one candidate move: validate, apply, report the outcome.
fn play(game: &mut GameEngine, command: &str) {
    let Some((row, col)) = parse_coords(command, game.board_size()) else {
        println!("Expected ROW COL within 0..{}", game.board_size());
        return;
    };

    let mv = Move::new(row, col, game.current_player().label().clone());
    if !game.is_valid_move(&mv) {
        println!("Can't play at ({row}, {col})");
        return;
    }
    game.apply_move(&mv);
    println!("{}", game.board().display());

    if game.is_tied() {
        info!(status = %game.status(), "round over");
        println!("Tied game! Enter \"reset\" to play again.");
    } else if game.has_winner() {
        let winner = game.current_player();
        info!(status = %game.status(), winner = %winner.label(), "round over");
        println!(
            "Player \"{}\" won on {:?}! Enter \"reset\" to play again.",
            winner.label(),
            game.winner_combo()
        );
    } else {
        game.advance_turn();
        println!("{}'s turn", game.current_player().label());
    }
}

/// Parses `ROW COL` and bounds-checks it against the board.
fn parse_coords(command: &str, size: usize) -> Option<(usize, usize)> {
    let mut parts = command.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row >= size || col >= size {
        return None;
    }
    Some((row, col))
}
