//! Command-line interface for the scenario runner.

use anyhow::{Context, Result, bail};
use clap::Parser;
use tictactoe_engine::Player;

/// Tic-tac-toe scenario runner: plays rounds from stdin commands
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Play tic-tac-toe rounds from stdin", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (N for an N-by-N grid)
    #[arg(long, default_value = "3")]
    pub board_size: usize,

    /// Players as comma-separated label:color pairs, in turn order
    #[arg(long, default_value = "X:blue,O:red")]
    pub players: String,
}

/// Parses a roster string like `X:blue,O:red` into players in turn order.
pub fn parse_players(roster: &str) -> Result<Vec<Player>> {
    let mut players = Vec::new();
    for entry in roster.split(',') {
        let entry = entry.trim();
        let (label, color) = entry
            .split_once(':')
            .with_context(|| format!("player \"{entry}\" is not a label:color pair"))?;
        if label.is_empty() {
            bail!("player \"{entry}\" has an empty label");
        }
        players.push(Player::new(label, color));
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_roster() {
        let players = parse_players("X:blue,O:red").unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].label().as_str(), "X");
        assert_eq!(players[1].color(), "red");
    }

    #[test]
    fn test_parse_rejects_missing_color() {
        assert!(parse_players("X:blue,O").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_label() {
        assert!(parse_players(":blue,O:red").is_err());
    }
}
