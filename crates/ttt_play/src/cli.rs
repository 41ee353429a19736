//! Command-line interface for ttt_play.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_engine::Player;

/// Tic-tac-toe with an exhaustive minimax advisor
#[derive(Parser, Debug)]
#[command(name = "ttt_play")]
#[command(about = "Play tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./ttt.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the advisor in the terminal
    Play {
        /// Side to play (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Show the advisor's suggestion before each of your moves
        #[arg(long)]
        hints: bool,
    },

    /// Let the advisor play both sides
    Selfplay,

    /// Print the advisor's move for a position
    Suggest {
        /// Moves played so far from the empty board, X first (e.g. b2 a1)
        moves: Vec<String>,

        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["ttt_play", "play", "--human", "o", "--hints"]).unwrap();
        match cli.command {
            Command::Play { human, hints } => {
                assert_eq!(human, Some(Player::O));
                assert!(hints);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_suggest_with_global_config() {
        let cli =
            Cli::try_parse_from(["ttt_play", "suggest", "b2", "a1", "--json", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Command::Suggest { moves, json } => {
                assert_eq!(moves, ["b2", "a1"]);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_side() {
        assert!(Cli::try_parse_from(["ttt_play", "play", "--human", "z"]).is_err());
    }
}
