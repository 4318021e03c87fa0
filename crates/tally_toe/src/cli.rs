//! Command-line interface for tally_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally Toe - pass-the-device tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tally_toe")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply if the default path is missing)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a list of steps and print the resulting state
    Script {
        /// Print the engine snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Steps: a cell index (0-8), `r` to reset the round, `n` for a new match
        #[arg(allow_negative_numbers = true, required = true)]
        steps: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_with_negative_index() {
        let cli = Cli::parse_from(["tally_toe", "script", "--json", "0", "-1", "r"]);
        match cli.command {
            Command::Script { json, steps } => {
                assert!(json);
                assert_eq!(steps, vec!["0", "-1", "r"]);
            }
            Command::Play => panic!("expected script"),
        }
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::parse_from(["tally_toe", "--config", "custom.toml", "play"]);
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
