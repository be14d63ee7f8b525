//! Command-line interface for magic_tictactoe.

use clap::{Args, Parser, Subcommand};

/// Magic Tic-Tac-Toe - two players, one magic square
#[derive(Parser, Debug)]
#[command(name = "magic_tictactoe")]
#[command(about = "Two-player tic-tac-toe with magic-square win detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player name overrides shared by every mode.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerNames {
    /// Name of the first player (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (O)
    #[arg(long)]
    pub player_two: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// File that receives the log while the screen is taken over
        #[arg(long, default_value = "magic_tictactoe.log")]
        log_file: std::path::PathBuf,

        #[command(flatten)]
        names: PlayerNames,
    },

    /// Play a scripted list of moves and print the outcome
    Replay {
        /// Whitespace-separated zero-based `row,col` pairs, e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        names: PlayerNames,
    },
}
