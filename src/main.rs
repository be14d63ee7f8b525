//! Magic Tic-Tac-Toe - Unified CLI
//!
//! Interactive terminal play or scripted replays.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerNames};
use magic_tictactoe::{BoardPrinter, GameConfig, parse_moves, run_replay};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { log_file, names } => {
            // Logs go to a file so they do not corrupt the screen.
            let file = std::fs::File::create(&log_file)
                .with_context(|| format!("Failed to create {}", log_file.display()))?;
            init_tracing(std::sync::Arc::new(file), false);
            let config = load_config(&cli.config, names)?;
            tui::run_tui(&config)
        }
        Command::Replay { moves, json, names } => {
            init_tracing(std::io::stderr, true);
            let config = load_config(&cli.config, names)?;
            replay(&config, &moves, json)
        }
    }
}

fn init_tracing<W>(writer: W, ansi: bool)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .init();
}

fn load_config(path: &Path, names: PlayerNames) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(config.with_player_names(names.player_one, names.player_two))
}

/// Plays the scripted moves and prints the outcome.
#[instrument(skip(config))]
fn replay(config: &GameConfig, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    info!(count = moves.len(), "Moves parsed");

    let printer = (!json).then(|| {
        Box::new(BoardPrinter::new(std::io::stdout())) as Box<dyn magic_tictactoe::GameObserver>
    });
    let game = run_replay(config, &moves, printer);

    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else if game.is_over() {
        println!("{}", game.result_message());
    } else {
        println!(
            "Game in progress after {} moves. {}'s turn.",
            game.round_count(),
            game.current_player().name()
        );
    }
    Ok(())
}
