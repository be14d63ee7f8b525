//! Scripted play: feed a list of moves to a session and print as it goes.

use crate::config::GameConfig;
use crate::games::tictactoe::{GameController, GameObserver, RoundEvent};
use derive_more::{Display, Error};
use std::io::Write;
use tracing::{info, instrument, warn};

/// A move token that is not a `row,col` pair of unsigned integers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}' (expected row,col) at {}:{}", token, file, line)]
pub struct MoveParseError {
    /// The offending token.
    pub token: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveParseError {
    /// Creates a new parse error for `token`.
    #[track_caller]
    pub fn new(token: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            token: token.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses whitespace-separated `row,col` pairs.
///
/// Coordinates are not range-checked here; the controller ignores
/// moves that are off the board.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<(usize, usize)>, MoveParseError> {
    input
        .split_whitespace()
        .map(|token| -> Result<(usize, usize), MoveParseError> {
            let (row, col) = token.split_once(',').ok_or_else(|| MoveParseError::new(token))?;
            let row = row.trim().parse::<usize>().map_err(|_| MoveParseError::new(token))?;
            let col = col.trim().parse::<usize>().map_err(|_| MoveParseError::new(token))?;
            Ok((row, col))
        })
        .collect()
}

/// Prints each accepted move and the board, the way a console view would.
#[derive(Debug)]
pub struct BoardPrinter<W> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn print_round(&mut self, event: &RoundEvent) -> std::io::Result<()> {
        writeln!(self.out, "{} has made their decision!", event.player().name())?;
        writeln!(self.out, "{}", event.board())?;
        if event.outcome().is_terminal() {
            writeln!(self.out, "Game over after {} moves.", event.round())?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> GameObserver for BoardPrinter<W> {
    fn round_played(&mut self, event: &RoundEvent) {
        if let Err(e) = self.print_round(event) {
            warn!(error = %e, "Failed to print round");
        }
    }

    fn game_reset(&mut self) {
        if let Err(e) = writeln!(self.out, "New game.") {
            warn!(error = %e, "Failed to write reset notice");
        }
    }
}

/// Plays `moves` in order on a session seated from `config`.
#[instrument(skip(config, observer), fields(moves = moves.len()))]
pub fn run_replay(
    config: &GameConfig,
    moves: &[(usize, usize)],
    observer: Option<Box<dyn GameObserver>>,
) -> GameController {
    let mut game = GameController::with_players(config.player_one(), config.player_two());
    if let Some(observer) = observer {
        game.subscribe(observer);
    }

    for &(row, col) in moves {
        let outcome = game.play_round(row, col);
        if !outcome.is_accepted() {
            warn!(row, col, ?outcome, "Move ignored");
        }
    }

    info!(
        rounds = game.round_count(),
        over = game.is_over(),
        result = %game.result_message(),
        "Replay finished"
    );
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("0,0  1,2\n2,1").unwrap(), vec![(0, 0), (1, 2), (2, 1)]);
        assert!(parse_moves("  ").unwrap().is_empty());
        assert_eq!(parse_moves("5,9").unwrap(), vec![(5, 9)]);
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        assert_eq!(parse_moves("0,0 11").unwrap_err().token, "11");
        assert_eq!(parse_moves("a,1").unwrap_err().token, "a,1");
        assert_eq!(parse_moves("-1,0").unwrap_err().token, "-1,0");
    }

    #[test]
    fn test_printer_echoes_each_accepted_move() {
        let buf = SharedBuf::default();
        let game = run_replay(
            &GameConfig::default(),
            &[(0, 0), (0, 0), (1, 1)],
            Some(Box::new(BoardPrinter::new(buf.clone()))),
        );
        assert_eq!(game.round_count(), 2);

        let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert_eq!(text.matches("has made their decision!").count(), 2);
        assert!(text.starts_with("Player One has made their decision!\n8 (x) | 1 ( ) | 6 ( )"));
        assert!(text.contains("Player Two has made their decision!"));
    }

    #[test]
    fn test_replay_reports_game_over() {
        let buf = SharedBuf::default();
        let game = run_replay(
            &GameConfig::default(),
            &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
            Some(Box::new(BoardPrinter::new(buf.clone()))),
        );
        assert!(game.is_over());
        let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert!(text.contains("Game over after 5 moves."));
    }
}
