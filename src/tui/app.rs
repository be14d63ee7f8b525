//! Application state for the terminal view.

use super::input::Action;
use magic_tictactoe::GameConfig;
use magic_tictactoe::{GameController, Position, RoundOutcome};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Terminal view state wrapped around one game session.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    reset_delay: Duration,
    over_since: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates the view and seats players from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: GameController::with_players(config.player_one(), config.player_two()),
            cursor: Position::Center,
            reset_delay: Duration::from_millis(*config.reset_delay_ms()),
            over_since: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the reset prompt is showing.
    pub fn reset_available(&self) -> bool {
        self.over_since
            .is_some_and(|since| since.elapsed() >= self.reset_delay)
    }

    /// Applies one key action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::MoveCursor(direction) => self.cursor = self.cursor.step(direction),
            Action::PlayCursor => self.play(self.cursor),
            Action::PlayAt(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Reset if self.reset_available() => {
                self.game.reset_game();
                self.over_since = None;
                self.cursor = Position::Center;
            }
            Action::Reset => debug!("Reset not offered yet"),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.game.play_round(pos.row(), pos.col());
        if outcome.is_terminal() {
            self.over_since = Some(Instant::now());
        }
        if let RoundOutcome::Ignored(reason) = outcome {
            debug!(%reason, position = %pos, "Move ignored");
        }
    }

    /// Text for the status bar.
    pub fn status_message(&self) -> String {
        if self.game.is_over() {
            if self.reset_available() {
                format!("{} Press 'r' to play again.", self.game.result_message())
            } else {
                self.game.result_message()
            }
        } else {
            let player = self.game.current_player();
            format!("{}'s turn ({})", player.name(), player.marker())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_tictactoe::Direction;

    fn app_with_delay(ms: u64) -> App {
        let config: GameConfig =
            toml::from_str(&format!("player_one = \"Ada\"\nreset_delay_ms = {ms}")).unwrap();
        App::new(&config)
    }

    #[test]
    fn test_cursor_play_and_status() {
        let mut app = app_with_delay(0);
        assert_eq!(app.status_message(), "Ada's turn (x)");
        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::PlayCursor);
        assert!(app.game().board().at(Position::TopCenter).is_claimed());
        assert_eq!(app.status_message(), "Player Two's turn (o)");
    }

    #[test]
    fn test_reset_waits_for_prompt() {
        let mut app = app_with_delay(60_000);
        for pos in [1, 4, 2, 5, 3] {
            app.handle(Action::PlayAt(Position::from_index(pos - 1).unwrap()));
        }
        assert!(app.game().is_over());
        assert!(!app.reset_available());
        app.handle(Action::Reset);
        assert!(app.game().is_over());
        assert_eq!(app.status_message(), "Ada has won the game!");
    }

    #[test]
    fn test_reset_after_prompt() {
        let mut app = app_with_delay(0);
        for pos in [1, 4, 2, 5, 3] {
            app.handle(Action::PlayAt(Position::from_index(pos - 1).unwrap()));
        }
        assert!(app.reset_available());
        assert!(app.status_message().ends_with("Press 'r' to play again."));
        app.handle(Action::Reset);
        assert!(!app.game().is_over());
        assert_eq!(app.game().round_count(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with_delay(0);
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
