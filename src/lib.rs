//! Magic Tic-Tac-Toe library - the game core and its view boundary.
//!
//! Cells carry the values of a 3x3 magic square, so a player has won
//! when their cells on any line sum to 15.
//!
//! # Architecture
//!
//! - **Board**: magic-square grid with single-claim cells
//! - **Player**: a name paired with an `x` or `o` marker
//! - **GameController**: turn order, round count, win/draw detection
//! - **GameObserver**: optional push notifications for a view
//!
//! # Example
//!
//! ```
//! use magic_tictactoe::{GameController, GameResult};
//!
//! let mut game = GameController::with_players("Ada", "Grace");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play_round(row, col);
//! }
//! assert!(game.is_over());
//! assert_eq!(game.result_message(), "Ada has won the game!");
//! assert!(matches!(game.result(), Some(GameResult::Win(_))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Scripted play
pub use replay::{BoardPrinter, MoveParseError, parse_moves, run_replay};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Direction, GameController, GameObserver,
    GameResult, GameSnapshot, Line, LineKind, Lines, MAGIC_CONSTANT, MAGIC_SQUARE, Marker,
    Player, Position, Rejection, RoundEvent, RoundOutcome, Seat,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;
