//! Two-player tic-tac-toe on a magic-square board.

mod board;
mod controller;
mod observer;
mod position;
pub mod rules;
mod types;

pub use board::{Board, Line, LineKind, Lines, MAGIC_CONSTANT, MAGIC_SQUARE};
pub use controller::{GameController, GameSnapshot, Rejection, RoundOutcome};
pub use observer::{GameObserver, RoundEvent};
pub use position::{Direction, Position};
pub use types::{
    Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameResult, Marker, Player, Seat,
};
