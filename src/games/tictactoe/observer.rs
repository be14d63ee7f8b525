//! Notification boundary between the controller and a view.

use super::board::Board;
use super::controller::RoundOutcome;
use super::types::Player;
use derive_getters::Getters;
use derive_new::new;

/// An accepted move, as reported to observers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct RoundEvent {
    /// Player who made the move.
    player: Player,
    /// Row of the claimed cell.
    row: usize,
    /// Column of the claimed cell.
    col: usize,
    /// Round number after the move (1-9).
    round: u8,
    /// What the move did to the game.
    outcome: RoundOutcome,
    /// Board after the move.
    board: Board,
}

/// Receives game notifications. Both methods default to doing nothing.
pub trait GameObserver {
    /// Called after each accepted move.
    fn round_played(&mut self, _event: &RoundEvent) {}

    /// Called after the game is reset or new players are seated.
    fn game_reset(&mut self) {}
}
