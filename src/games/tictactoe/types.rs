//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name given to the first player when none is supplied.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";

/// Name given to the second player when none is supplied.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// Symbol identifying which player claimed a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Marker of the first player (moves first).
    #[strum(serialize = "x")]
    X,
    /// Marker of the second player.
    #[strum(serialize = "o")]
    O,
}

/// A single cell of the magic-square board.
///
/// The value is fixed at construction; `claimed_by` goes from `None`
/// to a marker at most once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    value: u8,
    claimed_by: Option<Marker>,
}

impl Cell {
    pub(super) fn new(value: u8) -> Self {
        Self {
            value,
            claimed_by: None,
        }
    }

    /// Magic-square value of this cell (1-9).
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Marker that claimed this cell, if any.
    pub fn claimed_by(&self) -> Option<Marker> {
        self.claimed_by
    }

    /// Whether any player has claimed this cell.
    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }

    /// Whether the given marker claimed this cell.
    pub fn is_claimed_by(&self, marker: Marker) -> bool {
        self.claimed_by == Some(marker)
    }

    pub(super) fn claim(&mut self, marker: Marker) -> bool {
        if self.claimed_by.is_some() {
            return false;
        }
        self.claimed_by = Some(marker);
        true
    }

    pub(super) fn release(&mut self) {
        self.claimed_by = None;
    }
}

/// A named participant paired with a marker. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on claimed cells.
    marker: Marker,
}

impl Player {
    /// Creates a player, trimming the supplied name.
    pub fn new(name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            marker,
        }
    }

    /// Creates a player, falling back to `default` when `name` is blank.
    #[instrument(skip(name))]
    pub fn or_default_name(name: Option<&str>, default: &str, marker: Marker) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Self::new(name, marker),
            _ => Self::new(default, marker),
        }
    }
}

/// Which of the two seats at the table a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The first player, always marker X.
    One,
    /// The second player, always marker O.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Marker fixed to this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::One => Marker::X,
            Seat::Two => Marker::O,
        }
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    /// A player completed a line.
    #[display("{} has won the game!", _0.name())]
    Win(Player),
    /// All nine cells were claimed without a completed line.
    #[display("It's a draw!")]
    Draw,
}

impl GameResult {
    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameResult::Win(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_displays_lowercase() {
        assert_eq!(Marker::X.to_string(), "x");
        assert_eq!(Marker::O.to_string(), "o");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let player = Player::or_default_name(Some("   "), DEFAULT_PLAYER_ONE, Marker::X);
        assert_eq!(player.name(), DEFAULT_PLAYER_ONE);

        let player = Player::or_default_name(Some(" Ada "), DEFAULT_PLAYER_ONE, Marker::X);
        assert_eq!(player.name(), "Ada");
    }

    #[test]
    fn test_cell_claims_once() {
        let mut cell = Cell::new(5);
        assert!(cell.claim(Marker::X));
        assert!(!cell.claim(Marker::O));
        assert_eq!(cell.claimed_by(), Some(Marker::X));
        cell.release();
        assert!(!cell.is_claimed());
        assert_eq!(cell.value(), 5);
    }

    #[test]
    fn test_result_message() {
        let win = GameResult::Win(Player::new("Ada", Marker::X));
        assert_eq!(win.to_string(), "Ada has won the game!");
        assert_eq!(GameResult::Draw.to_string(), "It's a draw!");
    }
}
