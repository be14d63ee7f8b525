//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from the
//! controller so they can be checked on their own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{is_winning_line, winner, winning_line};
