//! Draw detection for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Number of accepted moves that fills the board.
pub const MAX_ROUNDS: u8 = 9;

/// Checks if every cell is claimed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.claimed_count() == usize::from(MAX_ROUNDS)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Marker;

    fn fill(board: &mut Board, layout: [[Marker; 3]; 3]) {
        for (r, row) in layout.iter().enumerate() {
            for (c, marker) in row.iter().enumerate() {
                board.claim_cell(r, c, *marker);
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        use Marker::{O, X};
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, [[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Marker::{O, X};
        let mut board = Board::new();
        fill(&mut board, [[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
