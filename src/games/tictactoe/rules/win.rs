//! Win detection by magic-square sums.

use super::super::board::{Line, LineKind, MAGIC_CONSTANT};
use super::super::{Board, Marker};
use tracing::instrument;

/// Whether `marker` owns a set of cells on `line` summing to 15.
pub fn is_winning_line(line: &Line, marker: Marker) -> bool {
    line.sum_for(marker) == MAGIC_CONSTANT
}

/// First line through `(row, col)` completed by `marker`.
///
/// Lines are checked as row, column, primary diagonal, secondary
/// diagonal. Out-of-range coordinates never win.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker, row: usize, col: usize) -> Option<LineKind> {
    let lines = board.lines(row, col)?;
    // Bound before returning so the borrow of `lines` ends inside the span.
    let kind = lines
        .iter()
        .find(|line| is_winning_line(line, marker))
        .map(Line::kind);
    kind
}

/// Scans all eight lines for a completed one.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(Marker, LineKind)> {
    board.all_lines().find_map(|line| {
        [Marker::X, Marker::O]
            .into_iter()
            .find(|m| is_winning_line(&line, *m))
            .map(|m| (m, line.kind()))
    })
}
