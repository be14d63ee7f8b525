//! Magic-square board storage.
//!
//! Every row, column and diagonal of [`MAGIC_SQUARE`] sums to
//! [`MAGIC_CONSTANT`], so a line is complete for a player exactly when
//! the values of that player's cells on it add up to 15.

use super::position::Position;
use super::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cell values in row-major order.
pub const MAGIC_SQUARE: [[u8; 3]; 3] = [[8, 1, 6], [3, 5, 7], [4, 9, 2]];

/// Sum shared by every line of [`MAGIC_SQUARE`].
pub const MAGIC_CONSTANT: u8 = 15;

/// Which line of the board a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// A row, by index.
    #[display("row {_0}")]
    Row(usize),
    /// A column, by index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("primary diagonal")]
    PrimaryDiagonal,
    /// Top-right to bottom-left.
    #[display("secondary diagonal")]
    SecondaryDiagonal,
}

impl LineKind {
    /// Coordinates covered by this line.
    pub fn coords(self) -> [(usize, usize); 3] {
        match self {
            LineKind::Row(r) => [(r, 0), (r, 1), (r, 2)],
            LineKind::Column(c) => [(0, c), (1, c), (2, c)],
            LineKind::PrimaryDiagonal => [(0, 0), (1, 1), (2, 2)],
            LineKind::SecondaryDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// Whether every coordinate of this line is inside the 3x3 grid.
    pub fn is_on_board(self) -> bool {
        match self {
            LineKind::Row(i) | LineKind::Column(i) => i <= 2,
            LineKind::PrimaryDiagonal | LineKind::SecondaryDiagonal => true,
        }
    }

    /// Whether this line passes through the given coordinates.
    pub fn contains(self, row: usize, col: usize) -> bool {
        self.coords().contains(&(row, col))
    }
}

/// A snapshot of three cells forming one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: [Cell; 3],
}

impl Line {
    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells, in coordinate order.
    pub fn cells(&self) -> &[Cell; 3] {
        &self.cells
    }

    /// Sum of the values of the cells claimed by `marker`.
    pub fn sum_for(&self, marker: Marker) -> u8 {
        self.cells
            .iter()
            .filter(|cell| cell.is_claimed_by(marker))
            .map(Cell::value)
            .sum()
    }
}

/// Lines passing through one selected cell.
///
/// Diagonals not passing through the cell are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lines {
    /// The selected cell's row.
    pub row: Line,
    /// The selected cell's column.
    pub column: Line,
    /// Present only when `row == col`.
    pub primary_diagonal: Option<Line>,
    /// Present only when `row + col == 2`.
    pub secondary_diagonal: Option<Line>,
}

impl Lines {
    /// Present lines in check order: row, column, primary, secondary.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        [Some(&self.row), Some(&self.column)]
            .into_iter()
            .chain([self.primary_diagonal.as_ref(), self.secondary_diagonal.as_ref()])
            .flatten()
    }
}

/// 3x3 grid of magic-square cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an unclaimed board laid out as [`MAGIC_SQUARE`].
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: MAGIC_SQUARE.map(|row| row.map(Cell::new)),
        }
    }

    /// Cell at the given coordinates, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Cell at a named position.
    pub fn at(&self, pos: Position) -> &Cell {
        &self.cells[pos.row()][pos.col()]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Whether the cell is claimed. Out-of-range coordinates are not.
    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_claimed)
    }

    /// Claims a cell for `marker`.
    ///
    /// Returns `false` and changes nothing when the coordinates are out
    /// of range or the cell is already claimed.
    #[instrument(skip(self))]
    pub fn claim_cell(&mut self, row: usize, col: usize, marker: Marker) -> bool {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            debug!("Coordinates out of range");
            return false;
        };
        let claimed = cell.claim(marker);
        if !claimed {
            debug!(owner = ?cell.claimed_by(), "Cell already claimed");
        }
        claimed
    }

    /// Row, column and any diagonal through the selected cell.
    #[instrument(skip(self))]
    pub fn lines(&self, row: usize, col: usize) -> Option<Lines> {
        if row > 2 || col > 2 {
            return None;
        }
        Some(Lines {
            row: self.read_line(LineKind::Row(row)),
            column: self.read_line(LineKind::Column(col)),
            primary_diagonal: (row == col).then(|| self.read_line(LineKind::PrimaryDiagonal)),
            secondary_diagonal: (row + col == 2)
                .then(|| self.read_line(LineKind::SecondaryDiagonal)),
        })
    }

    /// Reads one line off the board, or `None` for a row or column
    /// index past the edge.
    pub fn line(&self, kind: LineKind) -> Option<Line> {
        kind.is_on_board().then(|| self.read_line(kind))
    }

    // Callers guarantee `kind` is on the board.
    fn read_line(&self, kind: LineKind) -> Line {
        Line {
            kind,
            cells: kind.coords().map(|(r, c)| self.cells[r][c]),
        }
    }

    /// All eight lines: rows, columns, then both diagonals.
    pub fn all_lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..3)
            .map(LineKind::Row)
            .chain((0..3).map(LineKind::Column))
            .chain([LineKind::PrimaryDiagonal, LineKind::SecondaryDiagonal])
            .map(|kind| self.read_line(kind))
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_claimed()).count()
    }

    /// Positions of unclaimed cells.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| !self.at(*pos).is_claimed())
            .collect()
    }

    /// Releases every claimed cell. Values are untouched.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::release);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<String> = row
                .iter()
                .map(|cell| {
                    let mark = cell
                        .claimed_by()
                        .map_or_else(|| " ".to_string(), |m| m.to_string());
                    format!("{} ({})", cell.value(), mark)
                })
                .collect();
            write!(f, "{}", rendered.join(" | "))?;
        }
        Ok(())
    }
}
