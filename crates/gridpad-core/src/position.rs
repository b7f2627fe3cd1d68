//! Board coordinates and cell identity.
//!
//! Two addressing schemes coexist on the board. [`Position`] is the
//! row/column coordinate the constraint logic works in. [`CellId`] is the
//! linear 1-81 identity the dashboard layout hands out, which enumerates
//! cells block by block (all nine cells of the top-left block first, then the
//! top-middle block, and so on). The arithmetic between the two is fixed and
//! total, so conversions never fail.

use std::fmt::{self, Display};

/// A board coordinate: row and column in 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range: ({row}, {col})");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the top-left corner of the 3×3 block containing this position.
    #[must_use]
    pub fn block_origin(self) -> Self {
        Self {
            row: self.row / 3 * 3,
            col: self.col / 3 * 3,
        }
    }

    /// Iterates over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self { row, col }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

/// A linear cell identity in 1-81, laid out block-major.
///
/// Identity attributes (block row, block column, position within the block)
/// are derived from the id by fixed arithmetic and never change.
///
/// # Examples
///
/// ```
/// use gridpad_core::{CellId, Position};
///
/// // Cell 10 is the first cell of the top-middle block.
/// let id = CellId::new(10).unwrap();
/// assert_eq!(id.position(), Position::new(0, 3));
/// assert_eq!(id.block_row(), 1);
/// assert_eq!(id.block_col(), 2);
/// assert_eq!(id.block_cell(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u8);

impl CellId {
    /// Creates a cell id from a value in 1-81, or `None` if out of range.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id <= 81 { Some(Self(id)) } else { None }
    }

    /// Returns the raw id (1-81).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the 1-based row of the block containing this cell (1-3).
    #[must_use]
    pub const fn block_row(self) -> u8 {
        (self.0 - 1) / 9 / 3 + 1
    }

    /// Returns the 1-based column of the block containing this cell (1-3).
    #[must_use]
    pub const fn block_col(self) -> u8 {
        (self.0 - 1) / 9 % 3 + 1
    }

    /// Returns the 1-based position of this cell within its block (1-9).
    #[must_use]
    pub const fn block_cell(self) -> u8 {
        (self.0 - 1) % 9 + 1
    }

    /// Returns the board coordinate of this cell.
    #[must_use]
    pub fn position(self) -> Position {
        let index = self.0 - 1;
        let block = index / 9;
        let cell = index % 9;
        Position::new(block / 3 * 3 + cell / 3, block % 3 * 3 + cell % 3)
    }

    /// Returns the cell id addressing the given board coordinate.
    #[must_use]
    pub fn from_position(pos: Position) -> Self {
        let block = pos.row() / 3 * 3 + pos.col() / 3;
        let cell = pos.row() % 3 * 3 + pos.col() % 3;
        Self(block * 9 + cell + 1)
    }

    /// Iterates over all 81 cell ids in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=81).map(Self)
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
