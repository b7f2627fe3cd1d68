//! The solved board.

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// Error returned when a grid fails the Sudoku constraint.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("duplicate digit {digit} at {position}")]
pub struct GridError {
    /// The digit that appears more than once in a row, column, or block.
    pub digit: Digit,
    /// The second occurrence that triggered the rejection.
    pub position: Position,
}

/// A fully solved 9×9 board.
///
/// Every row, column, and 3×3 block contains each digit exactly once. The
/// constraint is checked on construction, so holding a `SolvedGrid` is proof
/// of validity; the values never change afterwards. It is the ground truth a
/// play session compares user entries against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    rows: [[Digit; 9]; 9],
}

impl SolvedGrid {
    /// Creates a solved grid from row-major digit rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] naming the first duplicate found in a row,
    /// column, or block.
    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Result<Self, GridError> {
        for pos in Position::all() {
            let digit = rows[pos.row() as usize][pos.col() as usize];
            if Self::seen_before(&rows, pos, digit) {
                return Err(GridError {
                    digit,
                    position: pos,
                });
            }
        }
        Ok(Self { rows })
    }

    // Whether `digit` already occurs in the row, column, or block of `pos`
    // at a position strictly before `pos` in row-major order.
    fn seen_before(rows: &[[Digit; 9]; 9], pos: Position, digit: Digit) -> bool {
        let (row, col) = (pos.row() as usize, pos.col() as usize);
        for c in 0..col {
            if rows[row][c] == digit {
                return true;
            }
        }
        for r in 0..row {
            if rows[r][col] == digit {
                return true;
            }
        }
        let origin = pos.block_origin();
        for r in origin.row() as usize..=row.min(origin.row() as usize + 2) {
            for c in origin.col() as usize..origin.col() as usize + 3 {
                if (r, c) < (row, col) && rows[r][c] == digit {
                    return true;
                }
            }
        }
        false
    }

    /// Returns the solved digit at the given position.
    #[must_use]
    pub fn value(&self, pos: Position) -> Digit {
        self.rows[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the digits of a row (0-8) in column order.
    #[must_use]
    pub fn row(&self, row: u8) -> [Digit; 9] {
        self.rows[row as usize]
    }

    /// Returns the digits of a column (0-8) in row order.
    #[must_use]
    pub fn column(&self, col: u8) -> [Digit; 9] {
        std::array::from_fn(|row| self.rows[row][col as usize])
    }

    /// Returns the digits of a 3×3 block (0-8, reading order) in reading
    /// order.
    #[must_use]
    pub fn block(&self, block: u8) -> [Digit; 9] {
        let origin_row = (block / 3 * 3) as usize;
        let origin_col = (block % 3 * 3) as usize;
        std::array::from_fn(|i| self.rows[origin_row + i / 3][origin_col + i % 3])
    }
}
