//! Solved-board generation by randomized backtracking.

use gridpad_core::{Digit, SolvedGrid};
use log::debug;
use rand::{Rng, seq::SliceRandom as _};

/// Generates fully solved boards from a caller-supplied randomness source.
///
/// The fill walks the board in row-major order. At every cell it tries the
/// digits 1-9 in a freshly shuffled order, places the first digit that does
/// not repeat in the cell's row, column, or block, and recurses; when no
/// digit fits, it clears the cell and backtracks to the previous one. A
/// standard 9×9 board always fills eventually, so [`generate`] returns a
/// valid [`SolvedGrid`] on every call.
///
/// [`generate`]: BoardGenerator::generate
///
/// # Examples
///
/// ```
/// use gridpad_generator::{BoardGenerator, PuzzleSeed};
///
/// let seed = PuzzleSeed::from_bytes([1; 32]);
/// let mut generator = BoardGenerator::new(seed.stream("board"));
/// let a = generator.generate();
///
/// let mut generator = BoardGenerator::new(seed.stream("board"));
/// let b = generator.generate();
/// assert_eq!(a, b); // same stream, same board
/// ```
#[derive(Debug)]
pub struct BoardGenerator<R> {
    rng: R,
}

impl<R: Rng> BoardGenerator<R> {
    /// Creates a generator drawing from the given randomness source.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a fully solved board.
    pub fn generate(&mut self) -> SolvedGrid {
        let mut cells = [[None; 9]; 9];
        let complete = self.fill_from(&mut cells, 0, 0);
        debug_assert!(complete, "backtracking fill exhausted a 9x9 board");
        debug!("generated solved board");

        let rows = cells.map(|row| {
            row.map(|cell| match cell {
                Some(digit) => digit,
                None => unreachable!("fill left a blank cell"),
            })
        });
        match SolvedGrid::from_rows(rows) {
            Ok(grid) => grid,
            Err(_) => unreachable!("fill enforces the row/column/block constraint"),
        }
    }

    // Fills cells from (row, col) onward; false triggers backtracking in
    // the caller.
    fn fill_from(&mut self, cells: &mut [[Option<Digit>; 9]; 9], row: usize, col: usize) -> bool {
        if row == 9 {
            return true;
        }
        if col == 9 {
            return self.fill_from(cells, row + 1, 0);
        }

        let mut candidates = Digit::ALL;
        candidates.shuffle(&mut self.rng);

        for digit in candidates {
            if Self::fits(cells, row, col, digit) {
                cells[row][col] = Some(digit);
                if self.fill_from(cells, row, col + 1) {
                    return true;
                }
                cells[row][col] = None;
            }
        }
        false
    }

    // Whether `digit` can be placed at (row, col) without repeating in its
    // row, column, or 3x3 block.
    fn fits(cells: &[[Option<Digit>; 9]; 9], row: usize, col: usize, digit: Digit) -> bool {
        if cells[row].contains(&Some(digit)) {
            return false;
        }
        if cells.iter().any(|r| r[col] == Some(digit)) {
            return false;
        }
        let (block_row, block_col) = (row / 3 * 3, col / 3 * 3);
        for r in block_row..block_row + 3 {
            for c in block_col..block_col + 3 {
                if cells[r][c] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::PuzzleSeed;

    use super::*;

    fn generate(seed_byte: u8) -> SolvedGrid {
        let seed = PuzzleSeed::from_bytes([seed_byte; 32]);
        BoardGenerator::new(seed.stream("board")).generate()
    }

    #[test]
    fn test_every_house_is_a_permutation() {
        let grid = generate(42);
        for i in 0..9 {
            for house in [grid.row(i), grid.column(i), grid.block(i)] {
                let mut values: Vec<_> = house.iter().map(|d| d.value()).collect();
                values.sort_unstable();
                assert_eq!(values, (1..=9).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_same_stream_is_deterministic() {
        assert_eq!(generate(3), generate(3));
    }

    #[test]
    fn test_different_seeds_give_different_boards() {
        // Two seeds colliding on all 81 cells would be astronomically
        // unlikely; a collision here means the rng is not being consumed.
        assert_ne!(generate(1), generate(2));
    }
}
