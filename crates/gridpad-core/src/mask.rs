//! The clue-visibility mask.

use crate::Position;

/// A 9×9 boolean mask selecting which cells start as visible clues.
///
/// `true` marks a pre-filled clue, `false` a blank, user-fillable cell. The
/// mask is chosen from positions alone and carries no digit values; it is
/// conceptually paired with one [`SolvedGrid`](crate::SolvedGrid) for the
/// lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueMask {
    cells: [[bool; 9]; 9],
}

impl ClueMask {
    /// Creates a mask from row-major visibility flags.
    #[must_use]
    pub const fn from_rows(cells: [[bool; 9]; 9]) -> Self {
        Self { cells }
    }

    /// Creates a mask with the given positions visible as clues.
    #[must_use]
    pub fn from_clues(clues: &[Position]) -> Self {
        let mut cells = [[false; 9]; 9];
        for pos in clues {
            cells[pos.row() as usize][pos.col() as usize] = true;
        }
        Self { cells }
    }

    /// Returns whether the cell at the given position is a clue.
    #[must_use]
    pub fn is_clue(&self, pos: Position) -> bool {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the number of clue cells in the mask.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        Position::all().filter(|&pos| self.is_clue(pos)).count()
    }
}
