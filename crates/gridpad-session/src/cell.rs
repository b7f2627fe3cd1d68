//! Per-cell play state.

use gridpad_core::Digit;

/// The play state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A pre-filled clue, locked from the start of the session.
    Clue,
    /// Blank, awaiting player input.
    Blank,
    /// A wrong entry the player may still overwrite. The digit shown is the
    /// one the player submitted, flagged as incorrect.
    Wrong(Digit),
    /// Correctly filled by the player and locked permanently.
    Solved,
}

impl CellState {
    /// Whether the cell rejects further edits.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Clue | Self::Solved)
    }
}

/// A read-only snapshot of one cell, shaped for a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The digit currently shown, or `None` for a blank cell.
    pub display: Option<Digit>,
    /// Whether the cell rejects further edits (clue or correctly solved).
    pub locked: bool,
    /// Whether the shown digit is flagged as a wrong entry.
    pub flagged_incorrect: bool,
}

// One of the 81 cell records a session owns. The solved value is copied out
// of the grid when the session starts and is the ground truth every
// submission is compared against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell {
    pub(crate) solved: Digit,
    pub(crate) state: CellState,
}

impl Cell {
    pub(crate) const fn new(solved: Digit, is_clue: bool) -> Self {
        let state = if is_clue { CellState::Clue } else { CellState::Blank };
        Self { solved, state }
    }

    pub(crate) fn view(&self) -> CellView {
        let (display, flagged_incorrect) = match self.state {
            CellState::Clue | CellState::Solved => (Some(self.solved), false),
            CellState::Blank => (None, false),
            CellState::Wrong(digit) => (Some(digit), true),
        };
        CellView {
            display,
            locked: self.state.is_locked(),
            flagged_incorrect,
        }
    }
}
