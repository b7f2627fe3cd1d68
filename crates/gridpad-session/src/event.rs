//! State-change notifications for presentation layers.

use gridpad_core::{CellId, Difficulty};

/// The outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Whether the submitted digit matched the solved value.
    pub correct: bool,
    /// Whether this submission completed the puzzle.
    pub game_won: bool,
}

/// A state change a presentation layer may want to react to.
///
/// Events accumulate in the session's queue and are drained with
/// [`PuzzleSession::poll_event`](crate::PuzzleSession::poll_event). This
/// keeps the engine free of UI references: the presentation layer maps cell
/// ids to its own visual elements instead of the engine holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Play has started; the difficulty is now locked.
    Started,
    /// A cell was filled with its solved value and locked.
    CellSolved {
        /// The cell that was solved.
        id: CellId,
    },
    /// A wrong entry raised the error counter.
    ErrorFlagged {
        /// The error count after the increment (1-3).
        errors: u8,
    },
    /// The last blank was filled correctly; the win banner is up.
    Won,
    /// The win banner's display time elapsed.
    BannerCleared,
    /// A fresh puzzle replaced the session state.
    NewGame {
        /// The difficulty of the fresh puzzle.
        difficulty: Difficulty,
    },
}
