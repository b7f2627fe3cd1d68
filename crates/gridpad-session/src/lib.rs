//! Interactive play sessions for the gridpad Sudoku engine.
//!
//! A [`PuzzleSession`] combines a solved grid and a clue mask into 81
//! playable cells and owns all mutation from there: digit submissions,
//! correctness checks, the 3-strike error counter, win detection, and the
//! timed win banner. The session knows nothing about rendering; a
//! presentation layer drives it through plain operations and drains
//! [`SessionEvent`]s to refresh itself.
//!
//! # Lifecycle
//!
//! Sessions move `NotStarted → InProgress → Won`. The transition to
//! `InProgress` happens on the first cell selection or accepted submission,
//! at which point the difficulty is locked; a new game resets the whole
//! session wholesale. There is no losing phase — the error counter caps at
//! [`MAX_ERRORS`] and is purely advisory.
//!
//! # Examples
//!
//! ```
//! use gridpad_core::Difficulty;
//! use gridpad_session::{PuzzleSession, SessionPhase};
//!
//! let mut session = PuzzleSession::new(Difficulty::Moderate);
//! assert_eq!(session.phase(), SessionPhase::NotStarted);
//!
//! // Difficulty may still change before the first move.
//! session.change_difficulty(Difficulty::Expert).unwrap();
//! assert_eq!(session.difficulty(), Difficulty::Expert);
//! ```

mod cell;
mod error;
mod event;
mod session;

pub(crate) use self::cell::Cell;
pub use self::{
    cell::{CellState, CellView},
    error::SessionError,
    event::{SessionEvent, Submission},
    session::{MAX_ERRORS, PuzzleSession, SessionPhase, WIN_BANNER_DURATION},
};
