//! Session error taxonomy.

use derive_more::{Display, Error, IsVariant};

/// Why a session operation was rejected.
///
/// Rejections leave the session untouched; callers check the `Err` arm
/// instead of an exception path. Out-of-range digits and cell ids cannot
/// reach the session at all, since [`Digit`](gridpad_core::Digit) and
/// [`CellId`](gridpad_core::CellId) are fallible to construct.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The target cell is a clue or was already solved correctly.
    #[display("cell is locked")]
    CellLocked,
    /// The difficulty cannot change once play has started.
    #[display("difficulty is locked after the first move")]
    DifficultyLocked,
}
