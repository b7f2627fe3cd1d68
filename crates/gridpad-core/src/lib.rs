//! Core data types for the gridpad Sudoku engine.
//!
//! This crate defines the plain data the engine components communicate
//! through. Nothing here knows about generation, play sessions, or any
//! presentation layer.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: board coordinates ([`Position`]) and the linear cell
//!   identity used by the dashboard layout ([`CellId`])
//! - [`grid`]: a fully solved board ([`SolvedGrid`]), validated on
//!   construction
//! - [`mask`]: the clue-visibility mask ([`ClueMask`])
//! - [`difficulty`]: difficulty tiers and their clue quotas
//!
//! # Examples
//!
//! ```
//! use gridpad_core::{CellId, Position};
//!
//! let id = CellId::new(1).unwrap();
//! assert_eq!(id.position(), Position::new(0, 0));
//! assert_eq!(id.block_row(), 1);
//! ```

pub mod difficulty;
pub mod digit;
pub mod grid;
pub mod mask;
pub mod position;

pub use self::{
    difficulty::{DEFAULT_CLUE_QUOTA, Difficulty},
    digit::Digit,
    grid::{GridError, SolvedGrid},
    mask::ClueMask,
    position::{CellId, Position},
};
