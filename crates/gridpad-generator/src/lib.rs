//! Puzzle generation for the gridpad Sudoku engine.
//!
//! Generation happens in two independent stages. [`BoardGenerator`] fills a
//! 9×9 board by randomized backtracking, producing the session's ground
//! truth. [`MaskGenerator`] picks which cells start visible as clues, with
//! the clue count driven by the difficulty tier. [`PuzzleGenerator`] ties the
//! stages together under a single [`PuzzleSeed`], so a puzzle can be
//! regenerated exactly from its seed.
//!
//! # Examples
//!
//! ```
//! use gridpad_core::Difficulty;
//! use gridpad_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Hard);
//! assert!(Difficulty::Hard.clue_range().contains(&puzzle.clue_count()));
//! ```

pub mod board;
pub mod mask;
pub mod seed;

use gridpad_core::{ClueMask, Difficulty, Position, SolvedGrid};
use log::debug;

pub use self::{
    board::BoardGenerator,
    mask::MaskGenerator,
    seed::{ParseSeedError, PuzzleSeed},
};

/// A complete generated puzzle: solution, clue mask, and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully solved board.
    pub solution: SolvedGrid,
    /// Which cells start visible as clues.
    pub mask: ClueMask,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle exactly.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of clue cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.mask.clue_count()
    }

    /// Returns the number of cells the player has to fill.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        81 - self.clue_count()
    }

    /// Iterates over the positions the player has to fill.
    pub fn blank_positions(&self) -> impl Iterator<Item = Position> {
        Position::all().filter(|&pos| !self.mask.is_clue(pos))
    }
}

/// Generates complete puzzles.
///
/// Each call expands a [`PuzzleSeed`] into separate PRNG streams for the
/// board fill and the mask selection, so the two stages stay reproducible
/// independently of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {}

impl PuzzleGenerator {
    /// Creates a puzzle generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always yield the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        debug!("generating {difficulty} puzzle from seed {seed}");
        let solution = BoardGenerator::new(seed.stream("board")).generate();
        let mask = MaskGenerator::new(seed.stream("mask")).generate(difficulty);
        GeneratedPuzzle {
            solution,
            mask,
            difficulty,
            seed,
        }
    }
}
