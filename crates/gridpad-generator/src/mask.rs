//! Clue-mask generation.

use gridpad_core::{ClueMask, Difficulty, Position};
use log::debug;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

/// Generates clue masks from a caller-supplied randomness source.
///
/// A mask is chosen from positions alone: all 81 cells are shuffled and the
/// first `quota` of them become visible clues. The quota is sampled from the
/// difficulty's clue range, so the mask never depends on the board's values.
#[derive(Debug)]
pub struct MaskGenerator<R> {
    rng: R,
}

impl<R: Rng> MaskGenerator<R> {
    /// Creates a generator drawing from the given randomness source.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a mask for the given difficulty.
    ///
    /// The clue quota is sampled uniformly from
    /// [`Difficulty::clue_range`].
    pub fn generate(&mut self, difficulty: Difficulty) -> ClueMask {
        let quota = self.rng.random_range(difficulty.clue_range());
        debug!("mask for {difficulty}: {quota} clues");
        self.generate_with_quota(quota)
    }

    /// Generates a mask with an explicit clue quota.
    ///
    /// Useful for seeded tests and for the
    /// [`DEFAULT_CLUE_QUOTA`](gridpad_core::DEFAULT_CLUE_QUOTA) fallback when
    /// no difficulty has been chosen.
    ///
    /// # Panics
    ///
    /// Panics if `quota` exceeds 81.
    pub fn generate_with_quota(&mut self, quota: usize) -> ClueMask {
        assert!(quota <= 81, "clue quota out of range: {quota}");
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut self.rng);
        ClueMask::from_clues(&positions[..quota])
    }
}
