//! Difficulty tiers and clue quotas.

use std::{fmt, ops::Range, str::FromStr};

/// The clue quota used when no difficulty has been chosen.
pub const DEFAULT_CLUE_QUOTA: usize = 36;

/// A puzzle difficulty tier.
///
/// Each tier maps to a half-open range of clue quotas; the mask generator
/// samples the actual count uniformly from that range. Fewer clues means a
/// harder puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 56-62 clues.
    #[default]
    Easy,
    /// 51-54 clues.
    Moderate,
    /// 41-49 clues.
    Hard,
    /// 31-40 clues.
    Expert,
}

impl Difficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Moderate, Self::Hard, Self::Expert];

    /// Returns the half-open range of clue quotas for this tier.
    #[must_use]
    pub const fn clue_range(self) -> Range<usize> {
        match self {
            Self::Easy => 56..63,
            Self::Moderate => 51..55,
            Self::Hard => 41..50,
            Self::Expert => 31..41,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
