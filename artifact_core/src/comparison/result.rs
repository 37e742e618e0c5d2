//! ComparisonResult - Outcome of comparing two builds

use crate::damage::DamageScore;
use crate::source::ArtifactFlat;
use crate::stat_block::StatBlock;
use crate::types::{CreatureBaseStats, LeaderChoice, Stats};
use serde::{Deserialize, Serialize};

/// Which build scored higher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
    #[serde(rename = "TIE")]
    Tie,
}

impl Winner {
    /// Verdict for two scores. Exact equality is a tie, there is no epsilon.
    pub fn from_scores(score_a: f64, score_b: f64) -> Self {
        if score_a > score_b {
            Winner::A
        } else if score_a < score_b {
            Winner::B
        } else {
            Winner::Tie
        }
    }

    /// The verdict with A and B exchanged
    pub fn swap(self) -> Self {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            Winner::Tie => Winner::Tie,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Winner::A => "A",
            Winner::B => "B",
            Winner::Tie => "TIE",
        }
    }
}

/// Scores of two builds and the verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: DamageScore,
    pub b: DamageScore,
    pub winner: Winner,
}

/// One artifact build: its flat main stats and its damage weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Summed flat bonus of the build's artifact slots
    #[serde(default)]
    pub flat_equipment_bonus: Stats,
    /// Damage percentage per axis
    #[serde(default)]
    pub weights: Stats,
}

impl Build {
    pub fn new(flat_equipment_bonus: Stats, weights: Stats) -> Self {
        Build {
            flat_equipment_bonus,
            weights,
        }
    }

    /// Build from slot picks
    pub fn from_picks(picks: &[ArtifactFlat], weights: Stats) -> Self {
        Build::new(ArtifactFlat::sum(picks), weights)
    }
}

/// Everything needed to compare two builds of one monster.
///
/// `base` is `None` until a monster has been looked up; evaluating such
/// an input produces no result at all rather than a zeroed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub base: Option<CreatureBaseStats>,
    #[serde(default)]
    pub leader: LeaderChoice,
    #[serde(default)]
    pub siege_active: bool,
    #[serde(default)]
    pub flat_user_bonus: Stats,
    #[serde(default)]
    pub build_a: Build,
    #[serde(default)]
    pub build_b: Build,
}

/// Full output of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub total_a: Stats,
    pub total_b: Stats,
    pub score_a: f64,
    pub score_b: f64,
    pub winner: Winner,
    /// Per-axis scores of both builds
    pub comparison: Comparison,
    /// Stat blocks behind the totals, for breakdowns
    #[serde(skip)]
    pub block_a: StatBlock,
    #[serde(skip)]
    pub block_b: StatBlock,
}

impl ComparisonResult {
    /// Score difference, positive when A is ahead
    pub fn margin(&self) -> f64 {
        self.score_a - self.score_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_from_scores() {
        assert_eq!(Winner::from_scores(2.0, 1.0), Winner::A);
        assert_eq!(Winner::from_scores(1.0, 2.0), Winner::B);
        assert_eq!(Winner::from_scores(1.5, 1.5), Winner::Tie);
    }

    #[test]
    fn test_tie_is_exact() {
        // 0.1 + 0.2 != 0.3 in floating point, so this is not a tie
        assert_ne!(Winner::from_scores(0.1 + 0.2, 0.3), Winner::Tie);
    }

    #[test]
    fn test_swap() {
        assert_eq!(Winner::A.swap(), Winner::B);
        assert_eq!(Winner::B.swap(), Winner::A);
        assert_eq!(Winner::Tie.swap(), Winner::Tie);
    }

    #[test]
    fn test_winner_serialized_symbols() {
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"TIE\"");
        assert_eq!(serde_json::to_string(&Winner::A).unwrap(), "\"A\"");
    }

    #[test]
    fn test_build_from_picks() {
        let build = Build::from_picks(&[ArtifactFlat::Attack, ArtifactFlat::Hp], Stats::ZERO);
        assert_eq!(build.flat_equipment_bonus, Stats::new(1500.0, 100.0, 0.0, 0.0));
    }
}
