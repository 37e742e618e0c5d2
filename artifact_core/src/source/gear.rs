//! GearSource - Flat main stats from equipped artifacts

use crate::config::{ARTIFACT_FLAT_ATTACK, ARTIFACT_FLAT_DEFENSE, ARTIFACT_FLAT_HP};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::{Attribute, Stats};
use serde::{Deserialize, Serialize};

/// Flat main stat picked for one artifact slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFlat {
    #[default]
    None,
    Defense,
    Attack,
    Hp,
}

impl ArtifactFlat {
    /// Get all options in picker order
    pub fn all() -> &'static [ArtifactFlat] {
        &[
            ArtifactFlat::None,
            ArtifactFlat::Defense,
            ArtifactFlat::Attack,
            ArtifactFlat::Hp,
        ]
    }

    /// The flat bonus this pick grants
    pub fn bonus(&self) -> Stats {
        match self {
            ArtifactFlat::None => Stats::ZERO,
            ArtifactFlat::Defense => Stats::single(Attribute::Defense, ARTIFACT_FLAT_DEFENSE),
            ArtifactFlat::Attack => Stats::single(Attribute::Attack, ARTIFACT_FLAT_ATTACK),
            ArtifactFlat::Hp => Stats::single(Attribute::Hp, ARTIFACT_FLAT_HP),
        }
    }

    /// Sum of the bonuses of several picks
    pub fn sum(picks: &[ArtifactFlat]) -> Stats {
        picks.iter().map(|p| p.bonus()).sum()
    }

    /// Label split into stat name and bonus text, `None` for no pick
    pub fn label(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ArtifactFlat::None => None,
            ArtifactFlat::Defense => Some(("DEF", "(+100)")),
            ArtifactFlat::Attack => Some(("ATK", "(+100)")),
            ArtifactFlat::Hp => Some(("HP", "(+1500)")),
        }
    }

    /// Next option, wrapping around
    pub fn next(&self) -> ArtifactFlat {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> ArtifactFlat {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Flat stats from a build's artifacts
pub struct GearSource {
    /// Build label, e.g. "artifact_a"
    pub id: String,
    /// Total flat bonus of the build's slots
    pub bonus: Stats,
}

impl GearSource {
    /// Create a gear source from a precomputed flat bonus
    pub fn from_bonus(id: impl Into<String>, bonus: Stats) -> Self {
        GearSource {
            id: id.into(),
            bonus,
        }
    }

    /// Create a gear source from slot picks
    pub fn from_picks(id: impl Into<String>, picks: &[ArtifactFlat]) -> Self {
        Self::from_bonus(id, ArtifactFlat::sum(picks))
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_flat(self.bonus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_bonuses() {
        assert_eq!(ArtifactFlat::None.bonus(), Stats::ZERO);
        assert_eq!(ArtifactFlat::Defense.bonus(), Stats::new(0.0, 0.0, 100.0, 0.0));
        assert_eq!(ArtifactFlat::Attack.bonus(), Stats::new(0.0, 100.0, 0.0, 0.0));
        assert_eq!(ArtifactFlat::Hp.bonus(), Stats::new(1500.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_sum_slots() {
        let total = ArtifactFlat::sum(&[ArtifactFlat::Hp, ArtifactFlat::Attack]);
        assert_eq!(total, Stats::new(1500.0, 100.0, 0.0, 0.0));

        let doubled = ArtifactFlat::sum(&[ArtifactFlat::Defense, ArtifactFlat::Defense]);
        assert_eq!(doubled, Stats::new(0.0, 0.0, 200.0, 0.0));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(ArtifactFlat::Hp.next(), ArtifactFlat::None);
        assert_eq!(ArtifactFlat::None.prev(), ArtifactFlat::Hp);
    }

    #[test]
    fn test_gear_source_apply() {
        let source = GearSource::from_picks("artifact_a", &[ArtifactFlat::Hp, ArtifactFlat::None]);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);
        assert_eq!(acc.flat, Stats::new(1500.0, 0.0, 0.0, 0.0));
        assert_eq!(source.id(), "artifact_a");
    }
}
