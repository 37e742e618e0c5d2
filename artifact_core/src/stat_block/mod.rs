//! StatBlock - Aggregated monster stats from all sources

mod aggregator;
mod computed;
mod stat_value;

pub use aggregator::StatAccumulator;
pub use computed::StatRow;
pub use stat_value::StatValue;

use crate::source::{BaseStatsSource, BuffPresets, GearSource, LeaderSource, RuneSource, StatSource};
use crate::types::{Attribute, CreatureBaseStats, LeaderChoice, Stats};
use serde::{Deserialize, Serialize};

/// What one source added during a rebuild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContribution {
    pub source_id: String,
    pub delta: StatAccumulator,
}

/// Complete stat state for one build of a monster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: StatValue,
    pub attack: StatValue,
    pub defense: StatValue,
    pub speed: StatValue,

    /// Per-source contributions from the last rebuild, in application order
    #[serde(default)]
    contributions: Vec<SourceContribution>,
}

impl StatBlock {
    /// Create a new empty StatBlock
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stat(&self, attribute: Attribute) -> &StatValue {
        match attribute {
            Attribute::Hp => &self.hp,
            Attribute::Attack => &self.attack,
            Attribute::Defense => &self.defense,
            Attribute::Speed => &self.speed,
        }
    }

    pub fn stat_mut(&mut self, attribute: Attribute) -> &mut StatValue {
        match attribute {
            Attribute::Hp => &mut self.hp,
            Attribute::Attack => &mut self.attack,
            Attribute::Defense => &mut self.defense,
            Attribute::Speed => &mut self.speed,
        }
    }

    /// Final value of every axis
    pub fn totals(&self) -> Stats {
        Stats::new(
            self.hp.compute(),
            self.attack.compute(),
            self.defense.compute(),
            self.speed.compute(),
        )
    }

    /// Contributions recorded by the last rebuild
    pub fn contributions(&self) -> &[SourceContribution] {
        &self.contributions
    }

    /// Rebuild stats from all sources (external API for custom sources)
    pub fn rebuild_from_sources(&mut self, sources: &[Box<dyn StatSource>]) {
        *self = StatBlock::new();

        let mut accumulator = StatAccumulator::new();

        // Sort sources by priority
        let mut sorted_sources: Vec<_> = sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        for source in sorted_sources {
            let before = accumulator;
            source.apply(&mut accumulator);
            let delta = accumulator.delta_since(&before);
            if !delta.is_empty() {
                self.contributions.push(SourceContribution {
                    source_id: source.id().to_string(),
                    delta,
                });
            }
        }

        // Apply accumulated stats to self
        accumulator.apply_to(self);
    }

    /// Build the stat block of one build.
    ///
    /// Sources: monster base, towers, siege (when active), leader skill,
    /// runes and the build's artifact flats.
    pub fn for_build(
        base: &CreatureBaseStats,
        leader: &LeaderChoice,
        siege_active: bool,
        flat_user_bonus: Stats,
        flat_equipment_bonus: Stats,
    ) -> Self {
        let sources: Vec<Box<dyn StatSource>> = vec![
            Box::new(BaseStatsSource::new(*base)),
            Box::new(BuffPresets::towers()),
            Box::new(BuffPresets::siege(siege_active)),
            Box::new(LeaderSource::new(*leader)),
            Box::new(RuneSource::new(flat_user_bonus)),
            Box::new(GearSource::from_bonus("artifacts", flat_equipment_bonus)),
        ];

        let mut block = StatBlock::new();
        block.rebuild_from_sources(&sources);
        block
    }
}

/// Total effective stats of one build.
///
/// Per axis: `base × (1 + towers + leader + siege) + runes + artifacts`,
/// with the percentages summed before the `1 +` and the flats summed
/// before being added. Both builds of a comparison go through the same
/// order. Never fails; non-finite inputs count as zero.
pub fn aggregate(
    base: &CreatureBaseStats,
    leader: &LeaderChoice,
    siege_active: bool,
    flat_user_bonus: Stats,
    flat_equipment_bonus: Stats,
) -> Stats {
    StatBlock::for_build(base, leader, siege_active, flat_user_bonus, flat_equipment_bonus).totals()
}
