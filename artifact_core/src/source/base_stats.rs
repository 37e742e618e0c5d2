//! BaseStatsSource - Stats from the monster at max level

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::CreatureBaseStats;

/// Stats from the monster itself
pub struct BaseStatsSource {
    pub base: CreatureBaseStats,
}

impl BaseStatsSource {
    /// Create a new base stats source
    pub fn new(base: CreatureBaseStats) -> Self {
        BaseStatsSource { base }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_base(self.base.as_stats());
    }
}
