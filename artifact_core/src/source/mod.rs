//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod buff;
mod gear;
mod leader;
mod rune;

pub use base_stats::BaseStatsSource;
pub use buff::{BuffPresets, BuffSource};
pub use gear::{ArtifactFlat, GearSource};
pub use leader::{leader_contribution, LeaderSource};
pub use rune::RuneSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a StatBlock
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Artifacts: 0
    /// - Runes: 50
    /// - Buffs and leader skill: 100
    ///
    /// Percentages and flats are each summed in application order, and
    /// sources sharing a priority apply in the order they were given.
    /// Reordering can move a total by a rounding step.
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
