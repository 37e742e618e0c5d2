//! StatAccumulator - Collects stat modifications before applying to StatBlock

use crate::stat_block::StatBlock;
use crate::types::{Attribute, Stats};
use serde::{Deserialize, Serialize};

/// Accumulates stat modifications from various sources
///
/// This is used during stat rebuilding to collect all modifications
/// before applying them to a StatBlock. Every value passing through
/// here is sanitized, so a NaN from any source lands as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAccumulator {
    /// Base values (max level stats of the monster)
    pub base: Stats,
    /// Percentage bonuses as decimals, summed additively
    pub increased: Stats,
    /// Flat additions applied after percentages
    pub flat: Stats,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add base values
    pub fn add_base(&mut self, stats: Stats) {
        self.base += stats.sanitized();
    }

    /// Add percentage bonuses (as decimals, 0.20 = +20%)
    pub fn add_increased(&mut self, stats: Stats) {
        self.increased += stats.sanitized();
    }

    /// Add a single-axis percentage bonus
    pub fn add_increased_to(&mut self, attribute: Attribute, value: f64) {
        self.add_increased(Stats::single(attribute, value));
    }

    /// Add flat bonuses
    pub fn add_flat(&mut self, stats: Stats) {
        self.flat += stats.sanitized();
    }

    /// Difference between this accumulator and an earlier snapshot of it
    pub fn delta_since(&self, earlier: &StatAccumulator) -> StatAccumulator {
        let sub = |a: f64, b: f64| a - b;
        StatAccumulator {
            base: self.base.zip_with(earlier.base, sub),
            increased: self.increased.zip_with(earlier.increased, sub),
            flat: self.flat.zip_with(earlier.flat, sub),
        }
    }

    /// Whether nothing has been accumulated
    pub fn is_empty(&self) -> bool {
        self.base == Stats::ZERO && self.increased == Stats::ZERO && self.flat == Stats::ZERO
    }

    /// Apply accumulated values to a StatBlock
    pub fn apply_to(&self, block: &mut StatBlock) {
        for attribute in Attribute::all() {
            let stat = block.stat_mut(*attribute);
            stat.base += self.base.get(*attribute);
            stat.add_increased(self.increased.get(*attribute));
            stat.add_flat(self.flat.get(*attribute));
        }
    }
}
