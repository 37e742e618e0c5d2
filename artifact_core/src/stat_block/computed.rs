//! Computed/derived stat calculations for StatBlock

use crate::stat_block::StatBlock;
use crate::types::Attribute;

/// One axis of a StatBlock split into its parts, for breakdown displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRow {
    pub attribute: Attribute,
    pub base: f64,
    /// Summed percentage bonus (0.61 = +61%)
    pub increased: f64,
    /// Amount the percentage bonus adds on top of base
    pub increased_amount: f64,
    pub flat: f64,
    pub total: f64,
}

impl StatBlock {
    /// Breakdown of one axis
    pub fn row(&self, attribute: Attribute) -> StatRow {
        let stat = self.stat(attribute);
        StatRow {
            attribute,
            base: stat.base,
            increased: stat.increased,
            increased_amount: stat.increased_amount(),
            flat: stat.flat,
            total: stat.compute(),
        }
    }

    /// Breakdown of every axis in display order
    pub fn rows(&self) -> Vec<StatRow> {
        Attribute::all().iter().map(|a| self.row(*a)).collect()
    }
}
