//! BuffSource - Fixed percentage buffs (towers, siege)

use crate::config::{SIEGE_BONUS, TOWERS};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::Stats;

/// Percentage buff applied to every axis it names
#[derive(Debug, Clone)]
pub struct BuffSource {
    /// Buff identifier
    pub buff_id: String,
    /// Display name
    pub name: String,
    /// Percentage bonus per axis, as decimals
    pub increased: Stats,
    /// Whether the buff currently applies
    pub active: bool,
}

impl BuffSource {
    /// Create a new, active buff source
    pub fn new(buff_id: impl Into<String>, name: impl Into<String>, increased: Stats) -> Self {
        BuffSource {
            buff_id: buff_id.into(),
            name: name.into(),
            increased,
            active: true,
        }
    }

    /// Set whether the buff applies
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if the buff is active
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl StatSource for BuffSource {
    fn id(&self) -> &str {
        &self.buff_id
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if !self.is_active() {
            return;
        }
        stats.add_increased(self.increased);
    }
}

/// Buffs defined by the game rules
pub struct BuffPresets;

impl BuffPresets {
    /// Tower buffs, always on
    pub fn towers() -> BuffSource {
        BuffSource::new("towers", "Towers", TOWERS)
    }

    /// Siege war bonus, only on in siege mode
    pub fn siege(active: bool) -> BuffSource {
        BuffSource::new("siege", "Siege War", SIEGE_BONUS).with_active(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_towers_apply() {
        let mut acc = StatAccumulator::new();
        BuffPresets::towers().apply(&mut acc);
        assert_eq!(acc.increased, TOWERS);
    }

    #[test]
    fn test_inactive_siege_applies_nothing() {
        let mut acc = StatAccumulator::new();
        BuffPresets::siege(false).apply(&mut acc);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_towers_and_siege_stack() {
        let mut acc = StatAccumulator::new();
        BuffPresets::towers().apply(&mut acc);
        BuffPresets::siege(true).apply(&mut acc);
        assert!((acc.increased.hp - 0.40).abs() < 1e-12);
        assert!((acc.increased.attack - 0.61).abs() < 1e-12);
        assert!((acc.increased.speed - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_buff_priority() {
        assert_eq!(BuffPresets::towers().priority(), 100);
    }
}
