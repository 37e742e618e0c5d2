//! RuneSource - Flat stats typed in by the user

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::Stats;

/// Flat bonus from runes, added after percentage bonuses
#[derive(Debug, Clone, Copy)]
pub struct RuneSource {
    pub bonus: Stats,
}

impl RuneSource {
    pub fn new(bonus: Stats) -> Self {
        RuneSource { bonus }
    }
}

impl StatSource for RuneSource {
    fn id(&self) -> &str {
        "runes"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_flat(self.bonus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_flat() {
        let mut acc = StatAccumulator::new();
        RuneSource::new(Stats::new(5000.0, 600.0, 300.0, 40.0)).apply(&mut acc);
        assert_eq!(acc.flat, Stats::new(5000.0, 600.0, 300.0, 40.0));
        assert_eq!(acc.increased, Stats::ZERO);
    }
}
