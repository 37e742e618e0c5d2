//! LeaderSource - Leader skill percentage bonus

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::{LeaderChoice, Stats};

/// Percentage vector contributed by a leader choice.
///
/// At most one axis is non-zero, holding `amount / 100`. An inactive
/// choice (no attribute, non-positive or non-finite amount) gives the
/// zero vector. Amounts outside the in-game value sets are accepted.
pub fn leader_contribution(choice: &LeaderChoice) -> Stats {
    if !choice.is_active() {
        return Stats::ZERO;
    }
    match choice.attribute.attribute() {
        Some(attribute) => Stats::single(attribute, choice.amount / 100.0),
        None => Stats::ZERO,
    }
}

/// Leader skill of the party leader
#[derive(Debug, Clone, Copy)]
pub struct LeaderSource {
    pub choice: LeaderChoice,
}

impl LeaderSource {
    pub fn new(choice: LeaderChoice) -> Self {
        LeaderSource { choice }
    }
}

impl StatSource for LeaderSource {
    fn id(&self) -> &str {
        "leader"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_increased(leader_contribution(&self.choice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, LeaderAttribute};

    #[test]
    fn test_single_axis() {
        let stats = leader_contribution(&LeaderChoice::new(LeaderAttribute::Attack, 30.0));
        assert!((stats.attack - 0.30).abs() < f64::EPSILON);
        assert_eq!(stats.non_zero_axes(), 1);
    }

    #[test]
    fn test_each_attribute_targets_its_axis() {
        for attribute in Attribute::all() {
            let choice = LeaderChoice::new(LeaderAttribute::from(*attribute), 20.0);
            let stats = leader_contribution(&choice);
            assert!((stats.get(*attribute) - 0.20).abs() < f64::EPSILON);
            assert_eq!(stats.non_zero_axes(), 1);
        }
    }

    #[test]
    fn test_none_is_zero() {
        let stats = leader_contribution(&LeaderChoice::new(LeaderAttribute::None, 50.0));
        assert_eq!(stats, Stats::ZERO);
    }

    #[test]
    fn test_non_positive_is_zero() {
        assert_eq!(leader_contribution(&LeaderChoice::new(LeaderAttribute::Hp, 0.0)), Stats::ZERO);
        let negative = LeaderChoice::new(LeaderAttribute::Hp, -15.0);
        assert_eq!(leader_contribution(&negative), Stats::ZERO);
        assert_eq!(
            leader_contribution(&LeaderChoice::new(LeaderAttribute::Hp, f64::INFINITY)),
            Stats::ZERO
        );
    }

    #[test]
    fn test_out_of_enum_amount_accepted() {
        // 37% is no real leader value, still honoured
        let stats = leader_contribution(&LeaderChoice::new(LeaderAttribute::Speed, 37.0));
        assert!((stats.speed - 0.37).abs() < f64::EPSILON);
    }
}
