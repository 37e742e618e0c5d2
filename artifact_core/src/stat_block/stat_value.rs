//! StatValue - The base → increased → flat container

use serde::{Deserialize, Serialize};

/// Represents a stat that follows the Base → Increased → Flat model
///
/// Final value is calculated as:
/// `base × (1 + increased) + flat`
///
/// - `base`: The monster's max level value
/// - `increased`: Sum of all percentage bonuses (as decimal, e.g., 0.41 = 41%)
/// - `flat`: Sum of all flat additions, applied after the percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value (from the monster)
    pub base: f64,
    /// Sum of all increased% (as decimal)
    pub increased: f64,
    /// Sum of all flat additions
    pub flat: f64,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            increased: 0.0,
            flat: 0.0,
        }
    }

    /// Calculate final value: base × (1 + increased) + flat
    pub fn compute(&self) -> f64 {
        self.base * self.total_increased_multiplier() + self.flat
    }

    /// Add a flat bonus
    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }

    /// Add an increased% bonus (as decimal, e.g., 0.20 for 20%)
    pub fn add_increased(&mut self, value: f64) {
        self.increased += value;
    }

    /// Get the total increased multiplier (1 + sum of increased%)
    pub fn total_increased_multiplier(&self) -> f64 {
        1.0 + self.increased
    }

    /// Portion of the final value that comes from percentage bonuses
    pub fn increased_amount(&self) -> f64 {
        self.base * self.increased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stat = StatValue::with_base(100.0);
        assert!((stat.compute() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_with_flat() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_flat(50.0);
        assert!((stat.compute() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_with_increased() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_increased(0.40); // 40%
        assert!((stat.compute() - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_is_not_multiplied() {
        // 1000 base, +41% towers, +100 flat
        // = 1000 × 1.41 + 100 = 1510, not (1000 + 100) × 1.41 = 1551
        let mut stat = StatValue::with_base(1000.0);
        stat.add_increased(0.41);
        stat.add_flat(100.0);
        assert!((stat.compute() - 1510.0).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_increased_stack_additively() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_increased(0.20);
        stat.add_increased(0.30);
        // Should be 100 * (1 + 0.50) = 150, not 100 * 1.2 * 1.3 = 156
        assert!((stat.compute() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_increased_amount() {
        let mut stat = StatValue::with_base(10000.0);
        stat.add_increased(0.20);
        assert!((stat.increased_amount() - 2000.0).abs() < 1e-9);
    }
}
