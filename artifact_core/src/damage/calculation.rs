//! Damage calculation - turning totals + artifact weights into a score

use crate::numeric::finite_or_zero;
use crate::types::{Attribute, Stats};
use serde::{Deserialize, Serialize};

/// Weighted damage of one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageScore {
    /// `total × weight / 100` per axis
    pub per_axis: Stats,
    /// Sum of `per_axis`
    pub score: f64,
}

impl DamageScore {
    /// Axis contributing the most damage, `None` when everything is zero
    pub fn dominant_axis(&self) -> Option<Attribute> {
        Attribute::all()
            .iter()
            .copied()
            .filter(|a| self.per_axis.get(*a) != 0.0)
            .max_by(|a, b| self.per_axis.get(*a).total_cmp(&self.per_axis.get(*b)))
    }
}

/// Score a build: each axis contributes `total × weight / 100`.
///
/// Weights are percentages (100 = the whole stat counts once).
pub fn score(total: &Stats, weights: &Stats) -> DamageScore {
    let per_axis = total
        .sanitized()
        .zip_with(weights.sanitized(), |t, w| t * (w / 100.0))
        .sanitized();
    DamageScore {
        per_axis,
        score: finite_or_zero(per_axis.sum()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_total() -> Stats {
        Stats::new(12000.0, 1710.0, 1200.0, 115.0)
    }

    #[test]
    fn test_attack_weight() {
        let result = score(&example_total(), &Stats::new(0.0, 100.0, 0.0, 0.0));
        assert!((result.score - 1710.0).abs() < 1e-9);
        assert_eq!(result.dominant_axis(), Some(Attribute::Attack));
    }

    #[test]
    fn test_hp_weight() {
        let result = score(&example_total(), &Stats::new(50.0, 0.0, 0.0, 0.0));
        assert!((result.score - 6000.0).abs() < 1e-9);
        assert!((result.per_axis.hp - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_weights_sum() {
        let result = score(&example_total(), &Stats::new(10.0, 200.0, 50.0, 100.0));
        let expected = 1200.0 + 3420.0 + 600.0 + 115.0;
        assert!((result.score - expected).abs() < 1e-9);
        assert!((result.per_axis.sum() - result.score).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_weights() {
        let result = score(&example_total(), &Stats::ZERO);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.dominant_axis(), None);
    }

    #[test]
    fn test_non_finite_weight() {
        let result = score(&example_total(), &Stats::new(f64::NAN, 100.0, 0.0, 0.0));
        assert!((result.score - 1710.0).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_sum_is_zero() {
        // Each axis is finite on its own, their sum is not
        let huge = Stats::new(1e308, 1e308, 0.0, 0.0);
        let result = score(&huge, &Stats::new(100.0, 100.0, 0.0, 0.0));
        assert!(result.per_axis.hp.is_finite());
        assert_eq!(result.score, 0.0);
    }
}
