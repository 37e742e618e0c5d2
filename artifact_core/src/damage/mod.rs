//! Damage scoring - weighting aggregated stats by artifact percentages

mod calculation;

pub use calculation::{score, DamageScore};
