//! Fixed game constants
//!
//! These are part of the game rules, not user configuration, and never
//! change at runtime.

use crate::types::Stats;

/// Permanent tower buffs, as fractions (0.41 = +41%)
pub const TOWERS: Stats = Stats::new(0.20, 0.41, 0.20, 0.15);

/// Siege war bonus, as fractions. Speed is not boosted.
pub const SIEGE_BONUS: Stats = Stats::new(0.20, 0.20, 0.20, 0.0);

/// Flat HP granted by an HP artifact main stat
pub const ARTIFACT_FLAT_HP: f64 = 1500.0;
/// Flat attack granted by an ATK artifact main stat
pub const ARTIFACT_FLAT_ATTACK: f64 = 100.0;
/// Flat defense granted by a DEF artifact main stat
pub const ARTIFACT_FLAT_DEFENSE: f64 = 100.0;
