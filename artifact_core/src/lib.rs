//! artifact_core - Stat aggregation and artifact comparison for Summoners War
//!
//! This library provides:
//! - StatBlock: Monster stats aggregated from base, towers, siege, leader,
//!   runes and artifact flats
//! - Damage scoring: weighting totals by an artifact's percentage bonuses
//! - Comparison: scoring two builds and picking a winner
//! - Numeric helpers: parse-or-zero input parsing and stat formatting
//! - Catalog: Swarfarm monster data and the lookup seam

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod damage;
pub mod format;
pub mod numeric;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use catalog::{
    CreatureLookup, LocalCatalog, LookupError, MonsterCatalog, MonsterDetail, MonsterListItem,
};
pub use comparison::{
    compare, evaluate, Build, Comparison, ComparisonInput, ComparisonResult, Winner,
};
pub use config::{ConfigError, SIEGE_BONUS, TOWERS};
pub use damage::{score, DamageScore};
pub use format::{format_stat, NumberFormat};
pub use numeric::parse_decimal;
pub use source::{leader_contribution, ArtifactFlat, StatSource};
pub use stat_block::{aggregate, StatAccumulator, StatBlock, StatValue};
pub use types::{Attribute, CreatureBaseStats, LeaderAttribute, LeaderChoice, Stats};
