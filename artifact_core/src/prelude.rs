//! Prelude module for convenient imports
//!
//! ```rust
//! use artifact_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{aggregate, StatBlock, StatValue};
pub use crate::types::{Attribute, CreatureBaseStats, LeaderAttribute, LeaderChoice, Stats};

// Scoring and comparison
pub use crate::comparison::{compare, evaluate, Build, ComparisonInput, ComparisonResult, Winner};
pub use crate::damage::{score, DamageScore};

// Sources
pub use crate::source::{ArtifactFlat, StatSource};

// Input and display
pub use crate::format::format_stat;
pub use crate::numeric::parse_decimal;

// Catalog
pub use crate::catalog::{CreatureLookup, LookupError, MonsterDetail, MonsterListItem};
