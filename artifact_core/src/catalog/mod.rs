//! Catalog - Monster data as served by the Swarfarm API
//!
//! The calculator itself only needs [`CreatureBaseStats`]; everything in
//! here exists to find a monster and get those stats out of it.
//!
//! [`CreatureBaseStats`]: crate::types::CreatureBaseStats

mod leader_skill;
mod local;
mod monster;
mod search;

pub use leader_skill::LeaderSkill;
pub use local::{CatalogFile, LocalCatalog};
pub use monster::{
    display_name, sort_monsters, LeaderSkillRef, MonsterDetail, MonsterListItem, Page,
};
pub use search::{MonsterCatalog, DEFAULT_LISTING_LIMIT, SEARCH_LIMIT};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from looking up monster data
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid monster id: {0}")]
    InvalidId(u32),
    #[error("Monster {0} not found")]
    NotFound(u32),
    #[error("Swarfarm error {status} {reason}")]
    Http { status: u16, reason: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Pagination did not end after {0} pages")]
    PageLimit(usize),
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject ids the API can never serve
pub fn validate_monster_id(id: u32) -> Result<u32, LookupError> {
    if id == 0 {
        return Err(LookupError::InvalidId(id));
    }
    Ok(id)
}

/// Anything that can resolve monsters by id
#[async_trait]
pub trait CreatureLookup: Send + Sync {
    /// Full record of one monster
    async fn monster(&self, id: u32) -> Result<MonsterDetail, LookupError>;

    /// Every awakened monster, sorted by name then element
    async fn awakened_monsters(&self) -> Result<Vec<MonsterListItem>, LookupError>;

    /// Every leader skill
    async fn leader_skills(&self) -> Result<Vec<LeaderSkill>, LookupError>;

    /// Resolve the leader skill of a monster, following an id reference
    /// through [`CreatureLookup::leader_skills`] when needed
    async fn leader_skill_of(
        &self,
        monster: &MonsterDetail,
    ) -> Result<Option<LeaderSkill>, LookupError> {
        match &monster.leader_skill {
            None => Ok(None),
            Some(LeaderSkillRef::Skill(skill)) => Ok(Some(skill.clone())),
            Some(LeaderSkillRef::Id(id)) => {
                let id = *id;
                Ok(self.leader_skills().await?.into_iter().find(|s| s.id == id))
            }
        }
    }
}
