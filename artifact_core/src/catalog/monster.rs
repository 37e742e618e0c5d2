//! Monster records as served by Swarfarm

use super::LeaderSkill;
use crate::types::CreatureBaseStats;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// Paginated list envelope; `next` is the URL of the following page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Entry of the monster picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterListItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub element: Option<String>,
}

impl MonsterListItem {
    pub fn display_name(&self) -> String {
        display_name(&self.name, self.element.as_deref())
    }

    /// Text matched by the picker's search
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.element.as_deref().unwrap_or("")).to_lowercase()
    }
}

/// Leader skill field of a monster: either embedded or a bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeaderSkillRef {
    Id(u32),
    Skill(LeaderSkill),
}

/// Full monster record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub awaken_level: i32,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub speed: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub max_lvl_hp: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub max_lvl_attack: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub max_lvl_defense: f64,
    #[serde(default)]
    pub leader_skill: Option<LeaderSkillRef>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl MonsterDetail {
    /// Max level stats without any bonus
    pub fn base_stats(&self) -> CreatureBaseStats {
        CreatureBaseStats::new(
            self.max_lvl_hp,
            self.max_lvl_attack,
            self.max_lvl_defense,
            self.speed,
        )
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name, self.element.as_deref())
    }

    /// Picker entry for this monster
    pub fn summary(&self) -> MonsterListItem {
        MonsterListItem {
            id: self.id,
            name: self.name.clone(),
            element: self.element.clone(),
        }
    }
}

/// "Name (Element)", or just the name when there is no element
pub fn display_name(name: &str, element: Option<&str>) -> String {
    match element {
        Some(element) if !element.is_empty() => format!("{} ({})", name, element),
        _ => name.to_string(),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Sort by name, then by element (no element sorts first)
pub fn sort_monsters(monsters: &mut [MonsterListItem]) {
    monsters.sort_by(|a, b| {
        compare_text(&a.name, &b.name).then_with(|| {
            compare_text(a.element.as_deref().unwrap_or(""), b.element.as_deref().unwrap_or(""))
        })
    });
}
