//! LocalCatalog - Offline lookups from a JSON file

use super::{
    sort_monsters, validate_monster_id, CreatureLookup, LeaderSkill, LookupError, MonsterDetail,
    MonsterListItem,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Layout of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub monsters: Vec<MonsterDetail>,
    #[serde(default)]
    pub leader_skills: Vec<LeaderSkill>,
}

/// Monster data held in memory
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    file: CatalogFile,
}

impl LocalCatalog {
    pub fn new(file: CatalogFile) -> Self {
        LocalCatalog { file }
    }

    /// Parse a catalog from JSON text
    pub fn from_json(content: &str) -> Result<Self, LookupError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::new(file))
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            monsters = catalog.file.monsters.len(),
            leader_skills = catalog.file.leader_skills.len(),
            "loaded local catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl CreatureLookup for LocalCatalog {
    async fn monster(&self, id: u32) -> Result<MonsterDetail, LookupError> {
        let id = validate_monster_id(id)?;
        self.file
            .monsters
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(LookupError::NotFound(id))
    }

    async fn awakened_monsters(&self) -> Result<Vec<MonsterListItem>, LookupError> {
        let mut list: Vec<MonsterListItem> = self
            .file
            .monsters
            .iter()
            .filter(|m| m.awaken_level == 1)
            .map(MonsterDetail::summary)
            .collect();
        sort_monsters(&mut list);
        Ok(list)
    }

    async fn leader_skills(&self) -> Result<Vec<LeaderSkill>, LookupError> {
        Ok(self.file.leader_skills.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeaderAttribute, LeaderChoice};
    use std::io::Write;

    const CATALOG: &str = r#"{
        "monsters": [
            {"id": 2, "name": "Veromos", "awaken_level": 1, "element": "Dark", "speed": 100,
             "max_lvl_hp": 9225, "max_lvl_attack": 769, "max_lvl_defense": 758, "leader_skill": 9},
            {"id": 1, "name": "Ifrit", "awaken_level": 0, "element": "Dark", "speed": 100,
             "max_lvl_hp": 8000, "max_lvl_attack": 700, "max_lvl_defense": 600, "leader_skill": null},
            {"id": 3, "name": "Bernard", "awaken_level": 1, "element": "Wind", "speed": 111,
             "max_lvl_hp": 10380, "max_lvl_attack": 417, "max_lvl_defense": 703,
             "leader_skill": {"id": 4, "attribute": "Attack Speed", "amount": 24, "area": "Arena", "element": null}}
        ],
        "leader_skills": [
            {"id": 9, "attribute": "HP", "amount": 33, "area": "General", "element": null}
        ]
    }"#;

    #[tokio::test]
    async fn test_monster_lookup() {
        let catalog = LocalCatalog::from_json(CATALOG).unwrap();
        let monster = catalog.monster(2).await.unwrap();
        assert_eq!(monster.name, "Veromos");
        assert!(matches!(catalog.monster(99).await, Err(LookupError::NotFound(99))));
        assert!(matches!(catalog.monster(0).await, Err(LookupError::InvalidId(0))));
    }

    #[tokio::test]
    async fn test_awakened_only_sorted() {
        let catalog = LocalCatalog::from_json(CATALOG).unwrap();
        let names: Vec<String> = catalog
            .awakened_monsters()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Bernard", "Veromos"]);
    }

    #[tokio::test]
    async fn test_leader_skill_resolution() {
        let catalog = LocalCatalog::from_json(CATALOG).unwrap();

        let veromos = catalog.monster(2).await.unwrap();
        let by_id = catalog.leader_skill_of(&veromos).await.unwrap().unwrap();
        assert_eq!(by_id.to_choice(), LeaderChoice::new(LeaderAttribute::Hp, 33.0));

        let bernard = catalog.monster(3).await.unwrap();
        let embedded = catalog.leader_skill_of(&bernard).await.unwrap().unwrap();
        assert_eq!(embedded.leader_attribute(), LeaderAttribute::Speed);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(LocalCatalog::from_json("{ not json"), Err(LookupError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let catalog = LocalCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.awakened_monsters().await.unwrap().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = LocalCatalog::load(Path::new("/no/such/catalog.json"));
        assert!(matches!(result, Err(LookupError::Io(_))));
    }
}
