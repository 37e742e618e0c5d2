//! Swarfarm HTTP client

use crate::config::SwarfarmConfig;
use artifact_core::catalog::{
    sort_monsters, validate_monster_id, CreatureLookup, LeaderSkill, LookupError, MonsterDetail,
    MonsterListItem, Page,
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

/// Upper bound on pages followed for one listing
pub const MAX_PAGES: usize = 100;

/// Monster lookups against the public Swarfarm API
pub struct SwarfarmClient {
    /// API root without trailing slash
    api_root: String,
    http: reqwest::Client,
}

fn transport(err: reqwest::Error) -> LookupError {
    LookupError::Transport(err.to_string())
}

impl SwarfarmClient {
    pub fn new(config: &SwarfarmConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(transport)?;

        Ok(SwarfarmClient {
            api_root: config.api_root.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn monster_url(&self, id: u32) -> String {
        format!("{}/monsters/{}/", self.api_root, id)
    }

    pub fn awakened_monsters_url(&self) -> String {
        format!("{}/monsters/?awaken_level=1", self.api_root)
    }

    pub fn leader_skills_url(&self) -> String {
        format!("{}/leader-skills/", self.api_root)
    }

    /// GET a JSON document; any non-2xx status is an error
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        tracing::debug!(url, "swarfarm request");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "swarfarm request failed");
            return Err(LookupError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Follow `next` links until the last page, at most [`MAX_PAGES`] of them
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        first: String,
    ) -> Result<Vec<T>, LookupError> {
        let mut all = Vec::new();
        let mut pages = 0usize;
        let mut url = Some(first);

        while let Some(current) = url {
            if pages == MAX_PAGES {
                tracing::warn!(url = %current, pages, "pagination limit reached");
                return Err(LookupError::PageLimit(pages));
            }
            let page: Page<T> = self.get_json(&current).await?;
            all.extend(page.results);
            url = page.next;
            pages += 1;
        }

        tracing::debug!(pages, items = all.len(), "fetched paginated list");
        Ok(all)
    }
}

#[async_trait]
impl CreatureLookup for SwarfarmClient {
    async fn monster(&self, id: u32) -> Result<MonsterDetail, LookupError> {
        let id = validate_monster_id(id)?;
        match self.get_json::<MonsterDetail>(&self.monster_url(id)).await {
            Err(LookupError::Http { status: 404, .. }) => Err(LookupError::NotFound(id)),
            Ok(monster) => {
                tracing::info!(id, name = %monster.name, "fetched monster");
                Ok(monster)
            }
            Err(e) => Err(e),
        }
    }

    async fn awakened_monsters(&self) -> Result<Vec<MonsterListItem>, LookupError> {
        let mut monsters: Vec<MonsterListItem> =
            self.get_all_pages(self.awakened_monsters_url()).await?;
        sort_monsters(&mut monsters);
        tracing::info!(count = monsters.len(), "fetched awakened monster list");
        Ok(monsters)
    }

    async fn leader_skills(&self) -> Result<Vec<LeaderSkill>, LookupError> {
        let skills: Vec<LeaderSkill> = self.get_all_pages(self.leader_skills_url()).await?;
        tracing::info!(count = skills.len(), "fetched leader skills");
        Ok(skills)
    }
}
