//! Search-as-you-type over the monster list

use super::{sort_monsters, MonsterListItem};

/// Entries shown before anything is typed
pub const DEFAULT_LISTING_LIMIT: usize = 150;
/// Maximum matches shown for a search term
pub const SEARCH_LIMIT: usize = 200;

/// Sorted list of pickable monsters
#[derive(Debug, Clone, Default)]
pub struct MonsterCatalog {
    monsters: Vec<MonsterListItem>,
}

impl MonsterCatalog {
    /// Build a catalog, sorting by name then element
    pub fn new(mut monsters: Vec<MonsterListItem>) -> Self {
        sort_monsters(&mut monsters);
        MonsterCatalog { monsters }
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&MonsterListItem> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Entries matching `term`.
    ///
    /// An empty or blank term lists the first [`DEFAULT_LISTING_LIMIT`]
    /// entries. Otherwise the match is a case-insensitive substring test
    /// on "name element", capped at [`SEARCH_LIMIT`].
    pub fn search(&self, term: &str) -> Vec<&MonsterListItem> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.monsters.iter().take(DEFAULT_LISTING_LIMIT).collect();
        }
        self.monsters
            .iter()
            .filter(|m| m.search_text().contains(&term))
            .take(SEARCH_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, element: Option<&str>) -> MonsterListItem {
        MonsterListItem {
            id,
            name: name.to_string(),
            element: element.map(str::to_string),
        }
    }

    fn many(n: u32) -> MonsterCatalog {
        MonsterCatalog::new(
            (1..=n)
                .map(|i| item(i, &format!("Mon{:04}", i), Some("Fire")))
                .collect(),
        )
    }

    #[test]
    fn test_empty_term_lists_default_limit() {
        let catalog = many(400);
        assert_eq!(catalog.search("").len(), DEFAULT_LISTING_LIMIT);
        assert_eq!(catalog.search("   ").len(), DEFAULT_LISTING_LIMIT);
    }

    #[test]
    fn test_search_limit() {
        let catalog = many(400);
        assert_eq!(catalog.search("fire").len(), SEARCH_LIMIT);
    }

    #[test]
    fn test_search_name_and_element() {
        let catalog = MonsterCatalog::new(vec![
            item(1, "Lushen", Some("Wind")),
            item(2, "Lushen", Some("Fire")),
            item(3, "Verdehile", Some("Fire")),
        ]);
        assert_eq!(catalog.search("LUSH").len(), 2);
        assert_eq!(catalog.search("lushen wind").len(), 1);
        assert_eq!(catalog.search(" fire ").len(), 2);
        assert!(catalog.search("nothing").is_empty());
    }

    #[test]
    fn test_catalog_sorted() {
        let catalog = MonsterCatalog::new(vec![
            item(2, "Zaiross", Some("Fire")),
            item(1, "Amir", Some("Wind")),
        ]);
        assert_eq!(catalog.search("")[0].id, 1);
        assert_eq!(catalog.get(2).map(|m| m.name.as_str()), Some("Zaiross"));
    }
}
