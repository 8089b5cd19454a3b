//! Item registry seam.
//!
//! The selector never owns its items. Hosts implement `ItemRegistry`;
//! `StaticRegistry` covers the common case of a fixed list, optionally
//! loaded from a YAML file:
//!
//! ```yaml
//! items:
//!   - id: post
//!     display_name: Posts
//!   - id: nav_menu_item
//!     display_name: Navigation Menu Items
//!     public: false
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::Item;

/// Read-only source of selectable items.
pub trait ItemRegistry: Send + Sync {
    /// Items in registry order, restricted to `filter` ids when given.
    fn list(&self, filter: Option<&[String]>) -> Vec<Item>;
}

/// Keep items whose id appears in `filter`, preserving the order of `items`.
pub fn filter_items<'a>(items: &'a [Item], filter: Option<&[String]>) -> Vec<&'a Item> {
    match filter {
        None => items.iter().collect(),
        Some(ids) => items
            .iter()
            .filter(|item| ids.iter().any(|id| *id == item.id))
            .collect(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    items: Vec<Item>,
}

/// A fixed, in-memory item registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticRegistry {
    items: Vec<Item>,
}

impl StaticRegistry {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load a registry from a YAML file. Duplicate ids are rejected.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FieldsError::RegistryNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).await?;
        let registry = Self::from_yaml(&content)?;
        debug!(?path, items = registry.items.len(), "item registry loaded");
        Ok(registry)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(content)?;
        let mut seen = HashSet::new();
        for item in &file.items {
            if !seen.insert(item.id.as_str()) {
                return Err(FieldsError::DuplicateItem {
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self::new(file.items))
    }

    /// Only the items flagged public.
    pub fn public(&self) -> Self {
        Self::new(self.items.iter().filter(|i| i.public).cloned().collect())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRegistry for StaticRegistry {
    fn list(&self, filter: Option<&[String]>) -> Vec<Item> {
        filter_items(&self.items, filter)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl FromIterator<Item> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> StaticRegistry {
        StaticRegistry::new(vec![
            Item::new("post", "Posts"),
            Item::new("page", "Pages"),
            Item::new("attachment", "Media"),
            Item::new("nav_menu_item", "Navigation Menu Items").private(),
        ])
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn list_without_filter_returns_everything() {
        let registry = sample();
        assert_eq!(registry.list(None).len(), 4);
    }

    #[test]
    fn filter_keeps_registry_order() {
        let registry = sample();
        let filter = vec!["attachment".to_string(), "post".to_string()];
        assert_eq!(ids(&registry.list(Some(&filter))), vec!["post", "attachment"]);
    }

    #[test]
    fn unknown_filter_ids_match_nothing() {
        let registry = sample();
        let filter = vec!["custom_xyz".to_string()];
        assert!(registry.list(Some(&filter)).is_empty());
    }

    #[test]
    fn public_drops_private_items() {
        let registry = sample().public();
        assert_eq!(ids(registry.items()), vec!["post", "page", "attachment"]);
    }

    #[test]
    fn from_yaml_parses_items() {
        let registry = StaticRegistry::from_yaml(
            "items:\n  - id: post\n    display_name: Posts\n  - id: page\n    display_name: Pages\n    public: false\n",
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.items()[1].public);
    }

    #[test]
    fn from_yaml_rejects_duplicates() {
        let err = StaticRegistry::from_yaml(
            "items:\n  - id: post\n    display_name: Posts\n  - id: post\n    display_name: Again\n",
        )
        .unwrap_err();
        assert!(matches!(err, FieldsError::DuplicateItem { id } if id == "post"));
    }

    #[test]
    fn from_yaml_empty_document() {
        let registry = StaticRegistry::from_yaml("items: []\n").unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("registry.yaml");
        std::fs::write(
            &path,
            "items:\n  - id: post\n    display_name: Posts\n",
        )
        .unwrap();
        let registry = StaticRegistry::load(&path).await.unwrap();
        assert_eq!(registry.items(), &[Item::new("post", "Posts")]);
    }

    #[tokio::test]
    async fn load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = StaticRegistry::load(tmp.path().join("nope.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, FieldsError::RegistryNotFound { .. }));
    }
}
