//! Catalog Store: the read-only game and tag dataset.
//!
//! Items keep their asset order everywhere (listings, search, home
//! sections). Lookup by id returns the first record carrying that id; later
//! records with the same id still appear in listings.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::{self, tags};
use crate::core::error::CatalogError;
use crate::models::{Item, Tag};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    items: Vec<Item>,
}

/// Immutable list of items and tags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    tags: Vec<Tag>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, tags: Vec<Tag>) -> Self {
        let catalog = Self { items, tags };
        catalog.warn_duplicates();
        catalog
    }

    /// Parse a catalog from its TOML form.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Ok(Self::new(file.items, file.tags))
    }

    /// The compiled-in catalog, or an empty one if the asset is malformed.
    pub fn bundled() -> Self {
        Self::from_toml(config::CATALOG_TOML).unwrap_or_else(|err| {
            tracing::error!(%err, "bundled catalog unusable, starting empty");
            Self::default()
        })
    }

    fn warn_duplicates(&self) {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                tracing::warn!(id = %item.id, "duplicate item id, lookups resolve to the first record");
            }
        }
    }

    /// All items in catalog order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Tag taxonomy in catalog order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// First item with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Items carrying `tag_id`, or every item for the `"all"` sentinel.
    pub fn find_by_tag(&self, tag_id: &str) -> Vec<&Item> {
        if tag_id == tags::ALL {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.has_tag(tag_id)).collect()
    }

    /// Case-insensitive substring search over title and short description.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_query(&needle))
            .collect()
    }

    /// First item marked as featured.
    pub fn featured(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.featured)
    }
}
