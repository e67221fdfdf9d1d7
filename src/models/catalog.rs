//! Catalog records: games and their category tags.

use serde::Deserialize;

use crate::config::paths;

/// A category usable as a filter predicate over items.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// Unique id; `"all"` is the no-filter sentinel.
    pub id: String,
    /// English display name (localized through `tag.<id>` keys).
    pub name: String,
}

impl Tag {
    /// Path of this tag's listing view.
    pub fn path(&self) -> String {
        format!("{}{}", paths::TAG_PREFIX, self.id)
    }
}

/// A catalog entry ("game").
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    /// One-line summary shown on cards and matched by search.
    pub description: String,
    /// Free text: `-` bullet lines, `:` header lines, paragraph lines.
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    /// Source of the embedded content frame.
    pub content_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub controls: String,
}

impl Item {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }

    /// Path of this item's detail view.
    pub fn path(&self) -> String {
        format!("{}{}", paths::ITEM_PREFIX, self.id)
    }

    /// Case-insensitive substring match on title or short description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
