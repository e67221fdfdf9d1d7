use std::collections::BTreeSet;

use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    pub tag_id: String,
    pub label: String,
    pub path: String,
    pub highlighted: bool,
}

/// Tag navigation panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarModel {
    pub heading: String,
    pub entries: Vec<SidebarEntry>,
}

impl SidebarModel {
    pub fn highlighted(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.highlighted)
            .map(|e| e.tag_id.as_str())
    }
}

/// One entry per tag, in taxonomy order.
pub fn sidebar(catalog: &Catalog, i18n: &Localizer, highlighted: &BTreeSet<String>) -> SidebarModel {
    SidebarModel {
        heading: i18n.translate("gameCategories"),
        entries: catalog
            .tags()
            .iter()
            .map(|tag| SidebarEntry {
                tag_id: tag.id.clone(),
                label: i18n.tag_name(tag),
                path: tag.path(),
                highlighted: highlighted.contains(&tag.id),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::fixtures::catalog;
    use crate::core::i18n::fixtures::localizer;

    #[test]
    fn test_sidebar_entries() {
        let highlighted = BTreeSet::from(["popular".to_string(), "dungeon".to_string()]);
        let model = sidebar(&catalog(), &localizer(), &highlighted);

        assert_eq!(model.heading, "Game Categories");
        assert_eq!(model.entries.len(), 6);
        assert_eq!(model.entries[0].path, "/tag/all");
        assert_eq!(model.highlighted().collect::<Vec<_>>(), vec!["dungeon", "popular"]);
    }
}
