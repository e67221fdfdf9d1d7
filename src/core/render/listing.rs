use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;

use super::card::{Card, cards};

/// Cards for one tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingPage {
    pub tag_id: String,
    pub title: String,
    pub cards: Vec<Card>,
    /// Shown when `cards` is empty
    pub empty_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPage {
    pub query: String,
    pub title: String,
    /// Result count line, or the no-results message
    pub summary: String,
    pub cards: Vec<Card>,
}

pub(super) fn tag(tag_id: &str, catalog: &Catalog, i18n: &Localizer) -> ListingPage {
    ListingPage {
        tag_id: tag_id.to_string(),
        title: i18n.tag_label(tag_id, catalog),
        cards: cards(catalog.find_by_tag(tag_id), catalog, i18n),
        empty_message: i18n.translate("noGamesFound"),
    }
}

pub(super) fn search(query: &str, catalog: &Catalog, i18n: &Localizer) -> SearchPage {
    let results = catalog.search(query);
    let summary = match results.len() {
        0 => i18n.translate("noSearchResults"),
        count => {
            let key = if count == 1 {
                "resultCountOne"
            } else {
                "resultCountOther"
            };
            i18n.format(key, &[("count", &count.to_string()), ("query", query)])
        }
    };

    SearchPage {
        query: query.to_string(),
        title: i18n.translate("searchResults"),
        summary,
        cards: cards(results, catalog, i18n),
    }
}
