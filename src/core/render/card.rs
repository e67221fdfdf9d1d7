use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;
use crate::models::Item;

/// Summary card for one item: thumbnail, title, summary, tag chips and a
/// play affordance. The whole card links to the item's detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub item_id: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub chips: Vec<String>,
    pub play_label: String,
    /// Corner badge, e.g. "New" in the home page's new-games section
    pub badge: Option<String>,
}

pub fn card(item: &Item, catalog: &Catalog, i18n: &Localizer) -> Card {
    Card {
        item_id: item.id.clone(),
        path: item.path(),
        title: item.title.clone(),
        description: item.description.clone(),
        thumbnail_url: item.thumbnail_url.clone(),
        chips: chips(item, catalog, i18n),
        play_label: i18n.translate("playGame"),
        badge: None,
    }
}

pub fn cards<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    catalog: &Catalog,
    i18n: &Localizer,
) -> Vec<Card> {
    items
        .into_iter()
        .map(|item| card(item, catalog, i18n))
        .collect()
}

/// Localized tag names for an item, in the item's tag order.
pub(super) fn chips(item: &Item, catalog: &Catalog, i18n: &Localizer) -> Vec<String> {
    item.tags
        .iter()
        .map(|tag_id| i18n.tag_label(tag_id, catalog))
        .collect()
}
