//! View Renderer.
//!
//! Turns a resolved [`View`] into a plain page model: localized strings,
//! card fragments and links, with no DOM in sight. The Leptos components in
//! `components::content` draw these models, and native tests assert on them
//! directly.

mod card;
mod detail;
mod document;
mod home;
mod listing;
mod sidebar;

pub use card::{Card, card, cards};
pub use detail::{DescriptionBlock, DetailPage, parse_description};
pub use document::{ContactChannel, ContactForm, ContactPage, DocumentPage, DocumentSection, Link};
pub use home::{AboutBlock, CardSection, Hero, HomePage};
pub use listing::{ListingPage, SearchPage};
pub use sidebar::{SidebarEntry, SidebarModel, sidebar};

use crate::config::tags;
use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;
use crate::models::{StaticPage, View};

/// Rendered content for the content region.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home(HomePage),
    Listing(ListingPage),
    Search(SearchPage),
    Detail(DetailPage),
    Document(DocumentPage),
    Contact(ContactPage),
}

/// Build the page model for `view`.
///
/// Returns `None` when the view references an item that no longer exists.
pub fn page(view: &View, catalog: &Catalog, i18n: &Localizer) -> Option<Page> {
    let page = match view {
        View::Home => Page::Home(home::build(catalog, i18n)),
        View::Static(StaticPage::Contact) => Page::Contact(document::contact(i18n)),
        View::Static(page) => Page::Document(document::legal(*page, i18n)),
        View::Tag(tag_id) => Page::Listing(listing::tag(tag_id, catalog, i18n)),
        View::Search(query) => Page::Search(listing::search(query, catalog, i18n)),
        View::Item(id) => Page::Detail(detail::build(catalog.find_by_id(id)?, catalog, i18n)),
    };
    Some(page)
}

/// Tags the sidebar should highlight for `view`, or `None` to leave the
/// current highlighting untouched.
pub fn highlight_for(view: &View, catalog: &Catalog) -> Option<Vec<String>> {
    match view {
        View::Home | View::Search(_) => Some(vec![tags::ALL.to_string()]),
        View::Tag(tag_id) => Some(vec![tag_id.clone()]),
        View::Item(id) => catalog.find_by_id(id).map(|item| item.tags.clone()),
        View::Static(_) => None,
    }
}
