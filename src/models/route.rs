//! Views reachable through path-based navigation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::paths;
use crate::models::ViewMode;

/// Characters escaped in a path segment, matching `encodeURIComponent`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Static informational pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticPage {
    PrivacyPolicy,
    TermsOfService,
    Contact,
}

impl StaticPage {
    pub fn path(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => paths::PRIVACY_POLICY,
            Self::TermsOfService => paths::TERMS_OF_SERVICE,
            Self::Contact => paths::CONTACT,
        }
    }
}

/// A resolved view with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Landing page: `/`
    Home,
    /// Informational page: `/privacy-policy`, `/terms-of-service`, `/contact`
    Static(StaticPage),
    /// Tag listing: `/tag/<id>` (id known to the taxonomy)
    Tag(String),
    /// Search results: `/search/<urlencoded-query>` (decoded query)
    Search(String),
    /// Item detail: `/item/<id>` (id known to the catalog)
    Item(String),
}

impl View {
    /// Canonical path of this view.
    pub fn path(&self) -> String {
        match self {
            Self::Home => paths::HOME.to_string(),
            Self::Static(page) => page.path().to_string(),
            Self::Tag(id) => format!("{}{}", paths::TAG_PREFIX, id),
            Self::Search(query) => search_path(query),
            Self::Item(id) => format!("{}{}", paths::ITEM_PREFIX, id),
        }
    }

    /// Presentation mode this view requires.
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Item(_) => ViewMode::Immersive,
            _ => ViewMode::Chrome,
        }
    }
}

/// Path of the search view for a raw (unencoded) query.
pub fn search_path(query: &str) -> String {
    format!(
        "{}{}",
        paths::SEARCH_PREFIX,
        utf8_percent_encode(query, SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_paths() {
        assert_eq!(View::Home.path(), "/");
        assert_eq!(View::Static(StaticPage::Contact).path(), "/contact");
        assert_eq!(View::Tag("new".to_string()).path(), "/tag/new");
        assert_eq!(View::Item("abc".to_string()).path(), "/item/abc");
    }

    #[test]
    fn test_search_path_encodes_query() {
        assert_eq!(search_path("Dungeon"), "/search/Dungeon");
        assert_eq!(search_path("sea monsters"), "/search/sea%20monsters");
        assert_eq!(search_path("a/b"), "/search/a%2Fb");
        assert_eq!(search_path("sci-fi"), "/search/sci-fi");
    }

    #[test]
    fn test_only_item_is_immersive() {
        assert_eq!(View::Item("x".to_string()).mode(), ViewMode::Immersive);
        assert_eq!(View::Home.mode(), ViewMode::Chrome);
        assert_eq!(View::Search(String::new()).mode(), ViewMode::Chrome);
        assert_eq!(View::Static(StaticPage::PrivacyPolicy).mode(), ViewMode::Chrome);
    }
}
