//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the portal.
//! Data assets are loaded at compile time using `include_str!`.

use crate::models::Language;

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Game catalog: tag taxonomy and item records.
pub const CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

/// English translation table.
pub const EN_TOML: &str = include_str!("../assets/i18n/en.toml");

/// Chinese translation table.
pub const ZH_TOML: &str = include_str!("../assets/i18n/zh.toml");

/// Privacy policy document.
pub const PRIVACY_POLICY_TOML: &str = include_str!("../assets/pages/privacy-policy.toml");

/// Terms of service document.
pub const TERMS_OF_SERVICE_TOML: &str = include_str!("../assets/pages/terms-of-service.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name used in log lines and the contact page.
pub const APP_NAME: &str = "MonsterSurvivors.com";

/// Contact e-mail shown on the contact page.
pub const CONTACT_EMAIL: &str = "contact@monstersurvivors.com";

/// Public website shown on the contact page.
pub const CONTACT_WEBSITE: &str = "https://monstersurvivors.com";

/// Social links shown on the contact page: (label, url).
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "https://twitter.com/monstersurvivors"),
    ("Discord", "https://discord.gg/monstersurvivors"),
];

// =============================================================================
// Localization
// =============================================================================

/// localStorage key holding the language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Language used when no valid preference is stored.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Prefix of translation keys carrying localized tag names.
pub const TAG_KEY_PREFIX: &str = "tag.";

// =============================================================================
// Routing
// =============================================================================

/// Navigable path constants.
pub mod paths {
    pub const HOME: &str = "/";
    pub const PRIVACY_POLICY: &str = "/privacy-policy";
    pub const TERMS_OF_SERVICE: &str = "/terms-of-service";
    pub const CONTACT: &str = "/contact";

    /// Item-detail prefix; the trailing segment is the item id.
    pub const ITEM_PREFIX: &str = "/item/";
    /// Tag-listing prefix; the trailing segment is the tag id.
    pub const TAG_PREFIX: &str = "/tag/";
    /// Search prefix; the trailing segment is the percent-encoded query.
    pub const SEARCH_PREFIX: &str = "/search/";
}

/// Consecutive redirects tolerated before resolution gives up.
pub const MAX_REDIRECTS: usize = 8;

// =============================================================================
// Catalog
// =============================================================================

/// Tag ids with special meaning.
pub mod tags {
    /// Sentinel meaning "no filter".
    pub const ALL: &str = "all";
    /// Membership tag for the home page "popular" section.
    pub const POPULAR: &str = "popular";
    /// Membership tag for the home page "new" section.
    pub const NEW: &str = "new";
}

/// Maximum number of cards in each home page section.
pub const HOME_SECTION_LIMIT: usize = 3;

// =============================================================================
// Host Document
// =============================================================================

/// Render targets and controls in `index.html`.
pub mod dom_ids {
    pub const CONTENT: &str = "main-content";
    pub const SIDEBAR: &str = "sidebar";
    pub const HEADER: &str = "site-header";
    pub const FOOTER: &str = "site-footer";
    pub const SEARCH_FORM: &str = "search-form";
    pub const SEARCH_INPUT: &str = "search-input";
    pub const LANGUAGE_BUTTON: &str = "language-button";
    pub const LANGUAGE_DROPDOWN: &str = "language-dropdown";
    pub const CURRENT_LANGUAGE: &str = "current-language";
    pub const MENU_BUTTON: &str = "mobile-menu-button";
}

/// Attribute naming the translation key of an element's text.
pub const I18N_ATTR: &str = "data-i18n";

/// Attribute naming the translation key of an input placeholder.
pub const I18N_PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";

/// Attribute carrying a language code on language options.
pub const LANG_ATTR: &str = "data-lang";

/// Below this width the navigation panel becomes a toggled overlay.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 767px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
