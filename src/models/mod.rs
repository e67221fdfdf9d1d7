//! Data models and types for the portal.
//!
//! Contains domain types for:
//! - [`Item`], [`Tag`] - Catalog records
//! - [`Language`] - Display languages
//! - [`View`], [`StaticPage`] - Navigable views
//! - [`ViewMode`], [`Layout`], [`Region`] - Presentation of host regions

mod catalog;
mod language;
mod layout;
mod route;

pub use catalog::{Item, Tag};
pub use language::Language;
pub use layout::{Layout, PanelState, Region, RegionChange, RegionState, ViewMode};
pub use route::{StaticPage, View, search_path};
