//! Core portal logic, independent of the browser.
//!
//! This module provides:
//! - [`Catalog`] item and tag lookup
//! - [`Localizer`] language state and translation tables
//! - [`Router`] navigation, layout and drag handling driven by [`Event`]s
//! - [`render`] page models for every view
//!
//! Browser bindings implement [`History`], [`Host`] and [`PreferenceStore`];
//! tests use the in-memory versions.

pub mod catalog;
pub mod dispatch;
pub mod drag;
pub mod error;
pub mod history;
pub mod i18n;
pub mod panel;
pub mod prefs;
pub mod render;
pub mod router;
pub mod routes;

pub use catalog::Catalog;
pub use dispatch::{Dispatcher, Event, Mailbox, Pump};
pub use drag::{DragController, Point, WindowPlacement};
pub use history::{History, MemoryHistory};
pub use i18n::{Localizer, Translations};
pub use panel::MobilePanel;
pub use prefs::{MemoryPrefs, PreferenceStore};
pub use router::{Host, NavigationState, Router};
pub use routes::{Outcome, RouteTable};
