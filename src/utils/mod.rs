//! Browser bindings.
//!
//! Provides:
//! - [`dom`] - element lookup, class and text updates, static-text translation
//! - [`BrowserHistory`], [`LocalStoragePrefs`] - implementations of the core
//!   history and preference traits

pub mod browser;
pub mod dom;

pub use browser::{BrowserHistory, LocalStoragePrefs};
