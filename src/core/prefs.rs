//! Persisted client-local preferences.
//!
//! Only the display language is persisted. Reads happen once at startup and
//! writes on every explicit switch; failures are logged and never propagated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::LANGUAGE_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Language;

/// Client-local key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write, like localStorage in a
    /// locked-down browser.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted language, keeping `fallback` when it is absent,
/// unrecognized or unreadable.
pub fn load_language(store: &dyn PreferenceStore, fallback: Language) -> Language {
    match store.load(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
            tracing::debug!(%code, "ignoring unrecognized language preference");
            fallback
        }),
        Ok(None) => fallback,
        Err(err) => {
            tracing::warn!(%err, "failed to read language preference");
            fallback
        }
    }
}

/// Persist `language`; failures are logged.
pub fn save_language(store: &mut dyn PreferenceStore, language: Language) {
    if let Err(err) = store.save(LANGUAGE_STORAGE_KEY, language.code()) {
        tracing::warn!(%err, "failed to save language preference");
    }
}
