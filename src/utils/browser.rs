//! Browser-backed implementations of the core storage and history traits.

use wasm_bindgen::JsValue;

use crate::core::error::StorageError;
use crate::core::history::History;
use crate::core::prefs::PreferenceStore;
use crate::utils::dom::{local_storage, window};

/// `window.history` with pathname-based entries.
///
/// `back()` returns immediately; the browser fires `popstate` once the
/// transition happened.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&mut self, path: &str) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            tracing::warn!(path, "history unavailable, navigation not recorded");
            return;
        };
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            tracing::warn!(path, ?err, "pushState failed");
        }
    }

    fn back(&mut self) {
        if let Some(history) = window().and_then(|w| w.history().ok())
            && let Err(err) = history.back()
        {
            tracing::warn!(?err, "history.back failed");
        }
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePrefs;

impl PreferenceStore for LocalStoragePrefs {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed(key.to_string()))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}
