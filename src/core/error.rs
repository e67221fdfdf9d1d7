//! Custom error types for the portal.
//!
//! None of these are fatal: each boundary logs the error and degrades.
//!
//! - [`CatalogError`] - catalog asset parsing
//! - [`TranslationError`] - translation table parsing
//! - [`StorageError`] - localStorage access for the language preference
//! - [`DomError`] - host document operations

use thiserror::Error;

use crate::models::Language;

/// Catalog asset errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog TOML is malformed
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Translation table errors.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Translation TOML is malformed
    #[error("failed to parse {language} translations: {source}")]
    Parse {
        language: Language,
        #[source]
        source: toml::de::Error,
    },
}

/// Client-local storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed frame, ...)
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to read a key
    #[error("failed to read '{0}' from localStorage")]
    ReadFailed(String),
    /// Failed to write a key
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
}

/// Host document errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window or document not available
    #[error("browser document not available")]
    NoDocument,
    /// A required element is absent from the document
    #[error("element '{0}' not found")]
    MissingElement(String),
    /// The fullscreen request was refused
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}
