//! `localStorage` backend for the preference store.

use jaque_core::KeyValueStore;
use web_sys::Storage;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Web-specific key-value storage using `localStorage`
///
/// Pages where storage is blocked still get a working store: reads come back empty and writes
/// report [`WebStorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    /// Bind to the window's `localStorage`, if any.
    #[must_use]
    pub fn local() -> Self {
        let storage = match dom::local_storage() {
            Ok(storage) => Some(storage),
            Err(err) => {
                log::debug!("localStorage unavailable: {}", dom::js_error_message(&err));
                None
            }
        };
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, WebStorageError> {
        self.storage.as_ref().ok_or(WebStorageError::Unavailable)
    }
}

impl KeyValueStore for WebStorage {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.handle()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
