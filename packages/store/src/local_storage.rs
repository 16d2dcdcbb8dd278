//! # Browser local storage substrate
//!
//! [`LocalStorage`] is the [`Substrate`] used on the **web platform**. Every
//! call goes straight to `window.localStorage` via [`web_sys::Storage`].
//!
//! ## Error handling
//!
//! Local storage can be unavailable (private browsing, disabled storage) or
//! full. Reads then return `None` and writes are dropped with a `warn` log;
//! the UI keeps working on its in-memory state for the rest of the session.

use web_sys::Storage;

use crate::substrate::Substrate;

/// `window.localStorage`-backed Substrate for the web platform.
///
/// Zero-size and `Clone`: the storage handle is looked up on every call,
/// which is cheap because the browser caches it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Substrate for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
