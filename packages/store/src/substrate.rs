//! # Substrate: the key-value medium every store persists into
//!
//! Both [`crate::TaskStore`] and [`crate::AuthStore`] are constructed on top of a
//! [`Substrate`]: a synchronous, string-keyed, string-valued store modelled on
//! the browser's `localStorage`. The same store logic runs against an in-memory
//! map in tests, a directory of files on native platforms, or real local storage
//! in the browser.
//!
//! ## Implementations
//!
//! | Type | Where | Backing medium |
//! |------|-------|----------------|
//! | [`crate::MemoryStore`] | tests | `HashMap` behind `Arc<Mutex<_>>` |
//! | [`crate::FileStore`] | native builds | one file per key under a base directory |
//! | `LocalStorage` | web (`wasm32` + `web` feature) | `window.localStorage` |
//!
//! ## Failure model
//!
//! The trait has no error channel. Implementations swallow medium failures:
//! a failed read is reported as an absent key, a failed write leaves the
//! previous value in place. They log the failure at `warn` so it is visible
//! in the console.

/// Synchronous key-value storage shared by all stores.
pub trait Substrate {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: Substrate + ?Sized> Substrate for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Well-known substrate keys.
///
/// The names match what the browser app has always written, so existing
/// local storage contents remain readable.
pub mod keys {
    /// JSON-encoded [`crate::UserInfo`] of the current session.
    pub const SESSION: &str = "user";
    /// JSON array of [`crate::Credential`] records.
    pub const REGISTERED_USERS: &str = "registeredUsers";
    /// JSON array of every user's [`crate::Task`] records.
    pub const TASKS: &str = "tasks";
    /// Plain `"dark"` / `"light"`.
    pub const THEME: &str = "theme";
    /// TOML-encoded [`crate::AppConfig`].
    pub const CONFIG: &str = "taskflow.toml";
}
