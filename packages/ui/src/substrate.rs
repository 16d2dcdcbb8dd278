//! Shared substrate constructor for all platforms.
//!
//! Returns the [`store::Substrate`] the stores persist into:
//! - **Web** (WASM): browser local storage via [`store::LocalStorage`]
//! - **Native** (`desktop` feature): one file per key via [`store::FileStore`]

/// Substrate type for the current platform.
#[cfg(target_arch = "wasm32")]
pub type AppSubstrate = store::LocalStorage;

/// Substrate type for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub type AppSubstrate = store::FileStore;

/// Create a platform-appropriate substrate.
///
/// On native platforms data lives under `<data_dir>/taskflow/`, falling
/// back to `./taskflow/` when the platform has no data directory.
pub fn make_substrate() -> AppSubstrate {
    #[cfg(target_arch = "wasm32")]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("taskflow");
        store::FileStore::new(base)
    }
}
