//! # Filesystem-backed substrate
//!
//! [`FileStore`] is a [`Substrate`] implementation that persists each key as a
//! file in a base directory. It is used on desktop and mobile platforms to
//! retain tasks and the session across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user              # session JSON
//! ├── registeredUsers   # credential JSON array
//! ├── tasks             # task JSON array
//! ├── theme             # "dark" | "light"
//! └── taskflow.toml     # configuration
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/taskflow/` |
//! | Linux | `~/.local/share/taskflow/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\taskflow\` |

use std::path::{Path, PathBuf};

use crate::substrate::Substrate;

/// Filesystem-backed Substrate for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; never let one escape the base directory.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl Substrate for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write key {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}
