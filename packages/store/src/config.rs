//! # Application configuration: `taskflow.toml`
//!
//! Tunables for validation and the live countdown, stored as TOML under the
//! [`keys::CONFIG`](crate::substrate::keys::CONFIG) substrate key. A missing
//! or unparseable entry falls back to [`AppConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [validation]
//! min_title_len = 2
//! min_password_len = 6
//!
//! [countdown]
//! tick_ms = 1000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with substrate load/save and TOML (de)serialisation. |
//! | [`ValidationConfig`] | Minimum title and password lengths used by [`crate::forms`]. |
//! | [`CountdownConfig`] | Tick of the critical-deadline countdown, default **1000 ms**. |
//!
//! Every section is `#[serde(default)]`, so a partial file only overrides
//! what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::substrate::{keys, Substrate};

/// Top-level configuration stored in `taskflow.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
}

/// Form validation limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_min_title_len")]
    pub min_title_len: usize,
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

fn default_min_title_len() -> usize {
    2
}

fn default_min_password_len() -> usize {
    6
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_len: default_min_title_len(),
            min_password_len: default_min_password_len(),
        }
    }
}

/// Live countdown configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Re-evaluation period in milliseconds. Values below 100 are raised to 100.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    1000
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl CountdownConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(100))
    }
}

impl AppConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read from the substrate, falling back to defaults.
    pub fn load(substrate: &impl Substrate) -> Self {
        let Some(raw) = substrate.get(keys::CONFIG) else {
            return Self::default();
        };
        Self::from_toml(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring stored configuration: {e}");
            Self::default()
        })
    }

    pub fn save(&self, substrate: &impl Substrate) -> Result<(), ConfigError> {
        substrate.set(keys::CONFIG, &self.to_toml()?);
        Ok(())
    }
}
