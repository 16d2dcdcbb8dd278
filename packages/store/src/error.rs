//! Error types for store operations.
//!
//! Only declines that the user must be told about are errors. Operations on
//! an unknown task id are silent no-ops and never produce one.

use thiserror::Error;

use crate::forms::FieldErrors;

/// Reasons the auth store declines a login or registration.
///
/// The session is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Form input failed validation; nothing was attempted.
    #[error("{}", .0.summary())]
    Invalid(FieldErrors),

    #[error("An account with this email already exists.")]
    DuplicateEmail,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The stored account collection exists but cannot be parsed.
    #[error("Stored accounts could not be read.")]
    UnreadableAccounts,
}

impl AuthError {
    /// Field-level messages, when the decline came from validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
