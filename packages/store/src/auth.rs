//! # Auth store: session state and registered accounts
//!
//! [`AuthStore`] owns two things:
//!
//! - the current [`Session`], persisted as JSON under [`keys::SESSION`] while
//!   someone is signed in and removed on logout;
//! - the registered-account collection under [`keys::REGISTERED_USERS`], which
//!   only grows (there is no update or delete).
//!
//! ## Session transitions
//!
//! | Action | From | To |
//! |--------|------|----|
//! | `Login(user)` | anonymous / authenticated | authenticated as `user` |
//! | `Register(user)` | anonymous / authenticated | authenticated as `user` |
//! | `Logout` | any | anonymous |
//!
//! [`reduce`] is the pure transition function; [`AuthStore`] applies it and
//! then mirrors the session into the substrate.
//!
//! ## Declines
//!
//! [`AuthStore::login`] and [`AuthStore::register`] validate their form, then
//! check the account collection. Any failure comes back as an [`AuthError`]
//! and leaves both the session and the collection untouched. A collection
//! that is stored but cannot be parsed declines both operations, so a
//! registration never replaces accounts it could not read.
//!
//! Passwords are stored and compared verbatim. Hashing them would change the
//! stored format that existing browser data relies on.

use serde::Deserialize;

use crate::config::ValidationConfig;
use crate::error::AuthError;
use crate::forms::{LoginForm, RegisterForm};
use crate::models::{Credential, UserInfo};
use crate::substrate::{keys, Substrate};

/// Current session identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserInfo>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: UserInfo) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Closed set of session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login(UserInfo),
    Register(UserInfo),
    Logout,
}

/// Apply one action to the session.
pub fn reduce(_session: Session, action: AuthAction) -> Session {
    match action {
        AuthAction::Login(user) | AuthAction::Register(user) => Session::authenticated(user),
        AuthAction::Logout => Session::anonymous(),
    }
}

/// Session plus registered accounts, persisted to a [`Substrate`].
pub struct AuthStore<S: Substrate> {
    substrate: S,
    session: Session,
    validation: ValidationConfig,
}

impl<S: Substrate> AuthStore<S> {
    /// Restore a persisted session, if any.
    pub fn open(substrate: S) -> Self {
        let session = match read_json::<UserInfo>(&substrate, keys::SESSION) {
            Some(user) => {
                tracing::debug!("Restored session for {}", user.email);
                Session::authenticated(user)
            }
            None => Session::anonymous(),
        };
        Self {
            substrate,
            session,
            validation: ValidationConfig::default(),
        }
    }

    /// Use non-default validation limits.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sign in with an existing account. On success the session carries the
    /// stored name.
    pub fn login(&mut self, form: &LoginForm) -> Result<UserInfo, AuthError> {
        form.validate(&self.validation).map_err(AuthError::Invalid)?;

        let email = form.email.trim();
        let user = self
            .stored_credentials()?
            .into_iter()
            .find(|c| c.email == email && c.password == form.password)
            .map(|c| c.to_info())
            .ok_or_else(|| {
                tracing::info!("Rejected login for {email}");
                AuthError::InvalidCredentials
            })?;

        tracing::info!("Logged in {}", user.email);
        self.dispatch(AuthAction::Login(user.clone()));
        Ok(user)
    }

    /// Create an account and sign in as it.
    pub fn register(&mut self, form: &RegisterForm) -> Result<UserInfo, AuthError> {
        form.validate(&self.validation).map_err(AuthError::Invalid)?;

        let email = form.email.trim();
        let mut credentials = self.stored_credentials()?;
        if credentials.iter().any(|c| c.email == email) {
            tracing::info!("Rejected duplicate registration for {email}");
            return Err(AuthError::DuplicateEmail);
        }

        let credential = Credential {
            name: form.name.trim().to_string(),
            email: email.to_string(),
            password: form.password.clone(),
        };
        let user = credential.to_info();
        credentials.push(credential);
        write_json(&self.substrate, keys::REGISTERED_USERS, &credentials);

        tracing::info!("Registered {}", user.email);
        self.dispatch(AuthAction::Register(user.clone()));
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(email) = self.session.email() {
            tracing::info!("Logged out {email}");
        }
        self.dispatch(AuthAction::Logout);
    }

    /// Registered accounts; empty when absent or unreadable.
    pub fn credentials(&self) -> Vec<Credential> {
        self.stored_credentials().unwrap_or_default()
    }

    /// Registered accounts, distinguishing "none yet" from a collection that
    /// is present but cannot be parsed. The latter must never be overwritten.
    fn stored_credentials(&self) -> Result<Vec<Credential>, AuthError> {
        let Some(raw) = self.substrate.get(keys::REGISTERED_USERS) else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("Unreadable {}: {e}", keys::REGISTERED_USERS);
            AuthError::UnreadableAccounts
        })
    }

    fn dispatch(&mut self, action: AuthAction) {
        let session = std::mem::take(&mut self.session);
        self.session = reduce(session, action);
        self.persist();
    }

    fn persist(&self) {
        match self.session.user() {
            Some(user) => write_json(&self.substrate, keys::SESSION, user),
            None => self.substrate.remove(keys::SESSION),
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(substrate: &impl Substrate, key: &str) -> Option<T> {
    let raw = substrate.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring unreadable {key}: {e}");
            None
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(substrate: &impl Substrate, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => substrate.set(key, &json),
        Err(e) => tracing::warn!("Failed to serialize {key}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use pretty_assertions::assert_eq;

    fn registered(substrate: &MemoryStore) -> AuthStore<MemoryStore> {
        let mut auth = AuthStore::open(substrate.clone());
        auth.register(&RegisterForm::new("Ana", "ana@x.com", "secret1", "secret1"))
            .unwrap();
        auth.logout();
        auth
    }

    #[test]
    fn test_reduce() {
        let user = UserInfo::new("Ana", "ana@x.com");
        let s = reduce(Session::anonymous(), AuthAction::Login(user.clone()));
        assert_eq!(s.user(), Some(&user));
        let s = reduce(s, AuthAction::Logout);
        assert!(!s.is_authenticated());
        let s = reduce(s, AuthAction::Register(user.clone()));
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_register_then_session_persisted() {
        let substrate = MemoryStore::new();
        let mut auth = AuthStore::open(substrate.clone());
        let user = auth
            .register(&RegisterForm::new(" Ana ", "ana@x.com", "secret1", "secret1"))
            .unwrap();
        assert_eq!(user, UserInfo::new("Ana", "ana@x.com"));
        assert_eq!(auth.session().user(), Some(&user));

        let stored: UserInfo =
            serde_json::from_str(&substrate.get(keys::SESSION).unwrap()).unwrap();
        assert_eq!(stored, user);

        let creds = auth.credentials();
        assert_eq!(creds.len(), 1);
        assert_eq!(creds[0].password, "secret1");
    }

    #[test]
    fn test_duplicate_registration_declined() {
        let substrate = MemoryStore::new();
        let mut auth = registered(&substrate);

        let err = auth
            .register(&RegisterForm::new("Other", "ana@x.com", "another", "another"))
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateEmail);
        assert_eq!(err.to_string(), "An account with this email already exists.");
        assert!(!auth.session().is_authenticated());
        assert_eq!(auth.credentials().len(), 1);
    }

    #[test]
    fn test_wrong_password_declined() {
        let substrate = MemoryStore::new();
        let mut auth = registered(&substrate);

        let err = auth
            .login(&LoginForm::new("ana@x.com", "wrong-pw"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password.");
        assert_eq!(auth.session(), &Session::anonymous());
        assert!(substrate.get(keys::SESSION).is_none());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let substrate = MemoryStore::new();
        let mut auth = registered(&substrate);
        auth.login(&LoginForm::new("ana@x.com", "secret1")).unwrap();
        let before = auth.session().clone();

        assert!(auth.login(&LoginForm::new("ana@x.com", "nope-nope")).is_err());
        assert_eq!(auth.session(), &before);
    }

    #[test]
    fn test_login_takes_stored_name() {
        let substrate = MemoryStore::new();
        let mut auth = registered(&substrate);

        let user = auth.login(&LoginForm::new("ana@x.com", "secret1")).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(auth.session().email(), Some("ana@x.com"));
    }

    #[test]
    fn test_login_ignores_surrounding_whitespace_in_email() {
        let substrate = MemoryStore::new();
        let mut auth = registered(&substrate);

        let user = auth
            .login(&LoginForm::new("  ana@x.com ", "secret1"))
            .unwrap();
        assert_eq!(user.email, "ana@x.com");
        // Passwords are compared verbatim
        assert!(auth.login(&LoginForm::new("ana@x.com", " secret1")).is_err());
    }

    #[test]
    fn test_invalid_form_declined_before_lookup() {
        let substrate = MemoryStore::new();
        let mut auth = AuthStore::open(substrate.clone());
        let err = auth.login(&LoginForm::new("bad", "x")).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.get("email").is_some());
        assert!(fields.get("password").is_some());
        assert_eq!(err.to_string(), "Please fix 2 errors before submitting.");
    }

    #[test]
    fn test_logout_removes_session() {
        let substrate = MemoryStore::new();
        let mut auth = AuthStore::open(substrate.clone());
        auth.register(&RegisterForm::new("Ana", "ana@x.com", "secret1", "secret1"))
            .unwrap();
        auth.logout();
        assert!(substrate.get(keys::SESSION).is_none());
        assert!(!AuthStore::open(substrate).session().is_authenticated());
    }

    #[test]
    fn test_restore_ignores_garbage() {
        let substrate = MemoryStore::new();
        substrate.set(keys::SESSION, "not json");
        assert!(!AuthStore::open(substrate).session().is_authenticated());
    }

    #[test]
    fn test_register_keeps_accounts_without_name() {
        let substrate = MemoryStore::new();
        substrate.set(
            keys::REGISTERED_USERS,
            r#"[{"name":"Ana","email":"ana@x.com","password":"secret1"},{"email":"b@x.com","password":"secret2"}]"#,
        );
        let mut auth = AuthStore::open(substrate.clone());
        assert_eq!(
            auth.login(&LoginForm::new("b@x.com", "secret2")).unwrap().display_name(),
            "b@x.com"
        );
        auth.logout();

        auth.register(&RegisterForm::new("Cy", "c@x.com", "secret3", "secret3"))
            .unwrap();
        auth.logout();

        let emails: Vec<String> = auth.credentials().into_iter().map(|c| c.email).collect();
        assert_eq!(emails, ["ana@x.com", "b@x.com", "c@x.com"]);
        assert!(auth.login(&LoginForm::new("ana@x.com", "secret1")).is_ok());
    }

    #[test]
    fn test_unreadable_accounts_are_never_overwritten() {
        let substrate = MemoryStore::new();
        let garbage = r#"[{"email":"ana@x.com"}"#;
        substrate.set(keys::REGISTERED_USERS, garbage);
        let mut auth = AuthStore::open(substrate.clone());

        let err = auth
            .register(&RegisterForm::new("Cy", "c@x.com", "secret3", "secret3"))
            .unwrap_err();
        assert_eq!(err, AuthError::UnreadableAccounts);
        assert_eq!(substrate.get(keys::REGISTERED_USERS).as_deref(), Some(garbage));
        assert!(!auth.session().is_authenticated());

        let err = auth.login(&LoginForm::new("ana@x.com", "secret1")).unwrap_err();
        assert_eq!(err, AuthError::UnreadableAccounts);
        assert!(auth.credentials().is_empty());
    }

    #[test]
    fn test_custom_password_length() {
        let substrate = MemoryStore::new();
        let mut auth = AuthStore::open(substrate).with_validation(ValidationConfig {
            min_title_len: 2,
            min_password_len: 10,
        });
        let err = auth
            .register(&RegisterForm::new("Ana", "ana@x.com", "secret1", "secret1"))
            .unwrap_err();
        assert!(err.field_errors().is_some());
    }
}
