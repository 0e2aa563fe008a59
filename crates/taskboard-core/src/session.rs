//! Authentication session.
//!
//! [`SessionStore`] holds the signed-in user and access token, persists the
//! token, and restores it at startup. Restoration happens in two phases:
//!
//! 1. [`SessionStore::open`] reads the persisted token and checks its expiry
//!    locally. Expired or undecodable tokens are discarded immediately.
//! 2. Otherwise it hands back a [`PendingValidation`]. The caller runs
//!    [`validate`] against the backend and feeds the outcome to
//!    [`SessionStore::apply_validation`].
//!
//! Until phase 2 resolves, [`SessionStore::loading`] is true and route guards
//! render a placeholder instead of redirecting.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::ValidationError;
use crate::guard::{guard, GuardDecision};
use crate::storage::KeyValueStore;
use crate::token;

/// Storage key of the persisted access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Upper bound on the startup validation request.
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Role of a signed-in user. Roles are compared by strict equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// Profile of the signed-in user, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The current session.
///
/// The role is read from the user profile, so a session has a role exactly
/// when it has a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
    access_token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }
}

/// Checks a token against the backend.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Returns the profile of the token's owner if the backend accepts it.
    async fn validate_token(&self, token: &str) -> Result<UserProfile, ValidationError>;
}

/// A persisted token awaiting backend validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    token: String,
    epoch: u64,
}

impl PendingValidation {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Validates `pending` through `validator`, giving up after `timeout`.
pub async fn validate<V>(
    pending: &PendingValidation,
    validator: &V,
    timeout: Duration,
) -> Result<UserProfile, ValidationError>
where
    V: TokenValidator + ?Sized,
{
    match tokio::time::timeout(timeout, validator.validate_token(&pending.token)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ValidationError::TimedOut),
    }
}

/// Owner of the session state and of the persisted access token.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    session: Session,
    loading: bool,
    /// Bumped by login, logout and unmount so stale validation results are dropped.
    epoch: u64,
    mounted: bool,
}

impl SessionStore {
    /// Restores the session from `storage` using the system clock.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> (Self, Option<PendingValidation>) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::open_at(storage, now)
    }

    /// Restores the session from `storage` as of `now` (seconds since the Unix epoch).
    pub fn open_at(storage: Arc<dyn KeyValueStore>, now: u64) -> (Self, Option<PendingValidation>) {
        let mut store = Self {
            storage,
            session: Session::default(),
            loading: false,
            epoch: 0,
            mounted: true,
        };

        let Some(persisted) = store.storage.get(ACCESS_TOKEN_KEY) else {
            tracing::debug!("No persisted access token");
            return (store, None);
        };

        match token::is_expired(&persisted, now) {
            Ok(false) => {
                store.loading = true;
                let pending = PendingValidation {
                    token: persisted,
                    epoch: store.epoch,
                };
                (store, Some(pending))
            }
            Ok(true) => {
                tracing::info!("Persisted access token expired, discarding");
                store.forget_token();
                (store, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted access token unreadable, discarding");
                store.forget_token();
                (store, None)
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True until the startup validation has resolved.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Access decision for a subtree requiring `required` (or any signed-in user).
    #[must_use]
    pub fn guard(&self, required: Option<Role>) -> GuardDecision {
        guard(self.loading, &self.session, required)
    }

    /// Signs in and persists `access_token`.
    pub fn login(&mut self, profile: UserProfile, access_token: String) {
        if let Err(e) = self.storage.set(ACCESS_TOKEN_KEY, &access_token) {
            tracing::warn!(error = %e, "Failed to persist access token");
        }
        tracing::info!(user = %profile.name, role = %profile.role, "Logged in");
        self.session = Session {
            user: Some(profile),
            access_token: Some(access_token),
        };
        self.loading = false;
        self.epoch += 1;
    }

    /// Signs out and removes the persisted token, whatever the prior state.
    pub fn logout(&mut self) {
        self.forget_token();
        self.loading = false;
        self.epoch += 1;
        tracing::info!("Logged out");
    }

    /// Marks the store's owner as gone. Validation results arriving later
    /// are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.epoch += 1;
    }

    /// Applies the outcome of [`validate`] for `pending`.
    ///
    /// Returns false, leaving the store untouched, when the store was
    /// unmounted or a login/logout happened since `pending` was issued.
    pub fn apply_validation(
        &mut self,
        pending: PendingValidation,
        outcome: Result<UserProfile, ValidationError>,
    ) -> bool {
        if !self.mounted || pending.epoch != self.epoch {
            tracing::debug!("Discarding stale token validation");
            return false;
        }

        match outcome {
            Ok(profile) => {
                tracing::info!(user = %profile.name, role = %profile.role, "Restored session");
                self.session = Session {
                    user: Some(profile),
                    access_token: Some(pending.token),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted access token rejected");
                self.forget_token();
            }
        }
        self.loading = false;
        true
    }

    fn forget_token(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.storage.remove(ACCESS_TOKEN_KEY) {
            tracing::warn!(error = %e, "Failed to remove persisted access token");
        }
    }
}
