//! # Application State
//!
//! Global state management using Dioxus signals and context.

use std::sync::Arc;

use dioxus::prelude::*;
use taskboard_core::{
    persist_language, restore_language, Direction, FileStore, GuardDecision, KeyValueStore,
    Label, MemoryStore, PendingValidation, Role, SessionStore, UserProfile,
};

use crate::api::ApiClient;
use crate::config::Config;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///
///     rsx! {
///         p { "{state.tr(Label::Projects)}" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Signal<Config>,

    /// Whether the API answered the last health check.
    pub connected: Signal<bool>,

    /// Active language code.
    pub language: Signal<String>,

    /// Session owner; the only place the access token lives in memory.
    pub session: Signal<SessionStore>,

    /// Persisted token awaiting validation, taken once by the root component.
    pending_validation: Signal<Option<PendingValidation>>,

    storage: Signal<Arc<dyn KeyValueStore>>,
}

impl AppState {
    /// Creates the application state, loading config and local storage from disk.
    ///
    /// A persisted access token is checked for expiry here; backend
    /// validation is started by the root component.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();

        let storage: Arc<dyn KeyValueStore> = match Config::storage_path() {
            Some(path) => Arc::new(FileStore::open(path)),
            None => {
                tracing::warn!("Could not determine config directory, storage will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        let language = restore_language(storage.as_ref());
        let (session, pending) = SessionStore::open(Arc::clone(&storage));

        Self {
            config: Signal::new(config),
            connected: Signal::new(false),
            language: Signal::new(language),
            session: Signal::new(session),
            pending_validation: Signal::new(pending),
            storage: Signal::new(storage),
        }
    }

    /// Creates an [`ApiClient`] carrying the current access token.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        let token = self
            .session
            .read()
            .session()
            .access_token()
            .map(str::to_string);
        ApiClient::new(self.config.read().api_url.clone()).with_token(token)
    }

    /// Takes the pending token validation, if any. Returns `Some` at most once.
    pub fn take_pending_validation(&mut self) -> Option<PendingValidation> {
        self.pending_validation.write().take()
    }

    // ==================== Authentication Methods ====================

    /// Log in and persist the access token.
    pub fn login(&mut self, profile: UserProfile, access_token: String) {
        self.session.write().login(profile, access_token);
    }

    /// Log out and remove the persisted access token.
    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.read().session().role()
    }

    /// Display name of the signed-in user.
    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.session
            .read()
            .session()
            .user()
            .map(|u| u.name.clone())
    }

    /// Access decision for a subtree requiring `required`.
    #[must_use]
    pub fn guard(&self, required: Option<Role>) -> GuardDecision {
        self.session.read().guard(required)
    }

    // ==================== Locale ====================

    /// Switches and persists the active language.
    pub fn set_language(&mut self, language_code: &str) {
        persist_language(&**self.storage.read(), language_code);
        self.language.set(language_code.to_string());
    }

    /// Switches between Arabic and English.
    pub fn toggle_language(&mut self) {
        let next = if self.language.read().as_str() == "ar" {
            "en"
        } else {
            "ar"
        };
        self.set_language(next);
    }

    /// Text direction of the active language.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::for_language(&self.language.read())
    }

    /// Translates `label` into the active language.
    #[must_use]
    pub fn tr(&self, label: Label) -> &'static str {
        label.text(&self.language.read())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
