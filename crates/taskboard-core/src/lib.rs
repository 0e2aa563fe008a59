//! Core logic for the Taskboard project dashboard.
//!
//! This crate holds everything the dashboard shell decides on its own,
//! independently of any UI framework:
//! - **Routes**: classification of paths into project-scoped pages
//! - **Layout**: the responsive two-sidebar state machine
//! - **Locale**: language and text direction, mirrored onto the document root
//! - **Session**: login, logout and restoration of a persisted access token
//! - **Guards**: role-based access decisions for protected route subtrees
//! - **Navigation**: static, role-keyed sidebar entries
//!
//! # Example
//!
//! ```
//! use taskboard_core::{classify, LayoutConfig, LayoutController};
//!
//! let mut layout = LayoutController::mount(LayoutConfig::default(), 1280.0);
//! layout.on_route_change(classify("/home"));
//! assert!(layout.state().main_sidebar_open);
//!
//! layout.on_route_change(classify("/projects/7"));
//! assert!(layout.state().project_sidebar_open);
//! assert!(!layout.state().main_sidebar_open);
//! ```

mod error;
mod guard;
mod layout;
mod listeners;
mod locale;
mod nav;
mod route;
mod session;
mod storage;
mod token;
mod viewport;

pub use error::{Result, StorageError, TokenError, ValidationError};
pub use guard::{guard, GuardDecision};
pub use layout::{
    LayoutConfig, LayoutController, LayoutFlags, LayoutState, Sidebar, DESKTOP_BREAKPOINT,
    OPEN_PROJECT_SIDEBAR_ON_NARROW_ENTRY,
};
pub use listeners::SubscriptionId;
pub use locale::{
    persist_language, restore_language, DocumentRoot, Direction, LanguageEvents, LocaleBinding,
    LocaleState, DEFAULT_LANGUAGE, LANGUAGE_KEY,
};
pub use nav::{project_navigation, Label, NavEntry, ProjectNavEntry};
pub use route::{classify, RouteClassification, PROJECT_SUBPAGES};
pub use session::{
    validate, PendingValidation, Role, Session, SessionStore, TokenValidator, UserProfile,
    ACCESS_TOKEN_KEY, DEFAULT_VALIDATION_TIMEOUT,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use token::{decode_expiry, is_expired};
pub use viewport::{ViewportHub, ViewportObserver};
