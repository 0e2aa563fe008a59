//! # Route Guards
//!
//! Layout components that gate their nested routes on the session.

use dioxus::prelude::*;
use taskboard_core::{GuardDecision, Label, Role};

use crate::router::Route;
use crate::state::AppState;

/// Admits any signed-in user.
#[component]
pub fn RequireSession() -> Element {
    guarded(None)
}

/// Admits administrators only.
#[component]
pub fn RequireAdmin() -> Element {
    guarded(Some(Role::Admin))
}

fn guarded(required: Option<Role>) -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();

    match state.guard(required) {
        // Still restoring the session: never redirect from here.
        GuardDecision::Pending => rsx! {
            div { class: "loading", "{state.tr(Label::Loading)}" }
        },
        GuardDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::RedirectUnauthorized => {
            nav.replace(Route::Unauthorized {});
            rsx! {}
        }
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
    }
}
