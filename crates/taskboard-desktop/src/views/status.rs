//! # Status Views
//!
//! Pages shown when a route is forbidden or unknown.

use dioxus::prelude::*;
use taskboard_core::Label;

use crate::router::Route;
use crate::state::AppState;

/// Shown when the signed-in role may not open a page.
#[component]
pub fn Unauthorized() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div { class: "status-view",
            h2 { "403" }
            p { "{state.tr(Label::Unauthorized)}" }
            Link { to: Route::Home {}, class: "btn-primary", "{state.tr(Label::BackHome)}" }
        }
    }
}

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let state = use_context::<AppState>();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "status-view",
            h2 { "404" }
            p { "{state.tr(Label::NotFound)}" }
            code { "{path}" }
            Link { to: Route::Home {}, class: "btn-primary", "{state.tr(Label::BackHome)}" }
        }
    }
}
