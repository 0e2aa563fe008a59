//! # Header Component
//!
//! Application header with the sidebar toggle, language switch and user menu.

use dioxus::prelude::*;
use taskboard_core::Label;

use crate::router::Route;
use crate::state::AppState;

/// Application header component.
///
/// `sidebar_open` and `on_toggle` come from the shell's layout controller
/// and always refer to the sidebar currently rendered.
#[component]
pub fn Header(sidebar_open: bool, on_toggle: EventHandler<()>) -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let connected = *state.connected.read();

    let status_class = if connected {
        "status-indicator connected"
    } else {
        "status-indicator disconnected"
    };

    let on_logout = move |_| {
        state.logout();
        nav.push(Route::Login {});
    };

    rsx! {
        header {
            class: "app-header",

            div { class: "header-left",
                button {
                    class: "btn-icon sidebar-toggle",
                    title: "{state.tr(Label::ToggleSidebar)}",
                    aria_expanded: "{sidebar_open}",
                    onclick: move |_| on_toggle.call(()),
                    "☰"
                }
                h1 { "{state.tr(Label::AppName)}" }
            }

            div { class: "header-right",
                span { class: "{status_class}" }

                button {
                    class: "btn-sm btn-ghost",
                    onclick: move |_| state.toggle_language(),
                    "{state.tr(Label::SwitchLanguage)}"
                }

                if let Some(name) = state.user_name() {
                    div { class: "user-menu",
                        div { class: "user-avatar",
                            "{name.chars().next().unwrap_or('?').to_uppercase()}"
                        }
                        span { class: "username", "{name}" }
                        button {
                            class: "btn-sm btn-ghost",
                            onclick: on_logout,
                            "{state.tr(Label::Logout)}"
                        }
                    }
                }
            }
        }
    }
}
