//! # Main Sidebar Component
//!
//! Global navigation shown outside project pages.

use dioxus::prelude::*;
use taskboard_core::Label;

use crate::state::AppState;

/// Role-based navigation sidebar.
///
/// Docked beside the content on desktop, where a closed sidebar collapses
/// to an icon rail. On narrow windows it overlays the content and is only
/// rendered while open.
#[component]
pub fn MainSidebar(open: bool, docked: bool, width_class: &'static str) -> Element {
    let state = use_context::<AppState>();
    let entries = state.role().map(|role| role.navigation()).unwrap_or_default();
    let show_labels = open || !docked;

    if !docked && !open {
        return rsx! {};
    }

    let placement = if docked { "docked" } else { "overlay" };

    rsx! {
        nav {
            class: "sidebar main-sidebar {placement} {width_class}",

            div { class: "sidebar-brand",
                if show_labels { "{state.tr(Label::AppName)}" } else { "T" }
            }

            div { class: "nav-links",
                for entry in entries.iter() {
                    Link {
                        key: "{entry.path}",
                        to: entry.path,
                        class: "nav-link",
                        active_class: "active",
                        if show_labels {
                            "{state.tr(entry.label)}"
                        } else {
                            "{state.tr(entry.label).chars().next().unwrap_or('•')}"
                        }
                    }
                }
            }
        }
    }
}
