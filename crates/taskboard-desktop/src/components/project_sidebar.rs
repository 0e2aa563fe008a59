//! # Project Sidebar Component
//!
//! Navigation between the pages of a single project.

use dioxus::prelude::*;
use taskboard_core::{project_navigation, Label};

use crate::router::Route;
use crate::state::AppState;

/// Project navigation sidebar.
///
/// Always mounted on project pages; `transform` slides it off-canvas when
/// closed on a narrow window.
#[component]
pub fn ProjectSidebar(project_id: String, docked: bool, transform: &'static str) -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let id = project_id.clone();
    let project = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move { client.get_project(&id).await }
    }));

    let title = match &*project.read() {
        Some(Ok(p)) => p.name.clone(),
        _ => format!("#{}", project_id),
    };
    let placement = if docked { "docked" } else { "overlay" };

    rsx! {
        nav {
            class: "sidebar project-sidebar {placement} {transform}",

            Link {
                to: Route::Projects {},
                class: "sidebar-back",
                "{state.tr(Label::Projects)}"
            }

            div { class: "sidebar-brand", "{title}" }

            div { class: "nav-links",
                for entry in project_navigation(&project_id) {
                    Link {
                        key: "{entry.path}",
                        to: entry.path.clone(),
                        class: "nav-link",
                        active_class: "active",
                        "{state.tr(entry.label)}"
                    }
                }
            }
        }
    }
}
