//! # Home View
//!
//! Dashboard listing the user's projects with their progress.

use dioxus::prelude::*;
use taskboard_core::Label;

use crate::api::Project;
use crate::router::Route;
use crate::state::AppState;

/// Home dashboard view.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let projects = use_resource(move || {
        let client = client.clone();
        async move { client.list_projects().await }
    });

    rsx! {
        div {
            class: "home-view",

            div {
                class: "page-header",
                h2 { "{state.tr(Label::Dashboard)}" }
                Link {
                    to: Route::CreateProject {},
                    class: "btn-primary",
                    "+ {state.tr(Label::NewProject)}"
                }
            }

            match &*projects.read() {
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "text-secondary", "{state.tr(Label::NoProjects)}" }
                },
                Some(Ok(items)) => rsx! {
                    div {
                        class: "project-grid",
                        for project in items.iter() {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "alert alert-error", "{state.tr(Label::LoadFailed)} {e}" }
                },
                None => rsx! {
                    div { class: "loading", "{state.tr(Label::Loading)}" }
                },
            }
        }
    }
}

/// Dashboard card linking to a project overview.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        Link {
            to: Route::ProjectOverview { id: project.id.to_string() },
            class: "project-card",

            div { class: "project-card-title", "{project.name}" }
            if let Some(description) = &project.description {
                p { class: "text-secondary", "{description}" }
            }
            div { class: "project-card-meta",
                span { class: "badge", "{project.status}" }
                span { "{state.tr(Label::Progress)}: {project.progress}%" }
            }
            ProgressBar { value: project.progress }
        }
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: u8) -> Element {
    let width = value.min(100);

    rsx! {
        div { class: "progress",
            div { class: "progress-fill", style: "width: {width}%" }
        }
    }
}
