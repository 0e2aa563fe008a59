//! # Projects Views
//!
//! Project list and the new project form.

use dioxus::prelude::*;
use taskboard_core::Label;

use super::home::ProjectCard;
use crate::router::Route;
use crate::state::AppState;

/// All projects visible to the signed-in user.
#[component]
pub fn Projects() -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let projects = use_resource(move || {
        let client = client.clone();
        async move { client.list_projects().await }
    });

    rsx! {
        div {
            class: "projects-view",

            div {
                class: "page-header",
                h2 { "{state.tr(Label::Projects)}" }
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

/// New project form.
///
/// On success navigates to the new project's overview, which opens the
/// project sidebar.
#[component]
pub fn CreateProject() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let on_submit = move |_| {
        let name_val = name.read().trim().to_string();
        let description_val = description.read().trim().to_string();

        if name_val.is_empty() {
            return;
        }

        loading.set(true);
        error.set(None);

        let client = state.client();

        spawn(async move {
            let description = (!description_val.is_empty()).then_some(description_val.as_str());
            match client.create_project(&name_val, description).await {
                Ok(project) => {
                    tracing::info!(id = project.id, "Created project");
                    nav.push(Route::ProjectOverview {
                        id: project.id.to_string(),
                    });
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }

            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "create-project-view",

            h2 { "{state.tr(Label::NewProject)}" }

            div { class: "form-card",
                div { class: "form-group",
                    label { r#for: "project-name", "{state.tr(Label::Name)}" }
                    input {
                        id: "project-name",
                        r#type: "text",
                        value: "{name}",
                        disabled: *loading.read(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "project-description", "{state.tr(Label::Description)}" }
                    textarea {
                        id: "project-description",
                        rows: 4,
                        value: "{description}",
                        disabled: *loading.read(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                if let Some(err) = error.read().as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }

                button {
                    class: "btn-primary",
                    disabled: *loading.read() || name.read().trim().is_empty(),
                    onclick: on_submit,
                    if *loading.read() {
                        "{state.tr(Label::Loading)}"
                    } else {
                        "{state.tr(Label::Create)}"
                    }
                }
            }
        }
    }
}
