//! # Project Views
//!
//! Pages of a single project. Every page here renders beside the project
//! sidebar.

use dioxus::prelude::*;
use taskboard_core::Label;

use super::home::ProgressBar;
use crate::api::{Member, Task};
use crate::state::AppState;

/// Project summary.
#[component]
pub fn ProjectOverview(id: String) -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let project = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move { client.get_project(&id).await }
    }));

    rsx! {
        div {
            class: "project-view",

            match &*project.read() {
                Some(Ok(project)) => rsx! {
                    div { class: "page-header",
                        h2 { "{project.name}" }
                        span { class: "badge", "{project.status}" }
                    }
                    if let Some(description) = &project.description {
                        p { class: "project-description", "{description}" }
                    }
                    div { class: "stat-row",
                        span { "{state.tr(Label::Progress)}" }
                        span { "{project.progress}%" }
                    }
                    ProgressBar { value: project.progress }
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

/// Tasks of a project with their sub-tasks.
#[component]
pub fn ProjectTasks(id: String) -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let tasks = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move { client.list_tasks(&id).await }
    }));

    rsx! {
        div {
            class: "project-view",

            h2 { "{state.tr(Label::Tasks)}" }

            match &*tasks.read() {
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "text-secondary", "{state.tr(Label::NoTasks)}" }
                },
                Some(Ok(items)) => rsx! {
                    ul { class: "task-list",
                        for task in items.iter() {
                            TaskRow { key: "{task.id}", task: task.clone() }
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

#[component]
fn TaskRow(task: Task) -> Element {
    let state = use_context::<AppState>();
    let assignee = task
        .assignee
        .clone()
        .unwrap_or_else(|| state.tr(Label::Unassigned).to_string());
    let done = task.completed_subtasks();
    let total = task.subtasks.len();

    rsx! {
        li { class: "task-item",
            div { class: "task-header",
                span { class: "task-title", "{task.title}" }
                span { class: "badge", "{task.status}" }
            }
            div { class: "task-meta",
                span { "{state.tr(Label::Assignee)}: {assignee}" }
                if total > 0 {
                    span { "{done}/{total}" }
                }
            }
            ProgressBar { value: task.progress }
            if total > 0 {
                ul { class: "subtask-list",
                    for subtask in task.subtasks.iter() {
                        li {
                            key: "{subtask.id}",
                            class: if subtask.completed { "subtask done" } else { "subtask" },
                            "{subtask.title}"
                        }
                    }
                }
            }
        }
    }
}

/// Users assigned to a project.
#[component]
pub fn ProjectMembers(id: String) -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let members = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move { client.list_project_members(&id).await }
    }));

    rsx! {
        div {
            class: "project-view",

            h2 { "{state.tr(Label::Members)}" }

            match &*members.read() {
                Some(Ok(items)) => rsx! {
                    MemberTable { members: items.clone() }
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

/// Table of users with their roles. Shared with the admin users page.
#[component]
pub fn MemberTable(members: Vec<Member>) -> Element {
    let state = use_context::<AppState>();

    if members.is_empty() {
        return rsx! {
            p { class: "text-secondary", "{state.tr(Label::NoMembers)}" }
        };
    }

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "{state.tr(Label::Name)}" }
                    th { "{state.tr(Label::Email)}" }
                    th { "{state.tr(Label::Role)}" }
                }
            }
            tbody {
                for member in members.iter() {
                    tr { key: "{member.id}",
                        td { "{member.name}" }
                        td { "{member.email}" }
                        td { "{member.role}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectEdit(id: String) -> Element {
    rsx! { ProjectSection { id, title: Label::Edit } }
}

#[component]
pub fn ProjectExport(id: String) -> Element {
    rsx! { ProjectSection { id, title: Label::Export } }
}

#[component]
pub fn ProjectActivity(id: String) -> Element {
    rsx! { ProjectSection { id, title: Label::Activity } }
}

#[component]
pub fn ProjectNotifications(id: String) -> Element {
    rsx! { ProjectSection { id, title: Label::Notifications } }
}

#[component]
pub fn ProjectMessages(id: String) -> Element {
    rsx! { ProjectSection { id, title: Label::Messages } }
}

/// Placeholder body for project pages without their own API.
#[component]
fn ProjectSection(id: String, title: Label) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "project-view",
            "data-project": "{id}",
            h2 { "{state.tr(title)}" }
            p { class: "text-secondary", "{state.tr(Label::EmptySection)}" }
        }
    }
}
