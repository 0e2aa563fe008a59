//! # Admin Views
//!
//! Pages only administrators may open.

use dioxus::prelude::*;
use taskboard_core::Label;

use super::home::ProgressBar;
use super::project::MemberTable;
use crate::api::Statistics;
use crate::state::AppState;

/// Every user of the system.
#[component]
pub fn AdminUsers() -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let users = use_resource(move || {
        let client = client.clone();
        async move { client.list_users().await }
    });

    rsx! {
        div {
            class: "admin-view",

            h2 { "{state.tr(Label::Users)}" }

            match &*users.read() {
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

/// Dashboard-wide counters.
#[component]
pub fn AdminStatistics() -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let stats = use_resource(move || {
        let client = client.clone();
        async move { client.statistics().await }
    });

    rsx! {
        div {
            class: "admin-view",

            h2 { "{state.tr(Label::Statistics)}" }

            match &*stats.read() {
                Some(Ok(stats)) => rsx! {
                    StatisticsGrid { stats: stats.clone() }
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
fn StatisticsGrid(stats: Statistics) -> Element {
    let state = use_context::<AppState>();
    let counters = [
        (Label::TotalProjects, stats.total_projects),
        (Label::ActiveProjects, stats.active_projects),
        (Label::TotalTasks, stats.total_tasks),
        (Label::CompletedTasks, stats.completed_tasks),
        (Label::TotalUsers, stats.total_users),
    ];
    let rate = stats.completion_rate();

    rsx! {
        div { class: "stat-grid",
            for (label, value) in counters {
                div { class: "stat-card",
                    span { class: "stat-label", "{state.tr(label)}" }
                    span { class: "stat-value", "{value}" }
                }
            }
        }
        div { class: "stat-row",
            span { "{state.tr(Label::CompletionRate)}" }
            span { "{rate}%" }
        }
        ProgressBar { value: rate }
    }
}
