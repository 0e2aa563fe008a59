//! # API Types
//!
//! Types for API requests and responses.

use serde::{Deserialize, Serialize};
use taskboard_core::{Role, UserProfile};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the bearer token and its owner.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Body posted to `/projects`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project as listed by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Status label computed by the backend (e.g. "active", "completed").
    #[serde(default)]
    pub status: String,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: u8,
}

/// A sub-task of a [`Task`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubTask {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task within a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub status: String,
    /// Name of the assigned user, if any.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
}

impl Task {
    /// Number of completed sub-tasks.
    #[must_use]
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }
}

/// A user assigned to a project, or listed on the admin users page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Dashboard-wide counters for administrators.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_projects: u64,
    pub active_projects: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_users: u64,
}

impl Statistics {
    /// Share of completed tasks as a percentage, 0 when there are no tasks.
    #[must_use]
    pub fn completion_rate(&self) -> u8 {
        if self.total_tasks == 0 {
            return 0;
        }
        let rate = self.completed_tasks.min(self.total_tasks) * 100 / self.total_tasks;
        rate as u8
    }
}
