//! # Views
//!
//! Page-level view components for the Taskboard desktop application.
//!
//! - [`Login`] - Email/password sign-in
//! - [`Home`] - Dashboard with project progress
//! - [`Projects`], [`CreateProject`] - Project list and form
//! - [`ProjectOverview`] and siblings - Pages of a single project
//! - [`AdminUsers`], [`AdminStatistics`] - Administrator pages
//! - [`Unauthorized`], [`NotFound`] - Status pages

mod admin;
mod home;
mod login;
mod project;
mod projects;
mod status;

pub use admin::{AdminStatistics, AdminUsers};
pub use home::Home;
pub use login::Login;
pub use project::{
    ProjectActivity, ProjectEdit, ProjectExport, ProjectMembers, ProjectMessages,
    ProjectNotifications, ProjectOverview, ProjectTasks,
};
pub use projects::{CreateProject, Projects};
pub use status::{NotFound, Unauthorized};
