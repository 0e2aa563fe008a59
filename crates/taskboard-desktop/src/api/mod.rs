//! # API Client
//!
//! HTTP client for the Taskboard REST API.
//!
//! This module provides the [`ApiClient`] used by pages to load projects,
//! tasks, members and statistics, and by the session store to validate a
//! restored access token.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use types::{Member, Project, Statistics, Task};
