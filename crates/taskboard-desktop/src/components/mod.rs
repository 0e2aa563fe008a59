//! # UI Components
//!
//! Shell components for the Taskboard desktop application.
//!
//! - [`Shell`] - Page shell driving the responsive layout
//! - [`Header`] - Top bar with the sidebar toggle and user menu
//! - [`MainSidebar`] - Role-based global navigation
//! - [`ProjectSidebar`] - Navigation within one project
//! - [`RequireSession`] / [`RequireAdmin`] - Route guards

mod guard;
mod header;
mod project_sidebar;
mod shell;
mod sidebar;

pub use guard::{RequireAdmin, RequireSession};
pub use header::Header;
pub use project_sidebar::ProjectSidebar;
pub use shell::Shell;
pub use sidebar::MainSidebar;
