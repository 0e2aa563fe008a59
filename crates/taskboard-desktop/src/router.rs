//! # Routing
//!
//! Defines the application routes and the guards around them.

use dioxus::prelude::*;

use crate::components::{RequireAdmin, RequireSession, Shell};
use crate::views::{
    AdminStatistics, AdminUsers, CreateProject, Home, Login, NotFound, ProjectActivity,
    ProjectEdit, ProjectExport, ProjectMembers, ProjectMessages, ProjectNotifications,
    ProjectOverview, ProjectTasks, Projects, Unauthorized,
};

/// Application routes.
///
/// [`RequireSession`] sits outside the [`Shell`], so no chrome renders until a
/// session is present. Inside it, [`RequireAdmin`] admits only administrators.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    /// Email/password login.
    #[route("/login")]
    Login {},

    /// Shown when the signed-in role may not open a page.
    #[route("/unauthorized")]
    Unauthorized {},

    #[layout(RequireSession)]
        #[layout(Shell)]
            /// Dashboard with project progress.
            #[route("/")]
            Home {},

            /// All projects visible to the user.
            #[route("/projects")]
            Projects {},

            /// New project form. Declared before `/projects/:id`.
            #[route("/projects/create")]
            CreateProject {},

            /// Project summary.
            #[route("/projects/:id")]
            ProjectOverview { id: String },

            /// Tasks and sub-tasks of a project.
            #[route("/projects/:id/tasks")]
            ProjectTasks { id: String },

            /// Users assigned to a project.
            #[route("/projects/:id/users")]
            ProjectMembers { id: String },

            #[route("/projects/:id/edit")]
            ProjectEdit { id: String },

            #[route("/projects/:id/export")]
            ProjectExport { id: String },

            #[route("/projects/:id/activity")]
            ProjectActivity { id: String },

            #[route("/projects/:id/notifications")]
            ProjectNotifications { id: String },

            #[route("/projects/:id/messages")]
            ProjectMessages { id: String },

            #[layout(RequireAdmin)]
                /// Every user of the system.
                #[route("/admin/users")]
                AdminUsers {},

                /// Dashboard-wide counters.
                #[route("/admin/statistics")]
                AdminStatistics {},
            #[end_layout]
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
