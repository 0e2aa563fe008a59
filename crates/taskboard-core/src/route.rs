//! Classification of paths into project-scoped pages.

/// Subpages of `/projects/:id` that keep the project navigation chrome.
///
/// Shared with the project sidebar so both stay in step.
pub const PROJECT_SUBPAGES: &[&str] = &[
    "tasks",
    "users",
    "edit",
    "export",
    "activity",
    "notifications",
    "messages",
];

/// Whether a path belongs to a single project, and which one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteClassification {
    /// A page without project chrome.
    #[default]
    Global,
    /// A page under `/projects/:id` showing project navigation.
    Project {
        /// The project identifier taken from the path.
        id: String,
    },
}

impl RouteClassification {
    /// Returns true for project-scoped pages.
    #[must_use]
    pub fn is_project_scoped(&self) -> bool {
        matches!(self, Self::Project { .. })
    }

    /// The project id, present only for project-scoped pages.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Project { id } => Some(id),
            Self::Global => None,
        }
    }
}

/// Classifies `path`.
///
/// The path is split into non-empty segments after dropping any query string
/// or fragment, so `/projects/42/` and `/projects/42?tab=1` both classify as
/// project 42. A path is project-scoped when it is `/projects/:id` or
/// `/projects/:id/<subpage>` with `<subpage>` in [`PROJECT_SUBPAGES`];
/// `/projects/create` is the project creation form and is not scoped.
#[must_use]
pub fn classify(path: &str) -> RouteClassification {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["projects", id, rest @ ..] if *id != "create" => match rest {
            [] => RouteClassification::Project { id: id.to_string() },
            [subpage, ..] if PROJECT_SUBPAGES.contains(subpage) => {
                RouteClassification::Project { id: id.to_string() }
            }
            _ => RouteClassification::Global,
        },
        _ => RouteClassification::Global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: &str) -> RouteClassification {
        RouteClassification::Project { id: id.to_string() }
    }

    #[test]
    fn test_project_root_and_subpages() {
        assert_eq!(classify("/projects/42"), project("42"));
        assert_eq!(classify("/projects/42/"), project("42"));
        assert_eq!(classify("/projects/42/tasks"), project("42"));
        assert_eq!(classify("/projects/42/tasks/9"), project("42"));
        for subpage in PROJECT_SUBPAGES {
            assert_eq!(classify(&format!("/projects/abc/{subpage}")), project("abc"));
        }
    }

    #[test]
    fn test_unscoped_paths() {
        assert_eq!(classify("/"), RouteClassification::Global);
        assert_eq!(classify(""), RouteClassification::Global);
        assert_eq!(classify("/home"), RouteClassification::Global);
        assert_eq!(classify("/projects"), RouteClassification::Global);
        assert_eq!(classify("/projects/create"), RouteClassification::Global);
        assert_eq!(classify("/projects/42/unknown-subpage"), RouteClassification::Global);
        assert_eq!(classify("/admin/projects/42"), RouteClassification::Global);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(classify("/projects/42?tab=users"), project("42"));
        assert_eq!(classify("/projects/42/tasks#top"), project("42"));
        assert_eq!(classify("/projects/create?from=home"), RouteClassification::Global);
    }

    #[test]
    fn test_project_id_only_when_scoped() {
        assert_eq!(classify("/projects/7").project_id(), Some("7"));
        assert!(classify("/projects/7").is_project_scoped());

        let global = classify("/settings");
        assert!(!global.is_project_scoped());
        assert_eq!(global.project_id(), None);
    }

    proptest! {
        #[test]
        fn prop_paths_outside_projects_are_global(
            segments in prop::collection::vec("[a-z0-9-]{1,12}", 0..6)
        ) {
            prop_assume!(segments.first().map(String::as_str) != Some("projects"));
            let path = format!("/{}", segments.join("/"));
            prop_assert_eq!(classify(&path), RouteClassification::Global);
        }

        #[test]
        fn prop_classification_is_deterministic(path in "(/[a-z0-9]{0,8}){0,5}") {
            prop_assert_eq!(classify(&path), classify(&path));
        }

        #[test]
        fn prop_project_id_matches_second_segment(id in "[a-z0-9]{1,10}") {
            prop_assume!(id != "create");
            let path = format!("/projects/{id}/tasks");
            let classification = classify(&path);
            prop_assert_eq!(classification.project_id(), Some(id.as_str()));
        }
    }
}
