//! Responsive two-sidebar layout.
//!
//! The dashboard has a global *main* sidebar and a per-project *project*
//! sidebar. [`LayoutController`] is the single owner of their open/closed
//! state and of every rendering flag derived from it. It reacts to three
//! kinds of events: viewport resizes, route changes, and user actions
//! (toggle buttons and backdrop clicks).
//!
//! ```text
//!                     | desktop (>= 1024px)       | narrow (< 1024px)
//! --------------------+---------------------------+-----------------------------
//! non-project page    | main open, project closed | main toggles, project closed
//! project page        | project open, main closed | both closed until toggled
//! ```

use crate::locale::Direction;
use crate::route::RouteClassification;

/// Viewport width, in CSS pixels, at and above which the layout is "desktop".
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

/// Whether entering a project page on a narrow viewport opens the project
/// sidebar.
pub const OPEN_PROJECT_SIDEBAR_ON_NARROW_ENTRY: bool = true;

/// Tunables of the layout state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Desktop/narrow threshold in CSS pixels.
    pub breakpoint: f64,
    /// Project sidebar state after entering a project page on a narrow viewport.
    pub open_project_sidebar_on_narrow_entry: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DESKTOP_BREAKPOINT,
            open_project_sidebar_on_narrow_entry: OPEN_PROJECT_SIDEBAR_ON_NARROW_ENTRY,
        }
    }
}

/// Open/closed state of both sidebars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub main_sidebar_open: bool,
    pub project_sidebar_open: bool,
}

/// Which sidebar component the shell mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sidebar {
    Main,
    Project,
}

/// Rendering flags derived from the layout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFlags {
    /// The sidebar to mount. Only one is rendered at a time.
    pub rendered_sidebar: Sidebar,
    /// Whether the rendered sidebar is open.
    pub sidebar_open: bool,
    /// Sidebars sit beside the content on desktop and over it otherwise.
    pub docked: bool,
    /// Margin of the main content area, mirrored under RTL.
    pub content_margin_class: &'static str,
    /// Width of the main sidebar: full when open, an icon rail when collapsed.
    pub main_sidebar_width_class: &'static str,
    /// Slide transform of the project sidebar.
    pub project_sidebar_transform: &'static str,
    /// Whether the click-to-close backdrop is shown.
    pub show_backdrop: bool,
}

/// Horizontal space the open sidebar takes from the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gutter {
    None,
    Rail,
    Project,
    Full,
}

impl Gutter {
    fn margin_class(self, direction: Direction) -> &'static str {
        match (direction, self) {
            (Direction::Ltr, Self::None) => "ml-0",
            (Direction::Ltr, Self::Rail) => "ml-16",
            (Direction::Ltr, Self::Project) => "ml-52",
            (Direction::Ltr, Self::Full) => "ml-64",
            (Direction::Rtl, Self::None) => "mr-0",
            (Direction::Rtl, Self::Rail) => "mr-16",
            (Direction::Rtl, Self::Project) => "mr-52",
            (Direction::Rtl, Self::Full) => "mr-64",
        }
    }
}

/// The responsive layout state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    config: LayoutConfig,
    state: LayoutState,
    width: f64,
    route: Option<RouteClassification>,
}

impl LayoutController {
    /// Seeds the state from the viewport width: the main sidebar starts open
    /// on desktop, the project sidebar starts closed.
    ///
    /// No route is known yet; the first [`Self::on_route_change`] always
    /// applies its transition.
    #[must_use]
    pub fn mount(config: LayoutConfig, width: f64) -> Self {
        let state = LayoutState {
            main_sidebar_open: width >= config.breakpoint,
            project_sidebar_open: false,
        };
        tracing::debug!(width, ?state, "Mounted layout");
        Self {
            config,
            state,
            width,
            route: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.width >= self.config.breakpoint
    }

    #[must_use]
    pub fn is_project_scoped(&self) -> bool {
        self.route
            .as_ref()
            .is_some_and(RouteClassification::is_project_scoped)
    }

    /// Classification of the current route, once one has been reported.
    #[must_use]
    pub fn route(&self) -> Option<&RouteClassification> {
        self.route.as_ref()
    }

    /// Handles a viewport resize.
    ///
    /// Every call re-applies the mode defaults, even when the desktop/narrow
    /// classification did not change.
    pub fn on_resize(&mut self, width: f64) {
        self.width = width;
        let desktop = self.is_desktop();

        if self.is_project_scoped() {
            self.state.project_sidebar_open = desktop;
            self.state.main_sidebar_open = false;
        } else {
            self.state.project_sidebar_open = false;
            self.state.main_sidebar_open = desktop;
        }
        tracing::debug!(width, desktop, state = ?self.state, "Layout resized");
    }

    /// Handles navigation.
    ///
    /// Sidebar state only changes when the page enters or leaves project
    /// scope (or on the first route after mount). Moving between pages of
    /// the same scope, including from one project to another, keeps whatever
    /// the user last chose.
    pub fn on_route_change(&mut self, route: RouteClassification) {
        let entering_project = route.is_project_scoped();
        let scope_changed = self
            .route
            .as_ref()
            .is_none_or(|previous| previous.is_project_scoped() != entering_project);
        self.route = Some(route);

        if !scope_changed {
            return;
        }

        match (self.is_desktop(), entering_project) {
            (true, true) => {
                self.state.project_sidebar_open = true;
                self.state.main_sidebar_open = false;
            }
            (true, false) => {
                self.state.main_sidebar_open = true;
                self.state.project_sidebar_open = false;
            }
            (false, true) => {
                self.state.project_sidebar_open = self.config.open_project_sidebar_on_narrow_entry;
            }
            (false, false) => {
                self.state.project_sidebar_open = false;
            }
        }
        tracing::debug!(project = entering_project, state = ?self.state, "Layout route changed");
    }

    /// Flips the main sidebar.
    pub fn toggle_main(&mut self) {
        self.state.main_sidebar_open = !self.state.main_sidebar_open;
    }

    /// Flips the project sidebar. Ignored outside project scope, where the
    /// project sidebar stays closed, and on desktop, where it stays docked open.
    pub fn toggle_project(&mut self) {
        if self.is_project_scoped() && !self.is_desktop() {
            self.state.project_sidebar_open = !self.state.project_sidebar_open;
        }
    }

    /// Flips whichever sidebar is rendered; this is the header's toggle.
    pub fn toggle_active(&mut self) {
        match self.rendered_sidebar() {
            Sidebar::Main => self.toggle_main(),
            Sidebar::Project => self.toggle_project(),
        }
    }

    /// Handles a click on the narrow-viewport backdrop by closing the
    /// rendered sidebar. No-op on desktop, where no backdrop is shown.
    pub fn close_backdrop(&mut self) {
        if self.is_desktop() {
            return;
        }
        match self.rendered_sidebar() {
            Sidebar::Main => self.state.main_sidebar_open = false,
            Sidebar::Project => self.state.project_sidebar_open = false,
        }
    }

    /// Whether the sidebar the header toggles is open.
    #[must_use]
    pub fn active_sidebar_open(&self) -> bool {
        match self.rendered_sidebar() {
            Sidebar::Main => self.state.main_sidebar_open,
            Sidebar::Project => self.state.project_sidebar_open,
        }
    }

    fn rendered_sidebar(&self) -> Sidebar {
        if self.is_project_scoped() {
            Sidebar::Project
        } else {
            Sidebar::Main
        }
    }

    /// Derives the rendering flags for text `direction`.
    #[must_use]
    pub fn flags(&self, direction: Direction) -> LayoutFlags {
        let desktop = self.is_desktop();
        let rendered_sidebar = self.rendered_sidebar();
        let sidebar_open = self.active_sidebar_open();

        let gutter = match (desktop, rendered_sidebar) {
            (false, _) => Gutter::None,
            (true, Sidebar::Project) => Gutter::Project,
            (true, Sidebar::Main) if self.state.main_sidebar_open => Gutter::Full,
            (true, Sidebar::Main) => Gutter::Rail,
        };

        let project_sidebar_transform = if desktop || self.state.project_sidebar_open {
            "translate-x-0"
        } else if direction.is_rtl() {
            "translate-x-full"
        } else {
            "-translate-x-full"
        };

        LayoutFlags {
            rendered_sidebar,
            sidebar_open,
            docked: desktop,
            content_margin_class: gutter.margin_class(direction),
            main_sidebar_width_class: if self.state.main_sidebar_open {
                "w-64"
            } else {
                "w-16"
            },
            project_sidebar_transform,
            show_backdrop: !desktop && sidebar_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::classify;

    const DESKTOP: f64 = 1280.0;
    const NARROW: f64 = 768.0;

    fn mounted(width: f64, path: &str) -> LayoutController {
        let mut layout = LayoutController::mount(LayoutConfig::default(), width);
        layout.on_route_change(classify(path));
        layout
    }

    fn state(main: bool, project: bool) -> LayoutState {
        LayoutState {
            main_sidebar_open: main,
            project_sidebar_open: project,
        }
    }

    #[test]
    fn test_mount_seeds_from_width() {
        let desktop = LayoutController::mount(LayoutConfig::default(), DESKTOP);
        assert_eq!(desktop.state(), state(true, false));

        let narrow = LayoutController::mount(LayoutConfig::default(), NARROW);
        assert_eq!(narrow.state(), state(false, false));

        let exact = LayoutController::mount(LayoutConfig::default(), DESKTOP_BREAKPOINT);
        assert!(exact.is_desktop());
    }

    #[test]
    fn test_resize_in_project_mode() {
        let mut layout = mounted(NARROW, "/projects/1");
        layout.on_resize(DESKTOP);
        assert_eq!(layout.state(), state(false, true));

        layout.on_resize(NARROW);
        assert_eq!(layout.state(), state(false, false));
    }

    #[test]
    fn test_resize_outside_project_mode() {
        let mut layout = mounted(DESKTOP, "/projects");
        layout.on_resize(NARROW);
        assert_eq!(layout.state(), state(false, false));

        layout.on_resize(DESKTOP);
        assert_eq!(layout.state(), state(true, false));
    }

    #[test]
    fn test_narrow_project_entry_uses_config() {
        let layout = mounted(NARROW, "/projects/1/tasks");
        assert_eq!(layout.state(), state(false, true));

        let config = LayoutConfig {
            open_project_sidebar_on_narrow_entry: false,
            ..LayoutConfig::default()
        };
        let mut closed = LayoutController::mount(config, NARROW);
        closed.on_route_change(classify("/projects/1"));
        assert_eq!(closed.state(), state(false, false));
    }

    #[test]
    fn test_narrow_leaving_project_keeps_main() {
        let mut layout = mounted(NARROW, "/home");
        layout.toggle_main();
        assert!(layout.state().main_sidebar_open);

        layout.on_route_change(classify("/projects/3"));
        layout.on_route_change(classify("/home"));
        assert_eq!(layout.state(), state(true, false));
    }

    #[test]
    fn test_same_scope_navigation_keeps_user_choice() {
        let mut layout = mounted(NARROW, "/projects/3");
        layout.toggle_project();
        assert!(!layout.state().project_sidebar_open);

        layout.on_route_change(classify("/projects/3/tasks"));
        layout.on_route_change(classify("/projects/4/users"));
        assert!(!layout.state().project_sidebar_open);
        assert_eq!(layout.route().and_then(|r| r.project_id()), Some("4"));
    }

    #[test]
    fn test_toggle_project_ignored_outside_project_scope() {
        let mut layout = mounted(NARROW, "/home");
        layout.toggle_project();
        assert!(!layout.state().project_sidebar_open);
    }

    #[test]
    fn test_toggle_ignored_on_desktop_project_page() {
        let mut layout = mounted(DESKTOP, "/projects/7");
        let before = layout.flags(Direction::Ltr);

        layout.toggle_active();
        layout.toggle_project();
        assert_eq!(layout.state(), state(false, true));
        assert_eq!(layout.flags(Direction::Ltr), before);
        assert!(before.sidebar_open);
    }

    #[test]
    fn test_toggle_active_targets_rendered_sidebar() {
        let mut layout = mounted(NARROW, "/home");
        layout.toggle_active();
        assert_eq!(layout.state(), state(true, false));

        layout.on_route_change(classify("/projects/9"));
        layout.toggle_active();
        assert_eq!(layout.state(), state(true, false));
        layout.toggle_active();
        assert_eq!(layout.state(), state(true, true));
    }

    #[test]
    fn test_backdrop_closes_rendered_sidebar() {
        let mut layout = mounted(NARROW, "/home");
        layout.toggle_main();
        layout.close_backdrop();
        assert!(!layout.state().main_sidebar_open);

        let mut project = mounted(NARROW, "/projects/2");
        assert!(project.flags(Direction::Ltr).show_backdrop);
        project.close_backdrop();
        assert!(!project.state().project_sidebar_open);
        assert!(!project.flags(Direction::Ltr).show_backdrop);
    }

    #[test]
    fn test_backdrop_ignored_on_desktop() {
        let mut layout = mounted(DESKTOP, "/projects/2");
        layout.close_backdrop();
        assert_eq!(layout.state(), state(false, true));
    }

    #[test]
    fn test_flags_desktop() {
        let mut layout = mounted(DESKTOP, "/home");
        let flags = layout.flags(Direction::Ltr);
        assert_eq!(flags.rendered_sidebar, Sidebar::Main);
        assert!(flags.docked);
        assert_eq!(flags.content_margin_class, "ml-64");
        assert_eq!(flags.main_sidebar_width_class, "w-64");
        assert!(!flags.show_backdrop);

        layout.toggle_main();
        let collapsed = layout.flags(Direction::Rtl);
        assert_eq!(collapsed.content_margin_class, "mr-16");
        assert_eq!(collapsed.main_sidebar_width_class, "w-16");

        layout.on_route_change(classify("/projects/5"));
        let project = layout.flags(Direction::Ltr);
        assert_eq!(project.rendered_sidebar, Sidebar::Project);
        assert_eq!(project.content_margin_class, "ml-52");
        assert_eq!(project.project_sidebar_transform, "translate-x-0");
        assert_eq!(layout.flags(Direction::Rtl).content_margin_class, "mr-52");
    }

    #[test]
    fn test_flags_narrow_transform_is_mirrored() {
        let mut layout = mounted(NARROW, "/projects/5");
        assert_eq!(layout.flags(Direction::Ltr).project_sidebar_transform, "translate-x-0");
        assert_eq!(layout.flags(Direction::Ltr).content_margin_class, "ml-0");

        layout.toggle_project();
        assert_eq!(
            layout.flags(Direction::Ltr).project_sidebar_transform,
            "-translate-x-full"
        );
        assert_eq!(
            layout.flags(Direction::Rtl).project_sidebar_transform,
            "translate-x-full"
        );
    }

    #[test]
    fn test_flags_are_a_function_of_state() {
        let a = mounted(DESKTOP, "/projects/5");
        let mut b = mounted(NARROW, "/home");
        b.on_route_change(classify("/projects/5"));
        b.on_resize(DESKTOP);

        assert_eq!(a.state(), b.state());
        assert_eq!(a.flags(Direction::Ltr), b.flags(Direction::Ltr));
        assert_eq!(a.active_sidebar_open(), a.flags(Direction::Ltr).sidebar_open);
    }
}
