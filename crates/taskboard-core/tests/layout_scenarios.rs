//! End-to-end layout scenarios driven through a synthetic viewport.

use std::cell::RefCell;
use std::rc::Rc;

use taskboard_core::{
    classify, Direction, LayoutConfig, LayoutController, LayoutState, Sidebar, ViewportHub,
    ViewportObserver, DESKTOP_BREAKPOINT,
};

/// A layout wired to a viewport the way the desktop shell wires it.
struct Shell {
    viewport: Rc<ViewportHub>,
    layout: Rc<RefCell<LayoutController>>,
}

impl Shell {
    fn mount(width: f64, path: &str) -> Self {
        let viewport = Rc::new(ViewportHub::new(width));
        let layout = Rc::new(RefCell::new(LayoutController::mount(
            LayoutConfig::default(),
            viewport.width(),
        )));

        let target = Rc::clone(&layout);
        viewport.subscribe(Rc::new(move |w: &f64| target.borrow_mut().on_resize(*w)));
        layout.borrow_mut().on_route_change(classify(path));

        Self { viewport, layout }
    }

    fn navigate(&self, path: &str) {
        self.layout.borrow_mut().on_route_change(classify(path));
    }

    fn state(&self) -> LayoutState {
        self.layout.borrow().state()
    }
}

#[test]
fn desktop_to_project_to_narrow_to_toggle() {
    let shell = Shell::mount(1440.0, "/home");
    assert_eq!(
        shell.state(),
        LayoutState {
            main_sidebar_open: true,
            project_sidebar_open: false
        }
    );

    shell.navigate("/projects/7");
    assert_eq!(
        shell.state(),
        LayoutState {
            main_sidebar_open: false,
            project_sidebar_open: true
        }
    );

    shell.viewport.resize(900.0);
    assert_eq!(shell.state(), LayoutState::default());

    shell.layout.borrow_mut().toggle_project();
    assert_eq!(
        shell.state(),
        LayoutState {
            main_sidebar_open: false,
            project_sidebar_open: true
        }
    );
}

#[test]
fn desktop_project_mode_after_every_resize() {
    let shell = Shell::mount(600.0, "/projects/3/tasks");
    for width in [DESKTOP_BREAKPOINT, 1200.0, 1920.0] {
        shell.viewport.resize(width);
        let state = shell.state();
        assert!(state.project_sidebar_open, "width {width}");
        assert!(!state.main_sidebar_open, "width {width}");
    }
}

#[test]
fn narrow_resize_outside_projects_closes_project_sidebar() {
    let shell = Shell::mount(1280.0, "/projects/3");
    shell.navigate("/projects");
    for width in [1023.0, 800.0, 320.0] {
        shell.viewport.resize(width);
        assert!(!shell.state().project_sidebar_open, "width {width}");
    }
}

#[test]
fn unknown_project_subpage_uses_main_chrome() {
    let shell = Shell::mount(1280.0, "/projects/3/unknown-subpage");
    let flags = shell.layout.borrow().flags(Direction::Ltr);
    assert_eq!(flags.rendered_sidebar, Sidebar::Main);
    assert!(shell.state().main_sidebar_open);
}

#[test]
fn rtl_mirrors_content_margin() {
    let shell = Shell::mount(1280.0, "/projects/3");
    let layout = shell.layout.borrow();
    assert_eq!(layout.flags(Direction::Ltr).content_margin_class, "ml-52");
    assert_eq!(layout.flags(Direction::Rtl).content_margin_class, "mr-52");
}

#[test]
fn backdrop_click_on_narrow_project_page() {
    let shell = Shell::mount(700.0, "/projects/12/messages");
    assert!(shell.layout.borrow().flags(Direction::Ltr).show_backdrop);

    shell.layout.borrow_mut().close_backdrop();
    let layout = shell.layout.borrow();
    assert!(!layout.state().project_sidebar_open);
    assert!(!layout.flags(Direction::Ltr).show_backdrop);
}
