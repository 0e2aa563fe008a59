//! # Shell Component
//!
//! Page shell wrapping every signed-in page.

use std::rc::Rc;

use dioxus::prelude::*;
use taskboard_core::{classify, LayoutController, Sidebar, ViewportHub, ViewportObserver};

use super::{Header, MainSidebar, ProjectSidebar};
use crate::api::ApiClient;
use crate::router::Route;
use crate::state::AppState;

/// Page shell component.
///
/// Owns the [`LayoutController`] for the current mount. The controller is
/// fed by the viewport hub (resizes) and the router (path changes); every
/// visibility, margin and transform class below is read from its flags.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// | (main   |-----------------------------------|
/// |   or    |                                   |
/// | project)|         Page Content              |
/// |         |         (Outlet)                  |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Shell() -> Element {
    let mut state = use_context::<AppState>();
    let viewport = use_context::<Rc<ViewportHub>>();
    let path = use_route::<Route>().to_string();

    let mut layout = use_signal({
        let width = viewport.width();
        let path = path.clone();
        move || {
            let mut layout = LayoutController::mount(state.config.peek().layout(), width);
            layout.on_route_change(classify(&path));
            layout
        }
    });

    // One resize subscription per mount, released on unmount.
    let subscription = use_hook({
        let viewport = Rc::clone(&viewport);
        move || {
            viewport.subscribe(Rc::new(move |width: &f64| {
                let mut layout = layout;
                layout.write().on_resize(*width);
            }))
        }
    });
    use_drop({
        let viewport = Rc::clone(&viewport);
        move || viewport.unsubscribe(subscription)
    });

    use_effect(use_reactive!(|(path,)| {
        layout.write().on_route_change(classify(&path));
    }));

    // Probe the API once per mount for the connection indicator. The read is
    // untracked, so login and logout never re-run it.
    use_effect(move || {
        let client = ApiClient::new(state.config.peek().api_url.clone());
        spawn(async move {
            match client.health().await {
                Ok(healthy) => {
                    state.connected.set(healthy);
                    if !healthy {
                        tracing::warn!("API is unhealthy");
                    }
                }
                Err(e) => {
                    state.connected.set(false);
                    tracing::warn!("Failed to reach API: {}", e);
                }
            }
        });
    });

    let controller = layout.read();
    let flags = controller.flags(state.direction());
    let project_id = controller
        .route()
        .and_then(|r| r.project_id())
        .map(str::to_string);
    drop(controller);

    rsx! {
        div {
            class: "app-layout",

            match (flags.rendered_sidebar, project_id) {
                (Sidebar::Project, Some(project_id)) => rsx! {
                    ProjectSidebar {
                        project_id,
                        docked: flags.docked,
                        transform: flags.project_sidebar_transform,
                    }
                },
                _ => rsx! {
                    MainSidebar {
                        open: flags.sidebar_open,
                        docked: flags.docked,
                        width_class: flags.main_sidebar_width_class,
                    }
                },
            }

            if flags.show_backdrop {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| layout.write().close_backdrop(),
                }
            }

            div {
                class: "main-panel {flags.content_margin_class}",

                Header {
                    sidebar_open: flags.sidebar_open,
                    on_toggle: move |_| layout.write().toggle_active(),
                }

                main {
                    class: "content",

                    Outlet::<Route> {}
                }
            }
        }
    }
}
