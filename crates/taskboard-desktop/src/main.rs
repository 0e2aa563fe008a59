//! # Taskboard Desktop
//!
//! Native desktop client for the Taskboard project and task dashboard.
//!
//! ## Architecture
//!
//! This application talks to the Taskboard REST API over HTTP. Layout,
//! locale, routing and session rules live in `taskboard-core`; this crate
//! binds them to Dioxus components.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client for the Taskboard API
//! - [`components`] - Page shell, sidebars and route guards
//! - [`config`] - Settings loaded from disk
//! - [`document`] - Locale attributes on the webview root
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use std::rc::Rc;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use taskboard_core::{validate, LanguageEvents, LocaleBinding, ViewportHub};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod api;
mod components;
mod config;
mod document;
mod router;
mod state;
mod views;

use api::ApiClient;
use document::WebviewRoot;
use router::Route;
use state::AppState;

/// Window width before the first resize event arrives.
const INITIAL_WIDTH: f64 = 1280.0;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Taskboard Desktop");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Taskboard")
            .with_inner_size(LogicalSize::new(INITIAL_WIDTH, 800.0))
            .with_min_inner_size(LogicalSize::new(360.0, 480.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides global state and the viewport hub, restores the persisted
/// session, keeps the document root in sync with the language and renders
/// the router.
#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let viewport = use_context_provider(|| Rc::new(ViewportHub::new(INITIAL_WIDTH)));

    // Validate a persisted token once, bounded by the configured timeout.
    use_hook(move || {
        if let Some(pending) = state.take_pending_validation() {
            let config = state.config.peek().clone();
            let client = ApiClient::new(config.api_url.clone());
            spawn(async move {
                let outcome = validate(&pending, &client, config.validation_timeout()).await;
                state.session.write().apply_validation(pending, outcome);
            });
        }
    });
    use_drop(move || {
        if let Ok(mut session) = state.session.try_write() {
            session.unmount();
        }
    });

    // The binding lives as long as this component and deregisters on drop.
    let events = use_hook(|| Rc::new(LanguageEvents::new(state.language.peek().clone())));
    use_hook({
        let events = Rc::clone(&events);
        move || Rc::new(LocaleBinding::mount(events, Rc::new(WebviewRoot)))
    });
    use_effect(move || {
        let code = state.language.read().clone();
        if events.current() != code {
            events.change_language(&code);
        }
    });

    let direction = state.direction();

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        div {
            class: "app-root",
            dir: "{direction}",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_border_box_size() {
                    viewport.resize(size.width);
                }
            },
            Router::<Route> {}
        }
    }
}
