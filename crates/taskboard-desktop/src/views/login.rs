//! # Login View
//!
//! Email/password sign-in.

use dioxus::prelude::*;
use taskboard_core::Label;

use crate::router::Route;
use crate::state::AppState;

/// Login view component.
///
/// On success the session store persists the token and the user lands on
/// the dashboard.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // If already authenticated, redirect to home
    if state.session.read().session().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let mut do_login = move || {
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some(state.tr(Label::LoginFailed).to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let client = state.client();

        spawn(async move {
            match client.login(&email_val, &password_val).await {
                Ok(res) => {
                    state.login(res.user, res.access_token);
                    nav.push(Route::Home {});
                }
                Err(e) if e.is_unauthorized() => {
                    error.set(Some(state.tr(Label::LoginFailed).to_string()));
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }

            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { "{state.tr(Label::AppName)}" }
                    button {
                        class: "btn-sm btn-ghost",
                        onclick: move |_| state.toggle_language(),
                        "{state.tr(Label::SwitchLanguage)}"
                    }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "email", "{state.tr(Label::Email)}" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            disabled: *loading.read(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "{state.tr(Label::Password)}" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            disabled: *loading.read(),
                            oninput: move |evt| password.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter && !*loading.read() {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-block",
                        disabled: *loading.read(),
                        onclick: move |_| do_login(),
                        if *loading.read() {
                            "{state.tr(Label::Loading)}"
                        } else {
                            "{state.tr(Label::Login)}"
                        }
                    }
                }
            }
        }
    }
}
