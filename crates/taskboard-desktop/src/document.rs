//! # Document Root
//!
//! Applies locale attributes to the webview's `<html>` element.

use dioxus::prelude::*;
use taskboard_core::DocumentRoot;

/// [`DocumentRoot`] backed by the webview's `document.documentElement`.
pub struct WebviewRoot;

impl DocumentRoot for WebviewRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        run(attribute_script(name, value));
    }

    fn set_class_flag(&self, class: &str, enabled: bool) {
        run(class_flag_script(class, enabled));
    }
}

fn attribute_script(name: &str, value: &str) -> String {
    format!(
        "document.documentElement.setAttribute({}, {}); return true;",
        quote(name),
        quote(value)
    )
}

fn class_flag_script(class: &str, enabled: bool) -> String {
    format!(
        "document.documentElement.classList.toggle({}, {}); return true;",
        quote(class),
        enabled
    )
}

fn run(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::debug!(error = %e, %script, "Failed to update document root");
        }
    });
}

/// JSON string literals are valid JavaScript string literals.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
