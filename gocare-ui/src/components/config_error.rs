/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

/// Replaces the whole page when `window.__APP_CONFIG` cannot be parsed.
#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", style: "color: crimson;", "{message}" }
            p {
                "Check the "
                code { "window.__APP_CONFIG" }
                " object served with this page. Every field is optional."
            }
        }
    }
}
