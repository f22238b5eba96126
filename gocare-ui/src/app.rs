// SPDX-License-Identifier: MIT OR Apache-2.0

//! App root component.

use dioxus::prelude::*;

use crate::components::config_error::ConfigError;
use crate::constants::app_config;
use crate::context::{MediaClientCtx, PageCtx};
use crate::pages::home::Home;

#[component]
pub fn App() -> Element {
    let config = use_hook(app_config);

    let sdk_src = config
        .as_ref()
        .map(|c| c.livekit_client_src())
        .unwrap_or_default();
    use_context_provider(move || MediaClientCtx::livekit(sdk_src));
    use_context_provider(PageCtx::browser);

    match config {
        Ok(_) => rsx! { Home {} },
        Err(message) => rsx! { ConfigError { message } },
    }
}
