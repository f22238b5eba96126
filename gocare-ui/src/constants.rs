// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration read from `window.__APP_CONFIG`.
//!
//! The object is optional. When it is missing every field takes its default,
//! so the page also works when served as plain static files.

use gocare_types::truthy;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_APP_TITLE: &str = "GoCare Voice Demo";
pub const DEFAULT_LIVEKIT_CLIENT_SRC: &str =
    "https://cdn.jsdelivr.net/npm/livekit-client/dist/livekit-client.umd.min.js";

/// Query parameters that seed the connect form.
pub const URL_QUERY_PARAM: &str = "url";
pub const TOKEN_QUERY_PARAM: &str = "token";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "appTitle")]
    #[serde(default)]
    pub app_title: Option<String>,
    #[serde(rename = "livekitClientSrc")]
    #[serde(default)]
    pub livekit_client_src: Option<String>,
    #[serde(rename = "debugLogging")]
    #[serde(default)]
    pub debug_logging: Option<String>,
}

impl RuntimeConfig {
    pub fn app_title(&self) -> String {
        non_empty(&self.app_title).unwrap_or_else(|| DEFAULT_APP_TITLE.to_string())
    }

    pub fn livekit_client_src(&self) -> String {
        non_empty(&self.livekit_client_src)
            .unwrap_or_else(|| DEFAULT_LIVEKIT_CLIENT_SRC.to_string())
    }

    pub fn debug_logging(&self) -> bool {
        truthy(self.debug_logging.as_deref())
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.trim().is_empty())
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn app_title() -> String {
    app_config().unwrap_or_default().app_title()
}

pub fn log_level() -> log::Level {
    let debug = app_config().map(|c| c.debug_logging()).unwrap_or(false);
    if debug || cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
