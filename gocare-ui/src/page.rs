// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser page side effects used by the connect form and room view.

use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

/// Navigation and dialogs the connect form needs from the page.
pub trait PageControl {
    /// `origin + pathname` of the current page, without query or fragment.
    fn base_address(&self) -> String;

    /// Shows a blocking alert.
    fn alert(&self, message: &str);

    /// Replaces the current history entry with `target` and forces a full
    /// reload so every component remounts from scratch.
    fn replace_and_reload(&self, target: &str);
}

/// [`PageControl`] over `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageControl for BrowserPage {
    fn base_address(&self) -> String {
        let location = gloo_utils::window().location();
        let origin = location.origin().unwrap_or_default();
        let path = location.pathname().unwrap_or_default();
        format!("{origin}{path}")
    }

    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("alert failed: {e:?}");
        }
    }

    fn replace_and_reload(&self, target: &str) {
        let location = gloo_utils::window().location();
        if let Err(e) = location.replace(target) {
            log::error!("failed to replace location: {e:?}");
            return;
        }
        // Same-document fragment changes do not reload on their own.
        if let Err(e) = location.reload() {
            log::error!("failed to reload page: {e:?}");
        }
    }
}

/// Current `location.hash`, leading `#` included, or empty.
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Reads `name` from the current query string with `URLSearchParams`
/// semantics.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param_in(&search, name)
}

pub fn query_param_in(search: &str, name: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search)
        .map_err(|e: JsValue| log::warn!("unparseable query string {search:?}: {e:?}"))
        .ok()?
        .get(name)
}
