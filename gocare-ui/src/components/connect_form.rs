/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use dioxus::prelude::*;
use gocare_types::{ConnectIntent, Credentials};

use crate::components::room_view::RoomView;
use crate::constants::{TOKEN_QUERY_PARAM, URL_QUERY_PARAM};
use crate::context::PageCtx;
use crate::page::query_param;

/// Address the page reloads to once the form is submitted.
pub fn connect_target(base_address: &str, credentials: Credentials) -> String {
    format!(
        "{base_address}{}",
        ConnectIntent::from(credentials).to_fragment()
    )
}

/// Server URL and token inputs, seeded from `?url=` and `?token=`.
///
/// Connecting never happens in place: the credentials are written into the
/// fragment and the page reloads, so the room view always starts fresh.
#[component]
pub fn ConnectForm() -> Element {
    let page = use_context::<PageCtx>();
    let mut url_input = use_signal(|| query_param(URL_QUERY_PARAM).unwrap_or_default());
    let mut token_input = use_signal(|| query_param(TOKEN_QUERY_PARAM).unwrap_or_default());

    let handle_connect = move |_| {
        let credentials = match Credentials::new(url_input(), token_input()) {
            Ok(credentials) => credentials,
            Err(e) => {
                page.0.alert(&e.to_string());
                return;
            }
        };
        log::info!("connecting to {}", credentials.url());
        let target = connect_target(&page.0.base_address(), credentials);
        page.0.replace_and_reload(&target);
    };

    rsx! {
        div { class: "connect-form", style: "display: grid; gap: 8px;",
            input {
                id: "livekit-url",
                r#type: "text",
                placeholder: "LiveKit URL",
                value: "{url_input}",
                oninput: move |evt| url_input.set(evt.value())
            }
            input {
                id: "access-token",
                r#type: "text",
                placeholder: "Access Token",
                value: "{token_input}",
                oninput: move |evt| token_input.set(evt.value())
            }
            button {
                id: "connect-button",
                r#type: "button",
                onclick: handle_connect,
                "Connect"
            }
            RoomView {}
        }
    }
}
