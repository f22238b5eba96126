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

use crate::components::connect_form::ConnectForm;
use crate::constants::app_title;

#[component]
pub fn Home() -> Element {
    let title = app_title();

    rsx! {
        div { class: "home",
            style: "font-family: sans-serif; max-width: 640px; margin: 40px auto;",
            h1 { "{title}" }
            p { "Connect to a LiveKit room and talk to the agent." }
            ol {
                li { "Generate a LiveKit access token on your server." }
                li {
                    "Open this page with a URL like: "
                    code { "?url=wss://your-livekit&token=YOUR_TOKEN" }
                }
            }
            ConnectForm {}
        }
    }
}
