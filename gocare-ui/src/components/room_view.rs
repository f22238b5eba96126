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

//! Connection status line.
//!
//! Whenever the fragment holds a `#connect:` intent the view joins the room,
//! publishes the microphone and reports the outcome. Attempts are numbered;
//! only the latest one may update the status, so a slow attempt that gets
//! superseded by a fragment change cannot overwrite the newer result.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gocare_types::{AttemptId, ConnectIntent, ConnectionTracker, FragmentError};

use crate::context::MediaClientCtx;
use crate::hooks::use_location_hash;
use crate::media::{join_and_publish, Room};

#[component]
pub fn RoomView() -> Element {
    let client = use_context::<MediaClientCtx>();
    let hash = use_location_hash();
    let mut tracker = use_signal(ConnectionTracker::default);
    let active_room: Rc<RefCell<Option<Rc<dyn Room>>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect(move || {
        let fragment = hash.read().clone();
        let intent = match ConnectIntent::parse(&fragment) {
            Ok(intent) => intent,
            Err(FragmentError::NotAConnectFragment) => {
                if !fragment.is_empty() {
                    log::debug!("ignoring fragment {fragment:?}");
                }
                return;
            }
            Err(e) => {
                log::warn!("ignoring fragment: {e}");
                return;
            }
        };

        if let Some(previous) = active_room.borrow_mut().take() {
            previous.disconnect();
        }
        let attempt = tracker.write().begin_attempt();
        log::info!("connection attempt {attempt} to {}", intent.url());

        let client = client.0.clone();
        let active_room = active_room.clone();
        spawn(async move {
            let outcome =
                join_and_publish(client.as_ref(), &intent, disconnect_observer(tracker, attempt))
                    .await;
            match outcome {
                Ok(room) => {
                    if tracker.write().complete(attempt, Ok(())) {
                        log::info!("attempt {attempt} connected and publishing");
                        *active_room.borrow_mut() = Some(room);
                    } else {
                        log::info!("attempt {attempt} was superseded, leaving its room");
                        room.disconnect();
                    }
                }
                Err(e) => {
                    log::error!("attempt {attempt} failed: {e}");
                    tracker.write().complete(attempt, Err(e.to_string()));
                }
            }
        });
    });

    let status = tracker.read().status().clone();
    let is_error = status.is_error();

    rsx! {
        p {
            id: "connection-status",
            class: if is_error { "status status-error" } else { "status" },
            style: if is_error { "color: crimson;" } else { "" },
            "{status}"
        }
    }
}

fn disconnect_observer(tracker: Signal<ConnectionTracker>, attempt: AttemptId) -> Box<dyn Fn()> {
    Box::new(move || {
        let mut tracker = tracker;
        wasm_bindgen_futures::spawn_local(async move {
            // The room can outlive the view that created it.
            let Ok(mut tracker) = tracker.try_write() else {
                log::debug!("attempt {attempt} disconnected after the view was dropped");
                return;
            };
            if tracker.disconnected(attempt) {
                log::info!("attempt {attempt} disconnected");
            }
        });
    })
}
