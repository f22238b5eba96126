// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reactive view of `location.hash`.

use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::page::current_hash;

const HASHCHANGE: &str = "hashchange";

/// Returns a signal holding the current fragment, updated on every
/// `hashchange`. The listener is removed when the component is dropped.
pub fn use_location_hash() -> Signal<String> {
    let hash = use_signal(current_hash);

    let listener = use_hook(move || {
        let listener = Closure::<dyn Fn()>::new(move || {
            let mut hash = hash;
            let fragment = current_hash();
            wasm_bindgen_futures::spawn_local(async move {
                hash.set(fragment);
            });
        });
        if let Err(e) = gloo_utils::window()
            .add_event_listener_with_callback(HASHCHANGE, listener.as_ref().unchecked_ref())
        {
            log::error!("failed to subscribe to {HASHCHANGE}: {e:?}");
        }
        Rc::new(listener)
    });

    use_drop(move || {
        let _ = gloo_utils::window()
            .remove_event_listener_with_callback(HASHCHANGE, (*listener).as_ref().unchecked_ref());
    });

    hash
}
