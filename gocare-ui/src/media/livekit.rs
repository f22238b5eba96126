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

//! [`MediaClient`] backed by the LiveKit JavaScript SDK.
//!
//! The SDK is not bundled. Its UMD build is injected as a `<script>` the first
//! time a room or track is requested and exposes the `LivekitClient` global
//! the bindings below resolve against.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

use super::{LocalAudioTrack, MediaClient, MediaError, MediaFuture, Room};

const SDK_GLOBAL: &str = "LivekitClient";
const SDK_SCRIPT_ID: &str = "livekit-client-sdk";
const DISCONNECTED_EVENT: &str = "disconnected";

mod sdk {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = LivekitClient)]
        pub type Room;

        #[wasm_bindgen(catch, constructor, js_namespace = LivekitClient)]
        pub fn new() -> Result<Room, JsValue>;

        #[wasm_bindgen(method)]
        pub fn on(this: &Room, event: &str, listener: &js_sys::Function);

        #[wasm_bindgen(catch, method)]
        pub fn connect(this: &Room, url: &str, token: &str) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, method)]
        pub fn disconnect(this: &Room) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(method, getter, js_name = localParticipant)]
        pub fn local_participant(this: &Room) -> LocalParticipant;

        pub type LocalParticipant;

        #[wasm_bindgen(catch, method, js_name = publishTrack)]
        pub fn publish_track(
            this: &LocalParticipant,
            track: &JsValue,
        ) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = LivekitClient, js_name = createLocalAudioTrack)]
        pub fn create_local_audio_track() -> Result<js_sys::Promise, JsValue>;
    }
}

thread_local! {
    // Shared by every caller that races the first load.
    static SDK_LOAD: RefCell<Option<Promise>> = const { RefCell::new(None) };
}

/// LiveKit client loaded from `sdk_src` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveKitClient {
    sdk_src: String,
}

impl LiveKitClient {
    pub fn new(sdk_src: impl Into<String>) -> Self {
        Self {
            sdk_src: sdk_src.into(),
        }
    }
}

impl MediaClient for LiveKitClient {
    fn create_room(&self) -> MediaFuture<Rc<dyn Room>> {
        let src = self.sdk_src.clone();
        async move {
            ensure_sdk_loaded(&src).await?;
            let inner = sdk::Room::new()?;
            Ok(Rc::new(LiveKitRoom { inner }) as Rc<dyn Room>)
        }
        .boxed_local()
    }

    fn create_local_audio_track(&self) -> MediaFuture<LocalAudioTrack> {
        let src = self.sdk_src.clone();
        async move {
            ensure_sdk_loaded(&src).await?;
            let track = settle(sdk::create_local_audio_track()).await?;
            Ok(LocalAudioTrack::from_js(track))
        }
        .boxed_local()
    }
}

struct LiveKitRoom {
    inner: sdk::Room,
}

impl Room for LiveKitRoom {
    fn on_disconnected(&self, handler: Box<dyn Fn()>) {
        let listener = Closure::wrap(handler);
        self.inner
            .on(DISCONNECTED_EVENT, listener.as_ref().unchecked_ref());
        // The SDK holds the only reference from here on.
        listener.forget();
    }

    fn connect(&self, url: &str, token: &str) -> MediaFuture<()> {
        let pending = self.inner.connect(url, token);
        async move { settle(pending).await.map(|_| ()) }.boxed_local()
    }

    fn publish_track(&self, track: &LocalAudioTrack) -> MediaFuture<()> {
        let pending = self
            .inner
            .local_participant()
            .publish_track(track.as_js());
        async move { settle(pending).await.map(|_| ()) }.boxed_local()
    }

    fn disconnect(&self) {
        if let Err(e) = self.inner.disconnect() {
            log::warn!("room disconnect failed: {}", super::js_error_message(&e));
        }
    }
}

async fn settle(pending: Result<Promise, JsValue>) -> Result<JsValue, MediaError> {
    let promise = pending?;
    Ok(JsFuture::from(promise).await?)
}

fn sdk_present(window: &web_sys::Window) -> bool {
    Reflect::get(window, &JsValue::from_str(SDK_GLOBAL))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

async fn ensure_sdk_loaded(src: &str) -> Result<(), MediaError> {
    let window = web_sys::window()
        .ok_or_else(|| MediaError::LibraryUnavailable("no global window".to_string()))?;
    if sdk_present(&window) {
        return Ok(());
    }

    let pending = SDK_LOAD.with(|cell| cell.borrow().clone());
    let promise = match pending {
        Some(promise) => promise,
        None => {
            log::info!("loading LiveKit client from {src}");
            let promise = inject_script(&window, src).map_err(|e| {
                MediaError::LibraryUnavailable(format!(
                    "failed to inject LiveKit client script: {}",
                    super::js_error_message(&e)
                ))
            })?;
            SDK_LOAD.with(|cell| *cell.borrow_mut() = Some(promise.clone()));
            promise
        }
    };

    if JsFuture::from(promise).await.is_err() {
        forget_failed_load(&window);
        return Err(MediaError::LibraryUnavailable(format!(
            "failed to load LiveKit client from {src}"
        )));
    }
    if !sdk_present(&window) {
        forget_failed_load(&window);
        return Err(MediaError::LibraryUnavailable(format!(
            "{src} did not define {SDK_GLOBAL}"
        )));
    }
    Ok(())
}

fn inject_script(window: &web_sys::Window, src: &str) -> Result<Promise, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_id(SDK_SCRIPT_ID);
    script.set_src(src);
    script.set_async(true);

    let promise = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&script)?;
    Ok(promise)
}

// Lets the next attempt inject a fresh script instead of awaiting a rejected
// promise forever.
fn forget_failed_load(window: &web_sys::Window) {
    SDK_LOAD.with(|cell| cell.borrow_mut().take());
    if let Some(script) = window
        .document()
        .and_then(|d| d.get_element_by_id(SDK_SCRIPT_ID))
    {
        script.remove();
    }
}
