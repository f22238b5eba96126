// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam between the page and the real-time media client.
//!
//! The room view only talks to [`MediaClient`] and [`Room`]. The browser build
//! plugs in [`livekit::LiveKitClient`]; tests plug in scripted doubles.

pub mod livekit;
pub mod session;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub use livekit::LiveKitClient;
pub use session::join_and_publish;

/// Failure anywhere in the connect sequence.
///
/// `Display` is the bare message so it can be shown verbatim after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The client library could not be loaded.
    #[error("{0}")]
    LibraryUnavailable(String),
    /// A call into the client library threw or rejected.
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        MediaError::Js(js_error_message(&value))
    }
}

/// Text of a thrown JS value: its `message` when truthy, otherwise the value
/// itself, both coerced with JS `String()`.
pub fn js_error_message(value: &JsValue) -> String {
    let message = if value.is_object() {
        js_sys::Reflect::get(value, &JsValue::from_str("message")).unwrap_or(JsValue::UNDEFINED)
    } else {
        JsValue::UNDEFINED
    };
    if message.is_truthy() {
        js_string(&message)
    } else {
        js_string(value)
    }
}

fn js_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("String"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .and_then(|f| f.call1(&JsValue::UNDEFINED, value).ok())
        .and_then(|s| s.as_string())
        // Only reachable when `toString` itself throws.
        .unwrap_or_else(|| format!("{value:?}"))
}

pub type MediaFuture<T> = LocalBoxFuture<'static, Result<T, MediaError>>;

/// Microphone track created by the media client, ready to be published.
#[derive(Debug, Clone)]
pub struct LocalAudioTrack {
    handle: JsValue,
}

impl LocalAudioTrack {
    pub fn from_js(handle: JsValue) -> Self {
        Self { handle }
    }

    pub fn as_js(&self) -> &JsValue {
        &self.handle
    }
}

/// Entry point into the media client library.
pub trait MediaClient {
    /// Creates a fresh, unconnected room handle. Loads the library on first
    /// use.
    fn create_room(&self) -> MediaFuture<Rc<dyn Room>>;

    /// Captures the microphone.
    fn create_local_audio_track(&self) -> MediaFuture<LocalAudioTrack>;
}

/// A room on the media server, as seen by the local participant.
pub trait Room {
    /// Registers `handler` to run whenever the room disconnects.
    fn on_disconnected(&self, handler: Box<dyn Fn()>);

    fn connect(&self, url: &str, token: &str) -> MediaFuture<()>;

    /// Publishes `track` for the local participant.
    fn publish_track(&self, track: &LocalAudioTrack) -> MediaFuture<()>;

    fn disconnect(&self);
}
