// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for gocare-ui component tests.
//
// Provides mount/cleanup helpers, Dioxus rendering helpers, address-bar
// manipulation, and scripted stand-ins for the media client and the page so
// that individual test files stay focused on assertions rather than
// boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{self, FutureExt};
use gocare_ui::media::{LocalAudioTrack, MediaClient, MediaError, MediaFuture, Room};
use gocare_ui::page::PageControl;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn status_text(mount: &web_sys::Element) -> String {
    mount
        .query_selector("#connection-status")
        .unwrap()
        .expect("status line missing")
        .text_content()
        .unwrap_or_default()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

pub fn input_value(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

/// Set an input's value and fire a bubbling `input` event, as typing would.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can flush pending work.
pub async fn yield_now() {
    for _ in 0..2 {
        // requestAnimationFrame fires after the current microtask queue is
        // drained, giving spawned tasks and Dioxus mutations time to land.
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Address bar
// ---------------------------------------------------------------------------

/// Replace the current address with `path + search + fragment` without
/// firing `hashchange` or reloading.
pub fn set_address(search: &str, fragment: &str) {
    let path = gloo_utils::window().location().pathname().unwrap();
    gloo_utils::window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("{path}{search}{fragment}")))
        .unwrap();
}

pub fn clear_address() {
    set_address("", "");
}

/// Change the fragment the way a user would; fires `hashchange`.
pub fn navigate_fragment(fragment: &str) {
    gloo_utils::window().location().set_hash(fragment).unwrap();
}

/// Wait until queued `hashchange` events have been delivered.
pub async fn settle_hashchange() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
    yield_now().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

pub fn inject_app_config(title: &str) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"appTitle".into(), &title.into()).unwrap();
    js_sys::Reflect::set(&config, &"debugLogging".into(), &"true".into()).unwrap();
    let frozen = js_sys::Object::freeze(&config);
    js_sys::Reflect::set(&gloo_utils::window(), &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// `appTitle` must be a string, so a number makes the config unparseable.
pub fn inject_malformed_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"appTitle".into(), &JsValue::from(42)).unwrap();
    js_sys::Reflect::set(&gloo_utils::window(), &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Scripted media client
// ---------------------------------------------------------------------------

/// Which steps of the connect sequence should fail, and with what message.
#[derive(Clone, Debug, Default)]
pub struct Script {
    pub mic_error: Option<String>,
    pub connect_error: Option<String>,
    pub publish_error: Option<String>,
}

fn js_failure(message: &Option<String>) -> Result<(), MediaError> {
    match message {
        Some(message) => Err(MediaError::from(JsValue::from(js_sys::Error::new(message)))),
        None => Ok(()),
    }
}

/// Media client that records every call and fails where the script says.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    script: Script,
    calls: Rc<RefCell<Vec<String>>>,
    disconnect_handlers: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
}

impl ScriptedClient {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Emit the disconnect event of every room created so far.
    pub fn fire_disconnect(&self) {
        for handler in self.disconnect_handlers.borrow().iter() {
            handler();
        }
    }

    /// Emit the disconnect event of the `index`-th room only.
    pub fn fire_disconnect_of(&self, index: usize) {
        if let Some(handler) = self.disconnect_handlers.borrow().get(index) {
            handler();
        }
    }
}

impl MediaClient for ScriptedClient {
    fn create_room(&self) -> MediaFuture<Rc<dyn Room>> {
        self.calls.borrow_mut().push("create_room".to_string());
        let room = ScriptedRoom {
            script: self.script.clone(),
            calls: self.calls.clone(),
            disconnect_handlers: self.disconnect_handlers.clone(),
        };
        future::ready(Ok(Rc::new(room) as Rc<dyn Room>)).boxed_local()
    }

    fn create_local_audio_track(&self) -> MediaFuture<LocalAudioTrack> {
        self.calls
            .borrow_mut()
            .push("create_local_audio_track".to_string());
        let result = js_failure(&self.script.mic_error)
            .map(|_| LocalAudioTrack::from_js(JsValue::from_str("microphone")));
        future::ready(result).boxed_local()
    }
}

struct ScriptedRoom {
    script: Script,
    calls: Rc<RefCell<Vec<String>>>,
    disconnect_handlers: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
}

impl Room for ScriptedRoom {
    fn on_disconnected(&self, handler: Box<dyn Fn()>) {
        self.calls.borrow_mut().push("on_disconnected".to_string());
        self.disconnect_handlers.borrow_mut().push(handler);
    }

    fn connect(&self, url: &str, token: &str) -> MediaFuture<()> {
        self.calls.borrow_mut().push(format!("connect {url} {token}"));
        future::ready(js_failure(&self.script.connect_error)).boxed_local()
    }

    fn publish_track(&self, track: &LocalAudioTrack) -> MediaFuture<()> {
        self.calls.borrow_mut().push(format!(
            "publish_track {}",
            track.as_js().as_string().unwrap_or_default()
        ));
        future::ready(js_failure(&self.script.publish_error)).boxed_local()
    }

    fn disconnect(&self) {
        self.calls.borrow_mut().push("disconnect".to_string());
    }
}

// ---------------------------------------------------------------------------
// Recording page
// ---------------------------------------------------------------------------

pub const TEST_BASE_ADDRESS: &str = "http://test.local/demo";

/// Page that records alerts and navigations instead of performing them.
#[derive(Clone, Default)]
pub struct RecordingPage {
    alerts: Rc<RefCell<Vec<String>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl RecordingPage {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl PageControl for RecordingPage {
    fn base_address(&self) -> String {
        TEST_BASE_ADDRESS.to_string()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn replace_and_reload(&self, target: &str) {
        self.navigations.borrow_mut().push(target.to_string());
    }
}

// ---------------------------------------------------------------------------
// Doubles handed to wrapper components
// ---------------------------------------------------------------------------
//
// `render_into` takes a plain `fn`, so wrappers pick up the doubles for the
// current test from here.

thread_local! {
    static CLIENT: RefCell<ScriptedClient> = RefCell::new(ScriptedClient::default());
    static PAGE: RefCell<RecordingPage> = RefCell::new(RecordingPage::default());
}

pub fn install_client(client: ScriptedClient) {
    CLIENT.with(|c| *c.borrow_mut() = client);
}

pub fn installed_client() -> ScriptedClient {
    CLIENT.with(|c| c.borrow().clone())
}

pub fn install_page(page: RecordingPage) {
    PAGE.with(|p| *p.borrow_mut() = page);
}

pub fn installed_page() -> RecordingPage {
    PAGE.with(|p| p.borrow().clone())
}
