// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! The media client and page controls are shared through Dioxus's context
//! system so tests can swap them for scripted doubles.

use std::rc::Rc;

use crate::media::{LiveKitClient, MediaClient};
use crate::page::{BrowserPage, PageControl};

/// Media client used by the room view.
#[derive(Clone)]
pub struct MediaClientCtx(pub Rc<dyn MediaClient>);

impl MediaClientCtx {
    pub fn new(client: impl MediaClient + 'static) -> Self {
        Self(Rc::new(client))
    }

    pub fn livekit(sdk_src: impl Into<String>) -> Self {
        Self::new(LiveKitClient::new(sdk_src))
    }
}

impl PartialEq for MediaClientCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Page side effects used by the connect form.
#[derive(Clone)]
pub struct PageCtx(pub Rc<dyn PageControl>);

impl PageCtx {
    pub fn new(page: impl PageControl + 'static) -> Self {
        Self(Rc::new(page))
    }

    pub fn browser() -> Self {
        Self::new(BrowserPage)
    }
}

impl PartialEq for PageCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
