//! Browser shell: mounts the page, assigns the title once, starts playback.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::pages::Home;
use crate::playback;
use crate::styles::LANDING_CSS;
use crate::title::{TitleOnce, TitleSink};

static TITLE_GUARD: TitleOnce = TitleOnce::new();

/// The live browser document.
pub struct BrowserDocument;

impl TitleSink for BrowserDocument {
    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Mount the landing page into `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(|| {
        view! {
            <style>{LANDING_CSS}</style>
            <Home />
        }
    });

    TITLE_GUARD.apply(&BrowserDocument);

    if let Err(err) = playback::start() {
        web_sys::console::warn_2(&JsValue::from_str("[zeve] motion playback disabled:"), &err);
    }
}
