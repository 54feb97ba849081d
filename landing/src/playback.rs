//! Browser playback for motion descriptors.
//!
//! Reads the attributes written by [`crate::motion::Motion`]:
//! mount triggers are revealed after two animation frames so the initial
//! style gets painted first; in-view triggers are watched by an
//! `IntersectionObserver`, revealed on enter and concealed again on leave.

use leptos::prelude::request_animation_frame;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::Trigger;

const SELECTOR: &str = "[data-motion]";
const FROM_ATTR: &str = "data-motion-from";
const TO_ATTR: &str = "data-motion-to";
const TRIGGER_ATTR: &str = "data-motion";

/// Share of an element that must be visible before it counts as in view.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Wire up playback for every animated element in the document.
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let nodes = document.query_selector_all(SELECTOR)?;
    let mut on_mount = Vec::new();
    let mut in_view = Vec::new();

    for idx in 0..nodes.length() {
        let Some(element) = nodes.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        // Remember the rendered style so in-view elements can leave again.
        let initial = element.get_attribute("style").unwrap_or_default();
        element.set_attribute(FROM_ATTR, &initial)?;

        match element.get_attribute(TRIGGER_ATTR).as_deref() {
            Some(t) if t == Trigger::InView.as_str() => in_view.push(element),
            _ => on_mount.push(element),
        }
    }

    if !in_view.is_empty() {
        let observer = observe(&in_view)?;
        // The observer lives as long as the page.
        std::mem::forget(observer);
    }

    request_animation_frame(move || {
        request_animation_frame(move || {
            for element in &on_mount {
                reveal(element);
            }
        })
    });

    Ok(())
}

fn observe(elements: &[Element]) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if entry.is_intersecting() {
                    reveal(&target);
                } else {
                    conceal(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}

fn reveal(element: &Element) {
    swap_style(element, TO_ATTR);
}

fn conceal(element: &Element) {
    swap_style(element, FROM_ATTR);
}

fn swap_style(element: &Element, source: &str) {
    if let Err(err) = copy_style(element, source) {
        web_sys::console::warn_2(&JsValue::from_str("[zeve] motion style not applied:"), &err);
    }
}

/// Copy the style stored in `source` onto `element`. Missing sources are skipped.
fn copy_style(element: &Element, source: &str) -> Result<bool, JsValue> {
    let Some(style) = element.get_attribute(source) else {
        return Ok(false);
    };
    element.set_attribute("style", &style)?;
    Ok(true)
}
