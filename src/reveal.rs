//! Scroll-into-view entrance transitions.
//!
//! Elements carrying the `reveal` class start hidden (see the stylesheet)
//! and get `is-visible` once they enter the viewport. One observer serves
//! the whole page. Cosmetic only: the page renders fully without it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Invisible component that wires the observer once the page is mounted.
#[component]
pub fn RevealObserver() -> impl IntoView {
    Effect::new(move || install());
    view! {}
}

fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.15));

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };

    if let Ok(nodes) = document.query_selector_all(".reveal") {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }

    // Observer and callback live for the lifetime of the page.
    callback.forget();
}
