use release_site_core::reveal::{should_reveal, ACTIVE_CLASS, FADE_IN};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::events::listen;

fn reveal_visible(window: &Window, document: &Document) {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(elements) = document.query_selector_all(FADE_IN) else {
        return;
    };

    for i in 0..elements.length() {
        let Some(el) = elements.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if should_reveal(el.get_bounding_client_rect().top(), viewport) {
            el.class_list().add_1(ACTIVE_CLASS).ok();
        }
    }
}

/// Fade elements in as they scroll into view, starting with those already visible.
pub fn wire_scroll_reveal(window: &Window, document: &Document) {
    {
        let window_for_scroll = window.clone();
        let document = document.clone();
        listen(window, "scroll", move |_| reveal_visible(&window_for_scroll, &document));
    }
    reveal_visible(window, document);
}
