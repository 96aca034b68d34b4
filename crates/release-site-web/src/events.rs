use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget, HtmlMediaElement};

use release_site_core::player::Toggle;

/// Attach `handler` for the lifetime of the page.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("could not listen for '{event}': {e:?}");
    }
    closure.forget();
}

/// Start playback; a rejected play promise (autoplay policy and the like) is
/// logged as a warning with `context` and otherwise ignored.
pub(crate) fn play(media: &HtmlMediaElement, context: &'static str) {
    match media.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{context}: {e:?}");
            }
        }),
        Err(e) => log::warn!("{context}: {e:?}"),
    }
}

pub(crate) fn toggle_playback(media: &HtmlMediaElement) {
    match Toggle::for_paused(media.paused()) {
        Toggle::Play => play(media, "Play failed"),
        Toggle::Pause => {
            media.pause().ok();
        }
    }
}
