//! Browser entry point: loads `config.json`, renders the page from it and
//! wires up the audio player and visualizer.

use release_site_core::audio::{AudioPlan, AUDIO, SECTION};
use release_site_core::{render_site, CONFIG_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAudioElement};

mod dom;
mod events;
pub mod loader;
mod player;
mod reveal;
mod visualizer;

use crate::loader::LoadError;

fn setup_audio(document: &Document, plan: &AudioPlan) {
    if dom::query(document, SECTION).is_none() {
        return;
    }
    dom::apply_patches(document, &plan.patches);

    if !plan.wire_player {
        return;
    }
    let Some(audio) = dom::query(document, AUDIO)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
    else {
        return;
    };

    player::wire_player(document, &audio);
    if let Some(settings) = &plan.visualizer {
        visualizer::wire_visualizer(document, &audio, settings.clone());
    }
    if plan.autoplay {
        events::play(&audio, "Autoplay prevented");
    }
}

async fn init() -> Result<(), LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let document = window.document().ok_or(LoadError::NoWindow)?;

    let config = loader::fetch_config(CONFIG_PATH).await?;
    let year = js_sys::Date::new_0().get_full_year();
    let plan = render_site(&config, year);

    dom::apply_patches(&document, &plan.patches);
    setup_audio(&document, &plan.audio);
    dom::apply_patches(&document, &plan.footer);
    Ok(())
}

/// Sections fade in whether or not the configuration loaded, so a page
/// without `config.json` still shows its static content.
fn wire_reveal() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(document) = window.document() {
        reveal::wire_scroll_reveal(&window, &document);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        match init().await {
            Ok(()) => log::info!("Site initialized successfully"),
            Err(e) => log::error!("Failed to initialize site: {e}"),
        }
        wire_reveal();
    });
}
