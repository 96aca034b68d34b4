use std::cell::{Cell, RefCell};
use std::rc::Rc;

use release_site_core::visualizer::{
    fft_size_for_width, frame_bars, VisualizerSettings, FADE_FILL, REFLECTION_FILL,
    REFLECTION_HEIGHT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AnalyserNode, AudioContext, AudioContextState, CanvasRenderingContext2d, Document,
    HtmlAudioElement, HtmlCanvasElement,
};

use crate::events::{listen, toggle_playback};

pub const CANVAS_ID: &str = "audio-visualizer";

/// Web Audio graph: media element source -> analyser -> speakers.
#[derive(Clone)]
struct Graph {
    ctx: AudioContext,
    analyser: AnalyserNode,
}

impl Graph {
    fn connect(
        audio: &HtmlAudioElement,
        settings: &VisualizerSettings,
        width: u32,
    ) -> Result<Self, JsValue> {
        let ctx = AudioContext::new()?;
        let analyser = ctx.create_analyser()?;
        let source = ctx.create_media_element_source(audio)?;

        source.connect_with_audio_node(&analyser)?;
        analyser.connect_with_audio_node(&ctx.destination())?;

        analyser.set_fft_size(fft_size_for_width(width));
        analyser.set_smoothing_time_constant(settings.smoothing);

        Ok(Self { ctx, analyser })
    }

    /// Browsers start contexts suspended until a user gesture.
    fn resume_if_suspended(&self) {
        if self.ctx.state() != AudioContextState::Suspended {
            return;
        }
        match self.ctx.resume() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Could not resume audio context: {e:?}");
                }
            }),
            Err(e) => log::warn!("Could not resume audio context: {e:?}"),
        }
    }
}

struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    analyser: AnalyserNode,
    settings: VisualizerSettings,
    data: Vec<u8>,
}

impl Painter {
    fn draw(&mut self) {
        let bins = self.analyser.frequency_bin_count() as usize;
        self.data.resize(bins, 0);
        self.analyser.get_byte_frequency_data(&mut self.data);

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());

        self.ctx.set_fill_style_str(FADE_FILL);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        for bar in frame_bars(&self.data, width, height, self.settings.sensitivity) {
            let gradient = self.ctx.create_linear_gradient(0.0, bar.y, 0.0, height);
            gradient.add_color_stop(0.0, &self.settings.primary).ok();
            gradient.add_color_stop(1.0, &self.settings.secondary).ok();

            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

            self.ctx.set_fill_style_str(REFLECTION_FILL);
            self.ctx.fill_rect(bar.x, bar.y, bar.width, REFLECTION_HEIGHT);
        }
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok();
    }
}

/// Draw one frame per animation frame until the page goes away.
fn start_render_loop(mut painter: Painter) {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(callback) = next.borrow().as_ref() {
            request_animation_frame(callback);
        }
        painter.draw();
    }) as Box<dyn FnMut()>));

    let first = frame.borrow();
    if let Some(callback) = first.as_ref() {
        request_animation_frame(callback);
    }
}

/// Match the canvas backing store to its displayed size.
fn sync_canvas_size(canvas: &HtmlCanvasElement) {
    canvas.set_width(u32::try_from(canvas.client_width()).unwrap_or(0));
    canvas.set_height(u32::try_from(canvas.client_height()).unwrap_or(0));
}

/// Hook the bar graph on `#audio-visualizer` to `audio`.
///
/// The analyser graph is built on the first `play` event, since a media
/// element can only ever feed one source node.
pub fn wire_visualizer(
    document: &Document,
    audio: &HtmlAudioElement,
    settings: VisualizerSettings,
) {
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    sync_canvas_size(&canvas);

    let graph: Rc<RefCell<Option<Graph>>> = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(false));

    {
        let canvas = canvas.clone();
        let graph = graph.clone();
        listen(&window, "resize", move |_| {
            sync_canvas_size(&canvas);
            if let Some(graph) = graph.borrow().as_ref() {
                graph.analyser.set_fft_size(fft_size_for_width(canvas.width()));
            }
        });
    }

    {
        let audio_for_graph = audio.clone();
        let canvas = canvas.clone();
        listen(audio, "play", move |_| {
            if graph.borrow().is_none() {
                match Graph::connect(&audio_for_graph, &settings, canvas.width()) {
                    Ok(g) => *graph.borrow_mut() = Some(g),
                    Err(e) => {
                        log::warn!("Could not set up audio analyser: {e:?}");
                        return;
                    }
                }
            }
            let Some(g) = graph.borrow().clone() else {
                return;
            };
            g.resume_if_suspended();

            if !running.replace(true) {
                start_render_loop(Painter {
                    canvas: canvas.clone(),
                    ctx: ctx.clone(),
                    analyser: g.analyser,
                    settings: settings.clone(),
                    data: Vec::new(),
                });
            }
        });
    }

    {
        let audio = audio.clone();
        listen(&canvas, "click", move |_| toggle_playback(&audio));
    }
    canvas.set_title("Click to play/pause audio");
}
