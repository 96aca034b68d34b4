use std::cell::RefCell;
use std::rc::Rc;

use release_site_core::player::{
    click_fraction, seek_time, volume_from_fraction, PlayerEvent, PlayerModel, PlayerView,
    CURRENT_TIME, DURATION, MUTE_BUTTON, PLAY_PAUSE_BUTTON, PROGRESS_CONTAINER, PROGRESS_FILL,
    REQUIRED_ANCHORS, SEEK_BALL, VOLUME_LEVEL, VOLUME_SLIDER,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAudioElement, MouseEvent};

use crate::dom::{query, set_display, set_style};
use crate::events::{listen, toggle_playback};

struct VolumeControls {
    mute_button: Element,
    slider: Element,
    level: Element,
}

struct Controls {
    play_pause: Element,
    progress: Element,
    fill: Element,
    seek_ball: Option<Element>,
    current_time: Option<Element>,
    duration: Option<Element>,
    volume: Option<VolumeControls>,
}

impl Controls {
    fn find(document: &Document) -> Option<Self> {
        let volume = match (
            query(document, MUTE_BUTTON),
            query(document, VOLUME_SLIDER),
            query(document, VOLUME_LEVEL),
        ) {
            (Some(mute_button), Some(slider), Some(level)) => Some(VolumeControls {
                mute_button,
                slider,
                level,
            }),
            _ => None,
        };

        Some(Self {
            play_pause: query(document, PLAY_PAUSE_BUTTON)?,
            progress: query(document, PROGRESS_CONTAINER)?,
            fill: query(document, PROGRESS_FILL)?,
            seek_ball: query(document, SEEK_BALL),
            current_time: query(document, CURRENT_TIME),
            duration: query(document, DURATION),
            volume,
        })
    }

    fn render(&self, view: &PlayerView) {
        let icon = |el: &Element, selector: &str| el.query_selector(selector).ok().flatten();

        set_display(icon(&self.play_pause, ".play-icon").as_ref(), view.show_play_icon);
        set_display(icon(&self.play_pause, ".pause-icon").as_ref(), view.show_pause_icon);
        self.play_pause.set_attribute("aria-label", view.play_label).ok();

        if let Some(percent) = view.progress_percent {
            let width = format!("{percent}%");
            set_style(&self.fill, "width", &width);
            if let Some(ball) = &self.seek_ball {
                set_style(ball, "left", &width);
            }
            if let Some(current) = &self.current_time {
                current.set_text_content(Some(&view.current_time));
            }
        }
        if let Some(duration) = &self.duration {
            duration.set_text_content(Some(&view.duration));
        }

        if let Some(volume) = &self.volume {
            set_display(
                icon(&volume.mute_button, ".volume-icon").as_ref(),
                view.show_volume_icon,
            );
            set_display(icon(&volume.mute_button, ".mute-icon").as_ref(), view.show_mute_icon);
            volume.mute_button.set_attribute("aria-label", view.mute_label).ok();
            set_style(&volume.level, "width", &format!("{}%", view.volume_percent));
        }
    }
}

/// Fraction of `bar`'s width at which a click `event` landed.
fn click_position(bar: &Element, event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<MouseEvent>()?;
    let rect = bar.get_bounding_client_rect();
    Some(click_fraction(f64::from(event.client_x()), rect.left(), rect.width()))
}

/// Wire the custom controls to `audio`.
///
/// Returns `false` and leaves the page alone when the play button or the
/// progress bar is missing.
pub fn wire_player(document: &Document, audio: &HtmlAudioElement) -> bool {
    let Some(controls) = Controls::find(document) else {
        log::warn!("Custom audio player elements not found ({})", REQUIRED_ANCHORS.join(", "));
        return false;
    };

    audio.set_controls(false);

    let controls = Rc::new(controls);
    let model = Rc::new(RefCell::new(PlayerModel::new(audio.volume(), audio.muted())));
    controls.render(&model.borrow().view());

    // Every state change goes through the model and re-renders the controls.
    let update = {
        let controls = controls.clone();
        let model = model.clone();
        move |event: PlayerEvent| {
            let mut model = model.borrow_mut();
            model.handle(event);
            controls.render(&model.view());
        }
    };

    {
        let audio = audio.clone();
        listen(&controls.play_pause, "click", move |_| toggle_playback(&audio));
    }

    let media_events: [(&str, fn(&HtmlAudioElement) -> PlayerEvent); 4] = [
        ("play", |_| PlayerEvent::Played),
        ("pause", |_| PlayerEvent::Paused),
        ("timeupdate", |a| PlayerEvent::TimeUpdate {
            current_time: a.current_time(),
            duration: a.duration(),
        }),
        ("loadedmetadata", |a| PlayerEvent::MetadataLoaded {
            duration: a.duration(),
        }),
    ];
    for (name, to_event) in media_events {
        let audio_for_event = audio.clone();
        let update = update.clone();
        listen(audio, name, move |_| update(to_event(&audio_for_event)));
    }

    {
        let audio = audio.clone();
        let bar = controls.progress.clone();
        listen(&controls.progress, "click", move |event| {
            let target = click_position(&bar, &event).and_then(|f| seek_time(f, audio.duration()));
            if let Some(time) = target {
                audio.set_current_time(time);
            }
        });
    }

    if let Some(volume) = &controls.volume {
        {
            let audio = audio.clone();
            let update = update.clone();
            listen(&volume.mute_button, "click", move |_| {
                audio.set_muted(!audio.muted());
                update(PlayerEvent::MuteToggled);
            });
        }
        {
            let audio = audio.clone();
            let slider = volume.slider.clone();
            listen(&volume.slider, "click", move |event| {
                if let Some(fraction) = click_position(&slider, &event) {
                    let level = volume_from_fraction(fraction);
                    audio.set_volume(level);
                    audio.set_muted(false);
                    update(PlayerEvent::VolumeSet(level));
                }
            });
        }
    }

    true
}
