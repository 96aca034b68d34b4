use crate::config::SiteConfig;
use crate::patch::{Node, Patch};
use crate::visualizer::VisualizerSettings;

pub const SECTION: &str = ".visualizer-section";
pub const AUDIO: &str = "#background-audio";
pub const CUSTOM_PLAYER: &str = ".custom-audio-player";
pub const AUDIO_TITLE: &str = ".audio-title";

/// MIME type for the `<source>` element, judged by file extension.
pub fn mime_for(source: &str) -> Option<&'static str> {
    let lower = source.to_ascii_lowercase();
    if lower.ends_with(".ogg") {
        Some("audio/ogg")
    } else if lower.ends_with(".mp3") {
        Some("audio/mpeg")
    } else {
        None
    }
}

/// What the browser layer has to do for the audio section.
///
/// The whole plan only applies when the page has a [`SECTION`] element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioPlan {
    pub patches: Vec<Patch>,
    pub wire_player: bool,
    pub autoplay: bool,
    pub visualizer: Option<VisualizerSettings>,
}

pub fn plan_audio(config: &SiteConfig) -> AudioPlan {
    let mut plan = AudioPlan::default();

    let Some(features) = &config.features else {
        return plan;
    };

    let audio = features.audio.as_ref().filter(|a| a.enabled);
    let Some(audio) = audio.filter(|_| features.audio_visualizer) else {
        plan.patches.push(Patch::RemoveClass {
            target: SECTION.to_string(),
            class: "active",
        });
        plan.patches.push(Patch::set_style(AUDIO, "display", "none"));
        return plan;
    };

    plan.patches.push(Patch::AddClass {
        target: SECTION.to_string(),
        class: "active",
    });

    let Some(source) = audio.source.as_deref().filter(|s| !s.is_empty()) else {
        return plan;
    };

    plan.patches.push(Patch::SetMediaSource {
        media: AUDIO.to_string(),
        src: source.to_string(),
        mime: mime_for(source),
    });

    if let Some(title) = audio.title.as_deref().filter(|t| !t.is_empty()) {
        plan.patches.push(Patch::set_attr(AUDIO, "title", title));
        plan.patches.push(Patch::InsertBeforeOnce {
            parent: SECTION.to_string(),
            before: CUSTOM_PLAYER.to_string(),
            unless: AUDIO_TITLE.to_string(),
            node: Node::new("div")
                .class("audio-title")
                .text(format!("Now Playing: {title}")),
        });
    }

    plan.wire_player = true;
    plan.autoplay = audio.autoplay;
    plan.visualizer = Some(VisualizerSettings::from_config(config));
    plan
}
