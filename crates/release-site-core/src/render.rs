use crate::album::render_album;
use crate::audio::{plan_audio, AudioPlan};
use crate::config::SiteConfig;
use crate::embed::render_embed;
use crate::footer::render_footer;
use crate::patch::Patch;
use crate::platforms::render_platforms;
use crate::seo::apply_seo;
use crate::theme::apply_theme;
use crate::tracklist::render_tracklist;

/// Everything the page needs after the configuration has loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SitePlan {
    /// Static content, in application order.
    pub patches: Vec<Patch>,
    pub audio: AudioPlan,
    /// Patches for the page footer; applied after the audio section.
    pub footer: Vec<Patch>,
}

impl SitePlan {
    /// Every patch in the order it has to be applied.
    pub fn all_patches(&self) -> impl Iterator<Item = &Patch> {
        self.patches
            .iter()
            .chain(&self.audio.patches)
            .chain(&self.footer)
    }
}

/// Run every renderer in the fixed startup order: theme, SEO, album,
/// platforms, tracklist, media embed, audio, footer.
pub fn render_site(config: &SiteConfig, year: u32) -> SitePlan {
    let renderers: [fn(&SiteConfig) -> Vec<Patch>; 6] = [
        apply_theme,
        apply_seo,
        render_album,
        render_platforms,
        render_tracklist,
        render_embed,
    ];

    let patches: Vec<Patch> = renderers.iter().flat_map(|render| render(config)).collect();
    let audio = plan_audio(config);
    let footer = render_footer(config, year);

    log::debug!(
        "rendered {} content patches, {} audio patches",
        patches.len(),
        audio.patches.len()
    );

    SitePlan {
        patches,
        audio,
        footer,
    }
}
