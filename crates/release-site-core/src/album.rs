use crate::config::SiteConfig;
use crate::patch::Patch;

pub const TITLE: &str = ".cover-meta h1";
pub const SUBTITLE: &str = ".cover-meta h2";
pub const COVER: &str = ".album-cover-small";
pub const RELEASE_DATE: &str = ".release-date";
pub const HEADER: &str = ".album-header-container";

/// Header block: title, subtitle, cover art and release date.
pub fn render_album(config: &SiteConfig) -> Vec<Patch> {
    let mut patches = Vec::new();

    let Some(album) = &config.album else {
        return patches;
    };

    if let Some(title) = &album.title {
        patches.push(Patch::set_text(TITLE, title));
    }
    if let Some(subtitle) = &album.subtitle {
        patches.push(Patch::set_text(SUBTITLE, subtitle));
    }
    if let Some(date) = album.release_date.as_deref().filter(|d| !d.is_empty()) {
        patches.push(Patch::set_text(RELEASE_DATE, format!("Released: {date}")));
    }

    if let Some(cover) = album.cover_image.as_deref().filter(|c| !c.is_empty()) {
        patches.push(Patch::set_attr(COVER, "src", cover));
        let image = format!("url('{cover}')");
        patches.push(Patch::set_style(HEADER, "background-image", &image));
        patches.push(Patch::root_var("--album-cover-image", image));
    }

    patches
}
