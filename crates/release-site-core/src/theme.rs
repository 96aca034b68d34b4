use crate::config::SiteConfig;
use crate::patch::{meta_selector, Patch};

/// Colour and font variables, plus the page title and description from `site`.
///
/// Colour values are passed through untouched; the stylesheet decides what to
/// do with anything it cannot parse.
pub fn apply_theme(config: &SiteConfig) -> Vec<Patch> {
    let mut patches = Vec::new();

    let Some(theme) = &config.theme else {
        return patches;
    };

    for (key, value) in &theme.colors {
        patches.push(Patch::root_var(format!("--{key}-color"), value));
    }

    if let Some(fonts) = &theme.fonts {
        if let Some(main) = &fonts.main {
            patches.push(Patch::root_var("--main-font", main));
        }
        if let Some(headings) = &fonts.headings {
            patches.push(Patch::root_var("--headings-font", headings));
        }
    }

    if let Some(site) = &config.site {
        if let Some(title) = &site.title {
            patches.push(Patch::SetTitle(title.clone()));
            patches.push(Patch::set_attr(meta_selector("property", "og:title"), "content", title));
        }
        if let Some(description) = &site.description {
            patches.push(Patch::set_attr(
                meta_selector("name", "description"),
                "content",
                description,
            ));
            patches.push(Patch::set_attr(
                meta_selector("property", "og:description"),
                "content",
                description,
            ));
        }
    }

    patches
}
