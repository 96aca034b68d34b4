use crate::config::SiteConfig;
use crate::patch::{push_meta, Patch};
use crate::structured_data::{StructuredDataUpdate, SCHEMA_ELEMENT};

pub const CANONICAL_LINK: &str = "link[rel=\"canonical\"]";

/// Search and social metadata from the `seo` section.
pub fn apply_seo(config: &SiteConfig) -> Vec<Patch> {
    let mut patches = Vec::new();

    let Some(seo) = &config.seo else {
        return patches;
    };

    if let Some(title) = seo.title.as_deref().filter(|t| !t.is_empty()) {
        patches.push(Patch::SetTitle(title.to_string()));
    }

    push_meta(&mut patches, "name", "description", seo.description.as_deref());
    push_meta(&mut patches, "name", "keywords", seo.keywords.as_deref());

    if let Some(url) = seo.canonical_url.as_deref().filter(|u| !u.is_empty()) {
        patches.push(Patch::set_attr(CANONICAL_LINK, "href", url));
    }

    if let Some(og) = &seo.open_graph {
        push_meta(&mut patches, "property", "og:title", og.title.as_deref());
        push_meta(&mut patches, "property", "og:description", og.description.as_deref());
        push_meta(&mut patches, "property", "og:url", og.url.as_deref());
        push_meta(&mut patches, "property", "og:image", og.image.as_deref());
        push_meta(&mut patches, "property", "og:image:alt", og.image_alt.as_deref());
        push_meta(&mut patches, "property", "og:site_name", og.site_name.as_deref());
    }

    if let Some(tw) = &seo.twitter {
        push_meta(&mut patches, "name", "twitter:card", tw.card.as_deref());
        push_meta(&mut patches, "name", "twitter:title", tw.title.as_deref());
        push_meta(&mut patches, "name", "twitter:description", tw.description.as_deref());
        push_meta(&mut patches, "name", "twitter:image", tw.image.as_deref());
        push_meta(&mut patches, "name", "twitter:creator", tw.creator.as_deref());
    }

    if let Some(album) = seo.structured_data.as_ref().and_then(|sd| sd.music_album.as_ref()) {
        patches.push(Patch::MergeStructuredData {
            target: SCHEMA_ELEMENT.to_string(),
            update: StructuredDataUpdate::new(album, config.tracks.as_deref()),
        });
    }

    patches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seo(json: &str) -> Vec<Patch> {
        apply_seo(&SiteConfig::from_json(json).unwrap())
    }

    #[test]
    fn writes_only_non_empty_values() {
        let patches = seo(
            r#"{"seo": {"title": "", "description": "Desc", "keywords": "",
                        "openGraph": {"title": "OG", "imageAlt": "Cover"},
                        "twitter": {"card": "summary_large_image", "creator": ""}}}"#,
        );
        assert_eq!(
            patches,
            vec![
                Patch::set_attr("meta[name=\"description\"]", "content", "Desc"),
                Patch::set_attr("meta[property=\"og:title\"]", "content", "OG"),
                Patch::set_attr("meta[property=\"og:image:alt\"]", "content", "Cover"),
                Patch::set_attr("meta[name=\"twitter:card\"]", "content", "summary_large_image"),
            ]
        );
    }

    #[test]
    fn canonical_and_title() {
        let patches = seo(r#"{"seo": {"title": "Album", "canonicalUrl": "https://x/"}}"#);
        assert_eq!(
            patches,
            vec![
                Patch::SetTitle("Album".into()),
                Patch::set_attr(CANONICAL_LINK, "href", "https://x/"),
            ]
        );
    }

    #[test]
    fn structured_data_uses_top_level_tracks() {
        let patches = seo(
            r#"{"seo": {"structuredData": {"musicAlbum": {"name": "A"}}},
                "tracks": [{"title": "One", "duration": "1:00"}]}"#,
        );
        let Some(Patch::MergeStructuredData { target, update }) = patches.last() else {
            panic!("expected a structured data patch, got {patches:?}");
        };
        assert_eq!(target, SCHEMA_ELEMENT);
        assert_eq!(update.set["numTracks"], "1");
        assert_eq!(update.set["track"][0]["duration"], "PT1M0S");
    }

    #[test]
    fn without_seo_nothing_happens() {
        assert!(seo(r#"{"site": {"title": "x"}}"#).is_empty());
        assert!(seo(r#"{"seo": {"structuredData": {}}}"#).is_empty());
    }
}
