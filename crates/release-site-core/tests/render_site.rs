use release_site_core::page::StaticPage;
use release_site_core::patch::Patch;
use release_site_core::{
    album, audio, embed, footer, platforms, render_site, seo, structured_data, theme, tracklist,
    SiteConfig,
};

const CONFIG: &str = include_str!("fixtures/config.json");

const SCHEMA: &str = r#"{"@context": "https://schema.org", "@type": "MusicAlbum", "recordLabel": "Self-released"}"#;

fn host_page() -> StaticPage {
    let mut page = StaticPage::with_anchors([
        "meta[name=\"description\"]",
        "meta[name=\"keywords\"]",
        "meta[property=\"og:title\"]",
        "meta[property=\"og:url\"]",
        "meta[name=\"twitter:card\"]",
        seo::CANONICAL_LINK,
        structured_data::SCHEMA_ELEMENT,
        album::TITLE,
        album::SUBTITLE,
        album::COVER,
        album::RELEASE_DATE,
        album::HEADER,
        platforms::CONTAINER,
        tracklist::CONTAINER,
        embed::CONTAINER,
        audio::SECTION,
        audio::AUDIO,
        footer::FOOTER,
    ]);
    page.nest(audio::SECTION, audio::CUSTOM_PLAYER);
    page.element_mut(structured_data::SCHEMA_ELEMENT).unwrap().text = Some(SCHEMA.to_string());
    page
}

fn config() -> SiteConfig {
    SiteConfig::from_json(CONFIG).unwrap()
}

#[test]
fn full_configuration_renders_every_section() {
    let plan = render_site(&config(), 2025);
    let mut page = host_page();
    page.apply_all(plan.all_patches());

    // SEO runs after the theme, so its title wins.
    assert_eq!(page.title, "Night Drive by Svaryx | Official Site");
    assert_eq!(page.root_vars["--accent-color"], "#AF0404");
    assert_eq!(page.root_vars["--album-cover-image"], "url('/img/cover.jpg')");
    assert_eq!(
        page.element("meta[name=\"description\"]").unwrap().attrs["content"],
        "Listen to Night Drive, the debut EP from Svaryx."
    );
    assert_eq!(page.element(seo::CANONICAL_LINK).unwrap().attrs["href"], "https://svaryx.example/");
    assert_eq!(
        page.element(album::RELEASE_DATE).unwrap().text.as_deref(),
        Some("Released: May 1, 2024")
    );

    let schema = page.element(structured_data::SCHEMA_ELEMENT).unwrap().text.clone().unwrap();
    let schema: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert_eq!(schema["recordLabel"], "Self-released");
    assert_eq!(schema["numTracks"], "2");
    assert_eq!(schema["track"][1]["duration"], "PT3M45S");

    let buttons = &page.element(platforms::CONTAINER).unwrap().children;
    assert_eq!(buttons.len(), 2);
    assert!(buttons[1].on_click.is_some());

    let iframe = &page.element(embed::CONTAINER).unwrap().children[0];
    assert_eq!(
        iframe.get_attr("src"),
        Some("https://www.youtube.com/embed/abc123?mute=1")
    );

    let section = page.element(audio::SECTION).unwrap();
    assert!(section.classes.contains("active"));
    assert_eq!(section.children.len(), 2);
    assert_eq!(section.children[0].text.as_deref(), Some("Now Playing: Night Drive"));
    assert!(section.children[1].matches(audio::CUSTOM_PLAYER));
    assert_eq!(
        page.element(audio::AUDIO).unwrap().media_source,
        Some(("/audio/night-drive.mp3".to_string(), Some("audio/mpeg".to_string())))
    );
    assert!(plan.audio.wire_player);
    assert_eq!(plan.audio.visualizer.as_ref().unwrap().sensitivity, 1.2);

    let footer = &page.element(footer::FOOTER).unwrap().children[0];
    assert_eq!(footer.text.as_deref(), Some("© 2025 Svaryx"));
}

#[test]
fn rendering_twice_gives_the_same_page() {
    let config = config();
    let mut once = host_page();
    once.apply_all(render_site(&config, 2025).all_patches());

    let mut twice = once.clone();
    twice.apply_all(render_site(&config, 2025).all_patches());
    assert_eq!(once, twice);
}

#[test]
fn theme_seo_and_album_are_idempotent() {
    let config = config();
    let renderers: [fn(&SiteConfig) -> Vec<Patch>; 3] =
        [theme::apply_theme, seo::apply_seo, album::render_album];
    for render in renderers {
        let mut page = host_page();
        page.apply_all(&render(&config));
        let after_first = page.clone();
        page.apply_all(&render(&config));
        assert_eq!(page, after_first);
    }
}

#[test]
fn empty_configuration_leaves_page_untouched() {
    let plan = render_site(&SiteConfig::default(), 2025);
    assert_eq!(plan.all_patches().count(), 0);

    let mut page = host_page();
    let before = page.clone();
    page.apply_all(plan.all_patches());
    assert_eq!(page, before);
}

#[test]
fn page_without_anchors_is_untouched_except_root() {
    let plan = render_site(&config(), 2025);
    let mut page = StaticPage::default();
    page.apply_all(plan.all_patches());
    assert!(page.elements.is_empty());
    assert!(!page.title.is_empty());
}
