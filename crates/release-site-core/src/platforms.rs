use crate::config::{MusicPlatform, SiteConfig};
use crate::patch::{Action, Node, Patch};

pub const CONTAINER: &str = "#music-platforms-container";

pub(crate) fn icon(src: &str, alt: &str) -> Node {
    Node::new("img")
        .attr("src", src)
        .attr("alt", alt)
        .attr("width", "25")
        .attr("height", "25")
}

/// One `a.get-album-button` per configured platform.
///
/// A platform that is not live gets no `href`; activating it shows the
/// "not yet available" notice instead.
pub fn platform_button(platform: &MusicPlatform, artist: &str) -> Node {
    let mut link = Node::new("a").class("get-album-button");

    link = match platform.live_url() {
        Some(url) => link
            .attr("href", url)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
        None => link.on_click(Action::NotAvailable {
            platform: platform.name.clone(),
            artist: artist.to_string(),
        }),
    };

    link.child(icon(&platform.icon, &platform.name))
        .child(Node::new("p").class("text-three-dots").text(&platform.name))
}

pub fn render_platforms(config: &SiteConfig) -> Vec<Patch> {
    let Some(platforms) = &config.music_platforms else {
        return Vec::new();
    };

    let artist = config.artist();
    vec![Patch::ReplaceChildren {
        target: CONTAINER.to_string(),
        children: platforms.iter().map(|p| platform_button(p, artist)).collect(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(available: bool, url: Option<&str>) -> MusicPlatform {
        MusicPlatform {
            name: "Bandcamp".into(),
            icon: "/img/bandcamp.svg".into(),
            url: url.map(str::to_string),
            available,
        }
    }

    #[test]
    fn live_platform_is_a_new_tab_link() {
        let node = platform_button(&platform(true, Some("u")), "Svaryx");
        assert_eq!(node.get_attr("href"), Some("u"));
        assert_eq!(node.get_attr("target"), Some("_blank"));
        assert_eq!(node.get_attr("rel"), Some("noopener noreferrer"));
        assert!(node.on_click.is_none());
        assert_eq!(node.find("p").and_then(|p| p.text.as_deref()), Some("Bandcamp"));
        assert_eq!(node.find("img").and_then(|i| i.get_attr("alt")), Some("Bandcamp"));
    }

    #[test]
    fn unavailable_platform_shows_notice() {
        for p in [platform(false, Some("u")), platform(true, None)] {
            let node = platform_button(&p, "Svaryx");
            assert_eq!(node.get_attr("href"), None);
            let action = node.on_click.expect("notice action");
            assert!(action.message().contains("available on Bandcamp"));
        }
    }

    #[test]
    fn replaces_container_contents_in_order() {
        let config = SiteConfig::from_json(
            r#"{"musicPlatforms": [{"name": "A", "icon": "a"}, {"name": "B", "icon": "b", "url": "x", "available": true}]}"#,
        )
        .unwrap();
        let patches = render_platforms(&config);
        let [Patch::ReplaceChildren { target, children }] = patches.as_slice() else {
            panic!("unexpected patches {patches:?}");
        };
        assert_eq!(target, CONTAINER);
        assert_eq!(children.len(), 2);
        assert!(children[0].on_click.is_some());
        assert_eq!(children[1].get_attr("href"), Some("x"));
    }

    #[test]
    fn without_platforms_nothing_happens() {
        assert!(render_platforms(&SiteConfig::default()).is_empty());
    }
}
