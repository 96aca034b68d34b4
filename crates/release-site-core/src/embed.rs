use crate::config::SiteConfig;
use crate::patch::{Node, Patch};

pub const CONTAINER: &str = "#media-embed-container";

const ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

fn push_flag(url: &mut String, flag: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(flag);
    url.push_str("=1");
}

/// Append `autoplay=1` / `mute=1` to the embed URL.
pub fn embed_url(base: &str, autoplay: bool, mute: bool) -> String {
    let mut url = base.to_string();
    if autoplay {
        push_flag(&mut url, "autoplay");
    }
    if mute {
        push_flag(&mut url, "mute");
    }
    url
}

pub fn embed_iframe(src: String) -> Node {
    Node::new("iframe")
        .attr("src", src)
        .attr("title", "YouTube video player")
        .attr("frameborder", "0")
        .attr("allow", ALLOW)
        .attr("referrerpolicy", "strict-origin-when-cross-origin")
        .attr("allowfullscreen", "")
        .style("width", "100%")
        .style("height", "100%")
}

pub fn render_embed(config: &SiteConfig) -> Vec<Patch> {
    let Some(embed) = &config.media_embed else {
        return Vec::new();
    };
    let Some(base) = embed.youtube.as_deref().filter(|u| !u.is_empty()) else {
        return Vec::new();
    };

    vec![Patch::ReplaceChildren {
        target: CONTAINER.to_string(),
        children: vec![embed_iframe(embed_url(base, embed.autoplay, embed.mute))],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_flags_with_the_right_separator() {
        assert_eq!(
            embed_url("https://yt/embed/x", true, true),
            "https://yt/embed/x?autoplay=1&mute=1"
        );
        assert_eq!(
            embed_url("https://yt/embed/x?v=1", true, false),
            "https://yt/embed/x?v=1&autoplay=1"
        );
        assert_eq!(embed_url("https://yt/embed/x", false, true), "https://yt/embed/x?mute=1");
        assert_eq!(embed_url("https://yt/embed/x", false, false), "https://yt/embed/x");
    }

    #[test]
    fn iframe_carries_fixed_policy() {
        let config = SiteConfig::from_json(
            r#"{"mediaEmbed": {"youtube": "https://yt/embed/x", "mute": true}}"#,
        )
        .unwrap();
        let patches = render_embed(&config);
        let [Patch::ReplaceChildren { children, .. }] = patches.as_slice() else {
            panic!("unexpected patches {patches:?}");
        };
        let iframe = &children[0];
        assert_eq!(iframe.get_attr("src"), Some("https://yt/embed/x?mute=1"));
        assert_eq!(iframe.get_attr("referrerpolicy"), Some("strict-origin-when-cross-origin"));
        assert_eq!(iframe.get_attr("allowfullscreen"), Some(""));
    }

    #[test]
    fn missing_url_is_a_no_op() {
        let config = SiteConfig::from_json(r#"{"mediaEmbed": {"autoplay": true}}"#).unwrap();
        assert!(render_embed(&config).is_empty());
    }
}
