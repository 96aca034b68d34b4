use crate::config::{SiteConfig, Track};
use crate::patch::{Node, Patch};
use crate::platforms::icon;

pub const CONTAINER: &str = "#tracklist-container";
pub const HEADERS: [&str; 4] = ["Track no.", "Title", "Duration", "Listen"];

fn listen_link(url: &str, icon_src: &str, platform: &str) -> Node {
    Node::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("title", format!("Listen on {platform}"))
        .child(icon(icon_src, platform))
}

fn row(track: &Track) -> Node {
    let mut links = Node::new("td").class("track-links");
    if let Some(l) = &track.links {
        let known = [
            (&l.youtube, "/img/youtube-icon.svg", "YouTube"),
            (&l.spotify, "/img/spotify-icon.svg", "Spotify"),
            (&l.soundcloud, "/img/soundcloud-icon.svg", "SoundCloud"),
        ];
        for (url, src, name) in known {
            if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
                links = links.child(listen_link(url, src, name));
            }
        }
    }

    let number = track.number.as_ref().map(ToString::to_string).unwrap_or_default();
    Node::new("tr")
        .class("tracklist-listing")
        .child(Node::new("td").text(number))
        .child(Node::new("td").text(&track.title))
        .child(Node::new("td").text(track.duration.clone().unwrap_or_default()))
        .child(links)
}

pub fn tracklist_table(tracks: &[Track]) -> Node {
    let header = HEADERS
        .iter()
        .fold(Node::new("tr").class("tracklist-listing"), |tr, h| {
            tr.child(Node::new("th").text(*h))
        });
    let body = tracks.iter().fold(Node::new("tbody"), |tbody, t| tbody.child(row(t)));

    Node::new("table")
        .child(Node::new("thead").child(header))
        .child(body)
}

pub fn render_tracklist(config: &SiteConfig) -> Vec<Patch> {
    let Some(tracks) = &config.tracks else {
        return Vec::new();
    };
    vec![Patch::ReplaceChildren {
        target: CONTAINER.to_string(),
        children: vec![tracklist_table(tracks)],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> Node {
        let config = SiteConfig::from_json(json).unwrap();
        tracklist_table(config.tracks.as_deref().unwrap())
    }

    #[test]
    fn header_row_is_fixed() {
        let t = table(r#"{"tracks": []}"#);
        let mut ths = Vec::new();
        t.find_all("th", &mut ths);
        let labels: Vec<_> = ths.iter().filter_map(|th| th.text.as_deref()).collect();
        assert_eq!(labels, HEADERS);
        let mut rows = Vec::new();
        t.find("tbody").unwrap().find_all("tr", &mut rows);
        assert!(rows.is_empty());
    }

    #[test]
    fn links_follow_fixed_platform_order() {
        let t = table(
            r#"{"tracks": [{"number": 3, "title": "Outrun", "duration": "3:45",
                "links": {"soundcloud": "sc", "youtube": "yt", "spotify": ""}}]}"#,
        );
        let mut rows = Vec::new();
        t.find("tbody").unwrap().find_all("tr", &mut rows);
        assert_eq!(rows.len(), 1);

        let cells = &rows[0].children;
        assert_eq!(cells[0].text.as_deref(), Some("3"));
        assert_eq!(cells[1].text.as_deref(), Some("Outrun"));
        assert_eq!(cells[2].text.as_deref(), Some("3:45"));

        let hrefs: Vec<_> = cells[3].children.iter().filter_map(|a| a.get_attr("href")).collect();
        assert_eq!(hrefs, ["yt", "sc"]);
        assert_eq!(cells[3].children[1].get_attr("title"), Some("Listen on SoundCloud"));
    }

    #[test]
    fn without_tracks_nothing_happens() {
        assert!(render_tracklist(&SiteConfig::default()).is_empty());
    }
}
