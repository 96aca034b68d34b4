use crate::config::SiteConfig;
use crate::patch::{Node, Patch};

pub const FOOTER: &str = "footer";

/// Replace the footer with the configured text or a copyright line for `year`.
pub fn render_footer(config: &SiteConfig, year: u32) -> Vec<Patch> {
    let Some(site) = &config.site else {
        return Vec::new();
    };

    let text = match site.footer_text.as_deref().filter(|t| !t.is_empty()) {
        Some(text) => text.to_string(),
        None => format!("© {year} {}", config.artist()),
    };

    vec![Patch::ReplaceChildren {
        target: FOOTER.to_string(),
        children: vec![Node::new("p").text(text)],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_text(json: &str) -> Option<String> {
        let config = SiteConfig::from_json(json).unwrap();
        match render_footer(&config, 2025).pop()? {
            Patch::ReplaceChildren { mut children, .. } => children.pop()?.text,
            _ => None,
        }
    }

    #[test]
    fn configured_text_wins() {
        assert_eq!(
            footer_text(r#"{"site": {"footerText": "All rights"}}"#).as_deref(),
            Some("All rights")
        );
    }

    #[test]
    fn falls_back_to_copyright_line() {
        assert_eq!(footer_text(r#"{"site": {}}"#).as_deref(), Some("© 2025 Svaryx"));
        assert_eq!(
            footer_text(r#"{"site": {"artist": "Band", "footerText": ""}}"#).as_deref(),
            Some("© 2025 Band")
        );
        assert_eq!(footer_text("{}"), None);
    }
}
