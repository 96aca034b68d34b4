//! Declarative description of the changes a renderer wants made to the page.
//!
//! Renderers never touch the document themselves. They return a list of
//! [`Patch`] values, and whichever layer owns the live page applies them in
//! order. A patch whose target is missing from the page is skipped.

use crate::structured_data::StructuredDataUpdate;

/// A CSS selector naming one element of the host page.
pub type Target = String;

/// Behaviour attached to a generated element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Show a blocking notice saying the release is not on `platform` yet.
    NotAvailable { platform: String, artist: String },
}

impl Action {
    pub fn message(&self) -> String {
        match self {
            Action::NotAvailable { platform, artist } => format!(
                "{} is not yet available on {platform}. Please try again later.",
                artist.to_uppercase()
            ),
        }
    }
}

/// An element to be created by the applier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub class: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub styles: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
    pub on_click: Option<Action>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the first descendant (or self) with `tag`.
    pub fn find(&self, tag: &str) -> Option<&Node> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(tag))
    }

    /// Whether this node matches a simple `.class`, `#id` or tag selector.
    pub fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return self
                .class
                .as_deref()
                .is_some_and(|c| c.split_whitespace().any(|c| c == class));
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.get_attr("id") == Some(id);
        }
        self.tag == selector
    }

    /// Whether this node or any descendant matches `selector`.
    pub fn contains_match(&self, selector: &str) -> bool {
        self.matches(selector) || self.children.iter().any(|c| c.contains_match(selector))
    }

    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Node>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(tag, out);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    /// Set a custom property on the document root (`--name`).
    SetRootVar { name: String, value: String },
    SetTitle(String),
    SetAttr {
        target: Target,
        name: &'static str,
        value: String,
    },
    SetText { target: Target, text: String },
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Drop every child of `target` and append `children` in order.
    ReplaceChildren { target: Target, children: Vec<Node> },
    /// Insert `node` into `parent` ahead of `before`, unless `parent` already
    /// contains an element matching `unless`.
    InsertBeforeOnce {
        parent: Target,
        before: Target,
        unless: Target,
        node: Node,
    },
    /// Point the `<source>` of a media element somewhere else and reload it.
    SetMediaSource {
        media: Target,
        src: String,
        mime: Option<&'static str>,
    },
    /// Rewrite a JSON-LD script by merging `update` into its current text.
    MergeStructuredData {
        target: Target,
        update: StructuredDataUpdate,
    },
}

impl Patch {
    pub fn set_attr(
        target: impl Into<Target>,
        name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Patch::SetAttr {
            target: target.into(),
            name,
            value: value.into(),
        }
    }

    pub fn set_text(target: impl Into<Target>, text: impl Into<String>) -> Self {
        Patch::SetText {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn set_style(
        target: impl Into<Target>,
        property: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Patch::SetStyle {
            target: target.into(),
            property,
            value: value.into(),
        }
    }

    pub fn root_var(name: impl Into<String>, value: impl Into<String>) -> Self {
        Patch::SetRootVar {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Selector for a `<meta>` tag keyed by `name=` or `property=`.
pub fn meta_selector(attribute: &str, key: &str) -> Target {
    format!("meta[{attribute}=\"{key}\"]")
}

/// Push a `content` update for a meta tag, skipping empty values.
pub fn push_meta(patches: &mut Vec<Patch>, attribute: &str, key: &str, content: Option<&str>) {
    if let Some(content) = content.filter(|c| !c.is_empty()) {
        patches.push(Patch::set_attr(meta_selector(attribute, key), "content", content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_message_names_platform() {
        let action = Action::NotAvailable {
            platform: "Deezer".into(),
            artist: "Svaryx".into(),
        };
        assert_eq!(
            action.message(),
            "SVARYX is not yet available on Deezer. Please try again later."
        );
    }

    #[test]
    fn meta_updates_skip_empty_content() {
        let mut patches = Vec::new();
        push_meta(&mut patches, "name", "keywords", Some(""));
        push_meta(&mut patches, "name", "keywords", None);
        assert!(patches.is_empty());

        push_meta(&mut patches, "property", "og:url", Some("https://x"));
        assert_eq!(
            patches,
            vec![Patch::set_attr("meta[property=\"og:url\"]", "content", "https://x")]
        );
    }

    #[test]
    fn find_walks_descendants() {
        let node = Node::new("a").child(Node::new("img").attr("src", "i.svg"));
        assert_eq!(node.find("img").and_then(|i| i.get_attr("src")), Some("i.svg"));
        assert!(node.find("p").is_none());
    }

    #[test]
    fn simple_selectors_match() {
        let node = Node::new("div")
            .class("audio-title active")
            .attr("id", "now")
            .child(Node::new("span").class("inner"));
        assert!(node.matches(".active"));
        assert!(node.matches("#now"));
        assert!(node.matches("div"));
        assert!(!node.matches(".audio"));
        assert!(!node.matches(".inner"));
        assert!(node.contains_match(".inner"));
    }
}
