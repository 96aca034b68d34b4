//! A page held in memory, with the same patch semantics as the browser.
//!
//! Elements are addressed by the selector the renderers use, so a
//! `StaticPage` only knows the anchors it was created with. Anchors that sit
//! inside another anchor are registered with [`StaticPage::nest`] and show up
//! in their parent's children, where insertions are positioned against them.

use std::collections::{BTreeMap, BTreeSet};

use crate::patch::{Node, Patch};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub children: Vec<Node>,
    /// `src` and MIME type of the media element's `<source>`.
    pub media_source: Option<(String, Option<String>)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticPage {
    pub title: String,
    pub root_vars: BTreeMap<String, String>,
    pub elements: BTreeMap<String, Element>,
}

impl StaticPage {
    pub fn with_anchors<'a>(anchors: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            elements: anchors
                .into_iter()
                .map(|a| (a.to_string(), Element::default()))
                .collect(),
            ..Self::default()
        }
    }

    /// Register `child` as an anchor placed at the end of `parent`'s children.
    pub fn nest(&mut self, parent: &str, child: &'static str) {
        let placeholder = if let Some(class) = child.strip_prefix('.') {
            Node::new("div").class(class)
        } else if let Some(id) = child.strip_prefix('#') {
            Node::new("div").attr("id", id)
        } else {
            Node::new(child)
        };
        self.elements
            .entry(parent.to_string())
            .or_default()
            .children
            .push(placeholder);
        self.elements.entry(child.to_string()).or_default();
    }

    pub fn element(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    pub fn element_mut(&mut self, selector: &str) -> Option<&mut Element> {
        self.elements.get_mut(selector)
    }

    pub fn apply_all<'a>(&mut self, patches: impl IntoIterator<Item = &'a Patch>) -> usize {
        patches.into_iter().filter(|p| self.apply(p)).count()
    }

    /// Apply one patch. Returns `false` when its target is not on the page.
    pub fn apply(&mut self, patch: &Patch) -> bool {
        match patch {
            Patch::SetRootVar { name, value } => {
                self.root_vars.insert(name.clone(), value.clone());
                true
            }
            Patch::SetTitle(title) => {
                self.title.clone_from(title);
                true
            }
            Patch::SetAttr { target, name, value } => self.with(target, |el| {
                el.attrs.insert((*name).to_string(), value.clone());
            }),
            Patch::SetText { target, text } => self.with(target, |el| {
                el.text = Some(text.clone());
                el.children.clear();
            }),
            Patch::SetStyle {
                target,
                property,
                value,
            } => self.with(target, |el| {
                el.styles.insert((*property).to_string(), value.clone());
            }),
            Patch::AddClass { target, class } => self.with(target, |el| {
                el.classes.insert((*class).to_string());
            }),
            Patch::RemoveClass { target, class } => self.with(target, |el| {
                el.classes.remove(*class);
            }),
            Patch::ReplaceChildren { target, children } => self.with(target, |el| {
                el.text = None;
                el.children.clone_from(children);
            }),
            Patch::InsertBeforeOnce {
                parent,
                before,
                unless,
                node,
            } => {
                let Some(el) = self.elements.get_mut(parent.as_str()) else {
                    return false;
                };
                let Some(index) = el.children.iter().position(|c| c.matches(before)) else {
                    return false;
                };
                if !el.children.iter().any(|c| c.contains_match(unless)) {
                    el.children.insert(index, node.clone());
                }
                true
            }
            Patch::SetMediaSource { media, src, mime } => self.with(media, |el| {
                el.media_source = Some((src.clone(), mime.map(str::to_string)));
            }),
            Patch::MergeStructuredData { target, update } => self.with(target, |el| {
                let merged = update.apply_to(el.text.as_deref().unwrap_or_default());
                el.text = Some(merged);
            }),
        }
    }

    fn with(&mut self, selector: &str, f: impl FnOnce(&mut Element)) -> bool {
        match self.elements.get_mut(selector) {
            Some(el) => {
                f(el);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_targets_are_skipped() {
        let mut page = StaticPage::with_anchors(["footer"]);
        let before = page.clone();
        assert!(!page.apply(&Patch::set_text(".nowhere", "x")));
        assert_eq!(page, before);
        assert!(page.apply(&Patch::set_text("footer", "x")));
        assert_eq!(page.element("footer").unwrap().text.as_deref(), Some("x"));
    }

    fn insert_title() -> Patch {
        Patch::InsertBeforeOnce {
            parent: ".section".into(),
            before: ".player".into(),
            unless: ".title".into(),
            node: Node::new("div").class("title"),
        }
    }

    #[test]
    fn insert_once_lands_in_front_of_its_sibling() {
        let mut page = StaticPage::default();
        page.nest(".section", ".heading");
        page.nest(".section", ".player");

        assert!(page.apply(&insert_title()));
        assert!(page.apply(&insert_title()));

        let children = &page.element(".section").unwrap().children;
        let order: Vec<_> = children.iter().filter_map(|c| c.class.as_deref()).collect();
        assert_eq!(order, ["heading", "title", "player"]);
    }

    #[test]
    fn insert_once_looks_only_under_its_parent() {
        // `.player` exists on the page but not inside `.section`
        let mut page = StaticPage::with_anchors([".section", ".player"]);
        assert!(!page.apply(&insert_title()));
        assert!(page.element(".section").unwrap().children.is_empty());

        // a `.title` elsewhere on the page does not suppress the insert
        let mut page = StaticPage::with_anchors([".title"]);
        page.nest(".section", ".player");
        assert!(page.apply(&insert_title()));
        assert_eq!(page.element(".section").unwrap().children.len(), 2);
    }
}
