//! Applies [`Patch`]es to the live document.

use release_site_core::{Action, Node, Patch};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlMediaElement};

use crate::events::listen;

pub(crate) fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        el.style().set_property(property, value).ok();
    }
}

pub(crate) fn set_display(element: Option<&Element>, visible: bool) {
    if let Some(el) = element {
        set_style(el, "display", if visible { "block" } else { "none" });
    }
}

/// Apply `patches` in order. Patches whose target is missing are skipped and
/// a failing browser call only loses that one patch.
pub fn apply_patches<'a>(
    document: &Document,
    patches: impl IntoIterator<Item = &'a Patch>,
) -> usize {
    let mut applied = 0;
    for patch in patches {
        match apply(document, patch) {
            Ok(true) => applied += 1,
            Ok(false) => log::debug!("patch target not on page: {patch:?}"),
            Err(e) => log::warn!("could not apply patch: {e:?}"),
        }
    }
    applied
}

fn apply(document: &Document, patch: &Patch) -> Result<bool, JsValue> {
    match patch {
        Patch::SetRootVar { name, value } => {
            let Some(root) = document.document_element() else {
                return Ok(false);
            };
            let root: HtmlElement = root.dyn_into()?;
            root.style().set_property(name, value)?;
        }
        Patch::SetTitle(title) => document.set_title(title),
        Patch::SetAttr { target, name, value } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            el.set_attribute(name, value)?;
        }
        Patch::SetText { target, text } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            el.set_text_content(Some(text));
        }
        Patch::SetStyle {
            target,
            property,
            value,
        } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            set_style(&el, property, value);
        }
        Patch::AddClass { target, class } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            el.class_list().add_1(class)?;
        }
        Patch::RemoveClass { target, class } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            el.class_list().remove_1(class)?;
        }
        Patch::ReplaceChildren { target, children } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            el.set_inner_html("");
            for child in children {
                let child = build(document, child)?;
                el.append_child(&child)?;
            }
        }
        Patch::InsertBeforeOnce {
            parent,
            before,
            unless,
            node,
        } => {
            let Some(parent) = query(document, parent) else {
                return Ok(false);
            };
            let Some(before) = parent.query_selector(before)? else {
                return Ok(false);
            };
            if parent.query_selector(unless)?.is_none() {
                let node = build(document, node)?;
                parent.insert_before(&node, Some(&before))?;
            }
        }
        Patch::SetMediaSource { media, src, mime } => {
            let Some(el) = query(document, media) else {
                return Ok(false);
            };
            let Some(source) = el.query_selector("source")? else {
                return Ok(false);
            };
            source.set_attribute("src", src)?;
            if let Some(mime) = mime {
                source.set_attribute("type", mime)?;
            }
            el.dyn_into::<HtmlMediaElement>()?.load();
        }
        Patch::MergeStructuredData { target, update } => {
            let Some(el) = query(document, target) else {
                return Ok(false);
            };
            let existing = el.text_content().unwrap_or_default();
            el.set_text_content(Some(&update.apply_to(&existing)));
        }
    }
    Ok(true)
}

fn build(document: &Document, node: &Node) -> Result<Element, JsValue> {
    let el = document.create_element(node.tag)?;
    if let Some(class) = &node.class {
        el.set_class_name(class);
    }
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)?;
    }
    for (property, value) in &node.styles {
        set_style(&el, property, value);
    }
    if let Some(text) = &node.text {
        el.set_text_content(Some(text));
    }
    for child in &node.children {
        let child = build(document, child)?;
        el.append_child(&child)?;
    }
    if let Some(action) = &node.on_click {
        wire_action(&el, action);
    }
    Ok(el)
}

fn wire_action(el: &Element, action: &Action) {
    match action {
        Action::NotAvailable { .. } => {
            let message = action.message();
            listen(el, "click", move |_| {
                if let Some(window) = web_sys::window() {
                    window.alert_with_message(&message).ok();
                }
            });
        }
    }
}
