//! Script relocation.
//!
//! Moves every `<script>` in `<head>` to the end of `<body>`, keeping their
//! relative order. Scripts already in the body stay where they are. Script
//! bodies are carried over verbatim.

use std::cell::RefCell;

use lol_html::html_content::{ContentType, Element};
use lol_html::{element, text};

use crate::pipeline::{Handler, Transform};
use crate::utils::html::quote_attr;

pub struct ScriptRelocator {
    /// A page without `<body>` keeps its scripts where they are.
    has_body: bool,
    /// Head scripts removed so far, each as `<script ...>` plus its content.
    moved: RefCell<Vec<String>>,
}

impl ScriptRelocator {
    pub fn new(has_body: bool) -> Self {
        Self {
            has_body,
            moved: RefCell::new(Vec::new()),
        }
    }
}

/// Rebuild the start tag from the element's attributes, in source order.
fn start_tag(elem: &Element<'_, '_>) -> String {
    let mut tag = String::from("<script");
    for attr in elem.attributes() {
        tag.push(' ');
        tag.push_str(&attr.name());
        let value = attr.value();
        if !value.is_empty() {
            tag.push('=');
            tag.push_str(&quote_attr(&value));
        }
    }
    tag.push('>');
    tag
}

impl Transform for ScriptRelocator {
    fn handlers<'h>(&'h self) -> Vec<Handler<'h>> {
        if !self.has_body {
            return Vec::new();
        }

        vec![
            element!("head script", move |el| {
                self.moved.borrow_mut().push(start_tag(el));
                el.remove_and_keep_content();
                Ok(())
            }),
            text!("head script", move |chunk| {
                if let Some(script) = self.moved.borrow_mut().last_mut() {
                    script.push_str(chunk.as_str());
                }
                chunk.remove();
                Ok(())
            }),
            element!("body", move |el| {
                let moved = self.moved.take();
                if !moved.is_empty() {
                    let html: String = moved
                        .iter()
                        .map(|script| format!("{script}</script>"))
                        .collect();
                    el.append(&html, ContentType::Html);
                }
                Ok(())
            }),
        ]
    }
}
