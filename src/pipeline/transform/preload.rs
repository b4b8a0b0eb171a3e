//! Preload normalization.
//!
//! `<link rel="preload" as="style">` becomes a plain stylesheet so CSS loads
//! eagerly; `<link rel="preload" as="font">` is removed. Other preloads stay.

use lol_html::element;
use lol_html::html_content::Element;

use crate::pipeline::{Handler, Transform};

pub struct PreloadTransform;

/// Lowercased `as` value of a `<link rel="preload">`.
fn preload_kind(elem: &Element<'_, '_>) -> Option<String> {
    let rel = elem.get_attribute("rel")?;
    if !rel
        .split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("preload"))
    {
        return None;
    }
    elem.get_attribute("as")
        .map(|kind| kind.trim().to_ascii_lowercase())
}

impl Transform for PreloadTransform {
    fn handlers<'h>(&'h self) -> Vec<Handler<'h>> {
        vec![element!("link[rel]", |el| {
            match preload_kind(el).as_deref() {
                Some("font") => el.remove(),
                Some("style") => {
                    el.remove_attribute("as");
                    el.set_attribute("rel", "stylesheet")?;
                }
                _ => {}
            }
            Ok(())
        })]
    }
}
