//! Read-only first pass over a page.
//!
//! The rewrite streams through the document once, so decisions that depend
//! on later markup (is there a `<body>` to receive scripts, does `<head>`
//! already have a title) are collected here beforehand.

use std::cell::Cell;

use lol_html::errors::RewritingError;
use lol_html::{RewriteStrSettings, element, rewrite_str};

use super::transform::meta_name;

/// Structural facts about a page, gathered without modifying it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageSurvey {
    pub has_body: bool,
    /// `<head>` contains a `<title>`.
    pub has_title: bool,
    /// `<head>` contains `<meta name="description">`.
    pub has_description: bool,
    /// `<head>` contains `<meta name="keywords">`.
    pub has_keywords: bool,
}

impl PageSurvey {
    pub fn scan(source: &str) -> Result<Self, RewritingError> {
        let has_body = Cell::new(false);
        let has_title = Cell::new(false);
        let has_description = Cell::new(false);
        let has_keywords = Cell::new(false);

        rewrite_str(
            source,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("body", |_| {
                        has_body.set(true);
                        Ok(())
                    }),
                    element!("head title", |_| {
                        has_title.set(true);
                        Ok(())
                    }),
                    element!("head meta[name]", |el| {
                        match meta_name(el).as_deref() {
                            Some("description") => has_description.set(true),
                            Some("keywords") => has_keywords.set(true),
                            _ => {}
                        }
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )?;

        Ok(Self {
            has_body: has_body.get(),
            has_title: has_title.get(),
            has_description: has_description.get(),
            has_keywords: has_keywords.get(),
        })
    }
}
