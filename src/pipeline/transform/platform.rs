//! Edge platform meta tags.
//!
//! Pages deployed through the edge platform carry placeholders that the
//! platform substitutes per request, plus build identification:
//!
//! ```html
//! <meta name="x-client-ip" content="{{CLIENT_IP}}">
//! <meta name="x-request-id" content="{{REQUEST_ID}}">
//! <meta name="x-geo-code" content="{{GEO_CODE}}">
//! <meta name="x-build-time" content="2026-10-19T08:00:00.000Z">
//! <meta name="x-app-version" content="1.4.2">
//! ```
//!
//! The tags are prepended to `<head>` in this order. Tags with the same names
//! from an earlier run are removed first, so re-running only refreshes them.

use lol_html::element;
use lol_html::html_content::ContentType;

use crate::pipeline::{Handler, Transform};

use super::{meta_name, meta_tag};

pub const CLIENT_IP_PLACEHOLDER: &str = "{{CLIENT_IP}}";
pub const REQUEST_ID_PLACEHOLDER: &str = "{{REQUEST_ID}}";
pub const GEO_CODE_PLACEHOLDER: &str = "{{GEO_CODE}}";

/// Meta names in injection order.
pub const TAG_NAMES: [&str; 5] = [
    "x-client-ip",
    "x-request-id",
    "x-geo-code",
    "x-build-time",
    "x-app-version",
];

/// Per-page build identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTags {
    /// ISO 8601 timestamp taken when the page was processed.
    pub build_time: String,
    /// Manifest version or the configured fallback.
    pub version: String,
}

impl PlatformTags {
    pub fn new(build_time: String, version: String) -> Self {
        Self {
            build_time,
            version,
        }
    }

    /// `(name, content)` pairs in injection order.
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (TAG_NAMES[0], CLIENT_IP_PLACEHOLDER),
            (TAG_NAMES[1], REQUEST_ID_PLACEHOLDER),
            (TAG_NAMES[2], GEO_CODE_PLACEHOLDER),
            (TAG_NAMES[3], &self.build_time),
            (TAG_NAMES[4], &self.version),
        ]
    }

    /// The five meta tags as markup.
    pub fn to_html(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, content)| meta_tag(name, content))
            .collect()
    }
}

fn is_platform_tag(name: &str) -> bool {
    TAG_NAMES.contains(&name)
}

pub struct PlatformInjector {
    tags: PlatformTags,
}

impl PlatformInjector {
    pub fn new(tags: PlatformTags) -> Self {
        Self { tags }
    }
}

impl Transform for PlatformInjector {
    fn handlers<'h>(&'h self) -> Vec<Handler<'h>> {
        let tags = self.tags.to_html();
        vec![
            element!("head meta[name]", |el| {
                if meta_name(el).is_some_and(|name| is_platform_tag(&name)) {
                    el.remove();
                }
                Ok(())
            }),
            element!("head", move |el| {
                el.prepend(&tags, ContentType::Html);
                Ok(())
            }),
        ]
    }
}
