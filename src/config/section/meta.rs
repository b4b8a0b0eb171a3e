//! `[meta]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [meta]
//! marker = "cf"               # Path segment that precedes <category>/<type>
//! brand = "Cloudflare"        # Appended to titles: "<title> - <brand>"
//! keywords = "..."            # Default keywords meta content
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

pub const DEFAULT_MARKER: &str = "cf";
pub const DEFAULT_BRAND: &str = "Cloudflare";
pub const DEFAULT_KEYWORDS: &str = "Cloudflare, security, firewall, DDoS protection, CDN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    pub marker: String,
    pub brand: String,
    pub keywords: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.into(),
            brand: DEFAULT_BRAND.into(),
            keywords: DEFAULT_KEYWORDS.into(),
        }
    }
}

impl MetaConfig {
    /// `"<title> - <brand>"`, or the bare title when no brand is set.
    pub fn branded_title(&self, title: &str) -> String {
        if self.brand.is_empty() {
            title.to_string()
        } else {
            format!("{title} - {}", self.brand)
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let marker = self.marker.trim();
        if marker.is_empty() {
            diag.error(FieldPath::new("meta.marker"), "must not be empty");
        } else if marker != self.marker {
            diag.error_with_hint(
                FieldPath::new("meta.marker"),
                format!("`{}` has surrounding whitespace", self.marker),
                format!("use \"{marker}\""),
            );
        } else if marker.contains(['/', '\\']) {
            diag.error_with_hint(
                FieldPath::new("meta.marker"),
                format!("`{marker}` spans several path segments"),
                "use a single directory name such as \"cf\"",
            );
        }
    }
}
