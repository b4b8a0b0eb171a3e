//! `[platform]` section configuration.
//!
//! Pages under the edge platform's output directory get placeholder meta
//! tags that the platform fills in per request.
//!
//! # Example
//!
//! ```toml
//! [platform]
//! segments = ["edgeone", "pages"]   # Consecutive path segments marking platform output
//! fallback_version = "unknown"      # Used when the manifest can't be read
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

pub const DEFAULT_FALLBACK_VERSION: &str = "unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub segments: Vec<String>,
    pub fallback_version: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            segments: vec!["edgeone".into(), "pages".into()],
            fallback_version: DEFAULT_FALLBACK_VERSION.into(),
        }
    }
}

impl PlatformConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("platform.segments");
        if self.segments.is_empty() {
            diag.error(field, "must contain at least one segment");
        } else if self.segments.iter().any(|s| s.trim().is_empty()) {
            diag.error(field, "segments must not be empty strings");
        } else if self.segments.iter().any(|s| s.trim() != s) {
            diag.error(field, "segments must not have surrounding whitespace");
        }
    }
}
