//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "out"              # Directory to rewrite (relative to project root)
//! manifest = "package.json"   # Manifest holding the app version
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Static site output directory, rewritten in place.
    pub output: PathBuf,

    /// JSON manifest with a `version` field.
    pub manifest: PathBuf,

    /// Report what would change without writing (CLI `--dry` only).
    #[serde(skip)]
    pub dry: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "out".into(),
            manifest: "package.json".into(),
            dry: false,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(FieldPath::new("build.output"), "must not be empty");
        }
        if self.manifest.as_os_str().is_empty() {
            diag.error(FieldPath::new("build.manifest"), "must not be empty");
        }
    }
}
