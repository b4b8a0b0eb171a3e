//! `[i18n]` section configuration.
//!
//! ```toml
//! [i18n]
//! translations = "i18n/pages.json"   # Replaces the built-in tables
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Translation tables file (relative to project root).
    pub translations: Option<PathBuf>,
}
