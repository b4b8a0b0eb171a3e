//! Localized page titles and messages.
//!
//! Three fixed categories each map a page type key to a [`PageText`]:
//!
//! ```json
//! {
//!   "block":     { "ip": { "title": "...", "message": "..." } },
//!   "error":     { "5xx": { ... } },
//!   "challenge": { "managed": { ... } }
//! }
//! ```
//!
//! The tables ship embedded in the binary and can be replaced with
//! `[i18n] translations = "<file>.json"`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::page::PageRoute;

/// Tables compiled into the binary.
const EMBEDDED: &str = include_str!("translations.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid translations in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

// ============================================================================
// Category
// ============================================================================

/// Page category, the path segment after the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Block,
    Error,
    Challenge,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Error => "error",
            Self::Challenge => "challenge",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "error" => Ok(Self::Error),
            "challenge" => Ok(Self::Challenge),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Translations
// ============================================================================

/// Title and body message for one page type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageText {
    pub title: String,
    pub message: String,
}

pub type Table = FxHashMap<String, PageText>;

/// Read-only translation tables, loaded once per run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translations {
    #[serde(default)]
    block: Table,
    #[serde(default)]
    error: Table,
    #[serde(default)]
    challenge: Table,
}

impl Translations {
    /// Tables embedded at compile time.
    pub fn embedded() -> Result<Self, I18nError> {
        Self::parse(EMBEDDED, Path::new("<embedded>"))
    }

    /// Load tables from a JSON file.
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let content =
            fs::read_to_string(path).map_err(|err| I18nError::Io(path.to_path_buf(), err))?;
        Self::parse(&content, path)
    }

    /// Load the override file if one is configured, otherwise the embedded tables.
    pub fn resolve(override_path: Option<&Path>) -> Result<Self, I18nError> {
        match override_path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    fn parse(content: &str, origin: &Path) -> Result<Self, I18nError> {
        serde_json::from_str(content).map_err(|err| I18nError::Json(origin.to_path_buf(), err))
    }

    pub fn table(&self, category: Category) -> &Table {
        match category {
            Category::Block => &self.block,
            Category::Error => &self.error,
            Category::Challenge => &self.challenge,
        }
    }

    /// Text for a route, if its category is known and its type has an entry.
    pub fn lookup(&self, route: &PageRoute) -> Option<&PageText> {
        let category = route.category.parse::<Category>().ok()?;
        self.table(category).get(route.kind.as_str())
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.block.len() + self.error.len() + self.challenge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn route(category: &str, kind: &str) -> PageRoute {
        PageRoute {
            category: category.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn test_embedded_tables_cover_every_category() {
        let tr = Translations::embedded().unwrap();
        for category in [Category::Block, Category::Error, Category::Challenge] {
            assert!(!tr.table(category).is_empty(), "{category} table is empty");
        }
    }

    #[test]
    fn test_lookup() {
        let tr = Translations::embedded().unwrap();
        let text = tr.lookup(&route("block", "ip")).unwrap();
        assert_eq!(text.title, "Access Denied");

        assert!(tr.lookup(&route("block", "nope")).is_none());
        assert!(tr.lookup(&route("nope", "ip")).is_none());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("challenge".parse::<Category>(), Ok(Category::Challenge));
        assert!("Block".parse::<Category>().is_err());
        assert_eq!(Category::Error.to_string(), "error");
    }

    #[test]
    fn test_load_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(
            &path,
            r#"{"error": {"404": {"title": "Not Found", "message": "Gone."}}}"#,
        )
        .unwrap();

        let tr = Translations::resolve(Some(&path)).unwrap();
        assert_eq!(tr.len(), 1);
        assert_eq!(tr.lookup(&route("error", "404")).unwrap().message, "Gone.");
        assert!(tr.table(Category::Block).is_empty());
    }

    #[test]
    fn test_empty_override_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, "{}").unwrap();

        let tr = Translations::resolve(Some(&path)).unwrap();
        assert!(tr.is_empty());
        assert!(tr.lookup(&route("block", "ip")).is_none());
        assert!(!Translations::embedded().unwrap().is_empty());
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Translations::load(&missing),
            Err(I18nError::Io(..))
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"blocks": {}}"#).unwrap();
        assert!(matches!(Translations::load(&bad), Err(I18nError::Json(..))));
    }
}
