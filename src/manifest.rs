//! Package manifest (`package.json`) version lookup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::log;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid manifest `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("manifest `{0}` has no `version` field")]
    MissingVersion(PathBuf),
}

/// The only manifest field we read; everything else is ignored.
#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

/// Read the `version` field of a JSON manifest.
pub fn read_version(path: &Path) -> Result<String, ManifestError> {
    let content =
        fs::read_to_string(path).map_err(|err| ManifestError::Io(path.to_path_buf(), err))?;
    let manifest: Manifest = serde_json::from_str(&content)
        .map_err(|err| ManifestError::Json(path.to_path_buf(), err))?;

    manifest
        .version
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ManifestError::MissingVersion(path.to_path_buf()))
}

/// Read the manifest version, logging a warning and returning `fallback` on failure.
pub fn version_or(path: &Path, fallback: &str) -> String {
    match read_version(path) {
        Ok(version) => version,
        Err(err) => {
            log!("warning"; "{:#}, using version `{}`", anyhow::Error::from(err), fallback);
            fallback.to_string()
        }
    }
}
