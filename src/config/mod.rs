//! Configuration management for `postbuild.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── meta       # [meta]
//! │   ├── platform   # [platform]
//! │   └── i18n       # [i18n]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # PostbuildConfig (this file)
//! ```
//!
//! The config file is optional. Without one every section uses its defaults
//! and the project root is the current directory. CLI options override
//! values from the file.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, I18nConfig, MetaConfig, PlatformConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log, utils::path::resolve_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "postbuild.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing postbuild.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostbuildConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub meta: MetaConfig,

    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub i18n: I18nConfig,
}

impl PostbuildConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` that does not exist is an error; a missing
    /// default config file just means defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path) = match &cli.config {
            Some(path) => {
                let path = resolve_path(path, &cwd);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                (Self::from_path(&path)?, Some(path))
            }
            None => match find_config_file(Path::new(DEFAULT_CONFIG_NAME)) {
                Some(path) => (Self::from_path(&path)?, Some(path)),
                None => (Self::default(), None),
            },
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.clone(), Path::to_path_buf);

        config.config_path = config_path.unwrap_or_default();
        config.finalize(&root);
        config.apply_cli(cli, &cwd);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the output directory
    pub fn output_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.build.output).unwrap_or(path)
    }

    // ========================================================================
    // path normalization and cli overrides
    // ========================================================================

    /// Resolve every configured path against the project root.
    fn finalize(&mut self, root: &Path) {
        self.root = crate::utils::path::normalize_path(root);

        self.build.output = resolve_path(&self.build.output, &self.root);
        self.build.manifest = resolve_path(&self.build.manifest, &self.root);
        if let Some(path) = self.i18n.translations.take() {
            self.i18n.translations = Some(resolve_path(&path, &self.root));
        }
    }

    /// Apply CLI overrides. CLI paths are relative to the working directory.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(output) = &cli.output {
            self.build.output = resolve_path(output, cwd);
        }
        if let Some(manifest) = &cli.manifest {
            self.build.manifest = resolve_path(manifest, cwd);
        }
        Self::update_option(&mut self.meta.brand, cli.brand.as_ref());
        self.build.dry = cli.dry;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        self.meta.validate(&mut diag);
        self.platform.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config and panic on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PostbuildConfig {
    let (parsed, ignored) = PostbuildConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
