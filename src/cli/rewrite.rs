//! Output directory rewriting.
//!
//! Phases:
//! - **Collect** - Gather every `.html` file under the output directory
//! - **Rewrite** - Stream the page through the transform pipeline
//! - **Write** - Overwrite the file in place (skipped with `--dry`)
//!
//! A file that fails to read, rewrite or write is logged and skipped; the
//! remaining files are still processed.

use std::fs;
use std::path::{Path, PathBuf};

use lol_html::errors::RewritingError;
use thiserror::Error;

use crate::config::PostbuildConfig;
use crate::i18n::Translations;
use crate::pipeline::{self, PageContext};
use crate::scan::collect_html_files;
use crate::utils::plural::plural_count;
use crate::{debug, log};

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to rewrite `{0}`")]
    Rewrite(PathBuf, #[source] RewritingError),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Per-run file counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Rewrite every HTML file under the configured output directory.
pub fn rewrite_site(config: &PostbuildConfig, translations: &Translations) -> RewriteSummary {
    let mut summary = RewriteSummary::default();
    let output = &config.build.output;

    if !output.is_dir() {
        log!("error"; "output directory `{}` does not exist, nothing to rewrite", output.display());
        return summary;
    }

    let files = collect_html_files(output);
    log!("rewrite"; "found {} in {}", plural_count(files.len(), "html file"), output.display());

    for path in &files {
        let relative = config.output_relative(path);
        match rewrite_file(path, relative, config, translations) {
            Ok(()) => {
                summary.processed += 1;
                log!("rewrite"; "{}", relative.display());
            }
            Err(err) => {
                summary.failed += 1;
                log!("error"; "{:#}", anyhow::Error::from(err));
            }
        }
    }

    let mode = if config.build.dry { " (dry run)" } else { "" };
    if summary.failed > 0 {
        log!("done"; "rewrote {}, {}{}",
            plural_count(summary.processed, "file"),
            plural_count(summary.failed, "failure"),
            mode);
    } else {
        log!("done"; "rewrote {}{}", plural_count(summary.processed, "file"), mode);
    }

    summary
}

/// Rewrite one file in place.
fn rewrite_file(
    path: &Path,
    relative: &Path,
    config: &PostbuildConfig,
    translations: &Translations,
) -> Result<(), RewriteError> {
    let source =
        fs::read_to_string(path).map_err(|err| RewriteError::Read(path.to_path_buf(), err))?;

    let html = rewrite_html(&source, relative, config, translations)
        .map_err(|err| RewriteError::Rewrite(path.to_path_buf(), err))?;

    if config.build.dry {
        debug!("dry"; "skip writing {}", path.display());
        return Ok(());
    }

    fs::write(path, html).map_err(|err| RewriteError::Write(path.to_path_buf(), err))
}

/// Run the page pipeline over HTML source.
///
/// `relative` is the page path relative to the output directory; it decides
/// which translations and platform tags apply.
pub fn rewrite_html(
    source: &str,
    relative: &Path,
    config: &PostbuildConfig,
    translations: &Translations,
) -> Result<String, RewritingError> {
    let ctx = PageContext::for_page(config, translations, relative);
    pipeline::rewrite(source, ctx)
}
