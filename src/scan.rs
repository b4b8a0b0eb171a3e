//! HTML file discovery under the output directory.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

/// Whether `path` has an `.html` extension (case-insensitive).
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Collect all HTML files under `dir` recursively, sorted by path.
///
/// Unreadable entries are skipped. A missing `dir` yields an empty list.
pub fn collect_html_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_html(path))
        .collect();
    files.sort();
    files
}
