//! Component-wise path matching.
//!
//! Paths are compared by their normal components, so `a/./b`, `a//b` and
//! `a\b` (on Windows) all yield `["a", "b"]`.

use std::path::{Component, Path};

/// Normal components of `path` that are valid UTF-8.
pub fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

/// Whether `needle` occurs as a contiguous run of components in `path`.
///
/// An empty needle never matches.
pub fn contains_segments<S: AsRef<str>>(path: &Path, needle: &[S]) -> bool {
    if needle.is_empty() {
        return false;
    }
    segments(path).windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(segment, wanted)| *segment == wanted.as_ref())
    })
}
