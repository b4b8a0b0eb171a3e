//! Page route - output path to translation key mapping.

use std::path::Path;

use crate::utils::path::segments;

/// Category and type of a generated page, read from its output path.
///
/// The build lays pages out as `<marker>/<category>/<type>`, either as a
/// directory with an `index.html` or as a single `<type>.html` file:
///
/// ```text
/// out/cf/block/ip/index.html   -> PageRoute { category: "block", kind: "ip" }
/// out/cf/error/5xx.html        -> PageRoute { category: "error", kind: "5xx" }
/// out/cf/index.html            -> None (only one segment after marker)
/// out/about/index.html         -> None (no marker)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Segment right after the marker (e.g. `block`).
    pub category: String,
    /// Segment after the category, without a `.html` extension (e.g. `ip`).
    pub kind: String,
}

impl PageRoute {
    /// Parse the route from a path relative to the output root.
    ///
    /// Returns `None` if `marker` does not occur or fewer than two segments
    /// follow its first occurrence.
    pub fn from_path(path: &Path, marker: &str) -> Option<Self> {
        let segments = segments(path);
        let at = segments.iter().position(|s| *s == marker)?;

        let category = *segments.get(at + 1)?;
        let kind = *segments.get(at + 2)?;

        Some(Self {
            category: category.to_string(),
            kind: strip_html_ext(kind).to_string(),
        })
    }
}

fn strip_html_ext(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("html") && !stem.is_empty() => stem,
        _ => segment,
    }
}
