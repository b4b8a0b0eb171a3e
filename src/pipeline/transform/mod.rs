//! Page transforms.
//!
//! # Modules
//!
//! - `preload`: Upgrades style preloads to stylesheets, drops font preloads
//! - `meta`: Injects translated title/description and default keywords
//! - `platform`: Prepends edge platform placeholder meta tags
//! - `script`: Moves `<head>` scripts to the end of `<body>`

mod meta;
mod platform;
mod preload;
mod script;

pub use meta::MetaInjector;
pub use platform::{PlatformInjector, PlatformTags};
pub use preload::PreloadTransform;
pub use script::ScriptRelocator;

use lol_html::html_content::Element;

use crate::utils::html::escape_attr;

/// `<meta name="..." content="...">`
fn meta_tag(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">",
        escape_attr(name),
        escape_attr(content)
    )
}

/// Normalized `name` of a `<meta>` element (trimmed, lowercase).
pub(crate) fn meta_name(elem: &Element<'_, '_>) -> Option<String> {
    elem.get_attribute("name")
        .map(|name| name.trim().to_ascii_lowercase())
}
