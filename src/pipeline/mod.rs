//! Page rewrite pipeline.
//!
//! Every page runs through the same fixed set of transforms:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ PreloadTransform   style preload -> stylesheet, fonts out │
//! │ MetaInjector       title/description/keywords             │
//! │ PlatformInjector   edge placeholders (platform pages)     │
//! │ ScriptRelocator    <head> scripts -> end of <body>        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Transforms register `lol_html` content handlers and the page is streamed
//! through all of them in one pass. Markup no handler touches is copied
//! through byte for byte. A read-only [`PageSurvey`] pass runs first for
//! decisions that depend on later markup.

pub mod survey;
pub mod transform;

use std::borrow::Cow;
use std::path::Path;

use lol_html::errors::RewritingError;
use lol_html::{ElementContentHandlers, RewriteStrSettings, Selector, rewrite_str};

use crate::config::PostbuildConfig;
use crate::debug;
use crate::i18n::Translations;
use crate::manifest;
use crate::page::PageRoute;
use crate::utils::date::DateTimeUtc;
use crate::utils::path::contains_segments;

pub use survey::PageSurvey;
pub use transform::{MetaInjector, PlatformInjector, PlatformTags, PreloadTransform, ScriptRelocator};

// =============================================================================
// Transform / Pipeline
// =============================================================================

/// Selector plus the handlers run on matching content.
pub type Handler<'h> = (Cow<'static, Selector>, ElementContentHandlers<'h>);

/// A single page rewrite step.
pub trait Transform {
    /// Content handlers for this step. They may borrow `self` for state
    /// shared across handlers.
    fn handlers<'h>(&'h self) -> Vec<Handler<'h>>;
}

/// Collects transform handlers and runs them over a page.
///
/// Handlers matching the same element run in the order they were piped.
#[derive(Default)]
pub struct Pipeline<'h> {
    handlers: Vec<Handler<'h>>,
}

impl<'h> Pipeline<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pipe<T: Transform>(mut self, transform: &'h T) -> Self {
        self.handlers.extend(transform.handlers());
        self
    }

    /// Apply the transform only if present.
    pub fn pipe_opt<T: Transform>(self, transform: Option<&'h T>) -> Self {
        match transform {
            Some(transform) => self.pipe(transform),
            None => self,
        }
    }

    pub fn run(self, source: &str) -> Result<String, RewritingError> {
        rewrite_str(
            source,
            RewriteStrSettings {
                element_content_handlers: self.handlers,
                ..RewriteStrSettings::new()
            },
        )
    }
}

// =============================================================================
// Page context
// =============================================================================

/// Everything a page's transforms need, resolved from its output path.
pub struct PageContext<'a> {
    pub config: &'a PostbuildConfig,
    pub translations: &'a Translations,
    /// `<marker>/<category>/<type>` parsed from the path, if present.
    pub route: Option<PageRoute>,
    /// Present only for pages inside the platform output directory.
    pub platform: Option<PlatformTags>,
}

impl<'a> PageContext<'a> {
    /// Resolve the context for a page.
    ///
    /// `relative` is the page path relative to the output root. For platform
    /// pages this reads the manifest and stamps the current time.
    pub fn for_page(
        config: &'a PostbuildConfig,
        translations: &'a Translations,
        relative: &Path,
    ) -> Self {
        let route = PageRoute::from_path(relative, &config.meta.marker);

        let platform = contains_segments(relative, &config.platform.segments).then(|| {
            let version =
                manifest::version_or(&config.build.manifest, &config.platform.fallback_version);
            PlatformTags::new(DateTimeUtc::now().to_iso8601(), version)
        });

        debug!("page"; "{}: route={:?} platform={}",
            relative.display(), route, platform.is_some());

        Self {
            config,
            translations,
            route,
            platform,
        }
    }
}

/// Run the full transform set over a page.
pub fn rewrite(source: &str, ctx: PageContext<'_>) -> Result<String, RewritingError> {
    let survey = PageSurvey::scan(source)?;

    let meta = MetaInjector::new(
        &ctx.config.meta,
        ctx.translations,
        ctx.route.as_ref(),
        survey,
    );
    let platform = ctx.platform.map(PlatformInjector::new);
    let script = ScriptRelocator::new(survey.has_body);

    Pipeline::new()
        .pipe(&PreloadTransform)
        .pipe(&meta)
        .pipe_opt(platform.as_ref())
        .pipe(&script)
        .run(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lol_html::element;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PAGE: &str = concat!(
        "<!DOCTYPE html><html><head>",
        "<meta charset=\"utf-8\">",
        "<link rel=\"preload\" href=\"/_next/static/css/app.css\" as=\"style\">",
        "<link rel=\"preload\" href=\"/_next/static/media/inter.woff2\" as=\"font\">",
        "<title>Placeholder</title>",
        "<script src=\"/_next/static/chunks/main.js\" async></script>",
        "</head><body><div id=\"__next\"></div></body></html>",
    );

    struct Tag(&'static str);

    impl Transform for Tag {
        fn handlers<'h>(&'h self) -> Vec<Handler<'h>> {
            vec![element!("p", move |el| {
                el.set_attribute("data-seen", self.0)?;
                Ok(())
            })]
        }
    }

    #[test]
    fn test_pipe_opt_skips_none() {
        let html = Pipeline::new().pipe_opt(None::<&Tag>).run("<p>x</p>").unwrap();
        assert_eq!(html, "<p>x</p>");

        let html = Pipeline::new()
            .pipe_opt(Some(&Tag("1")))
            .run("<p>x</p>")
            .unwrap();
        assert_eq!(html, r#"<p data-seen="1">x</p>"#);
    }

    #[test]
    fn test_handlers_run_in_pipe_order() {
        let html = Pipeline::new()
            .pipe(&Tag("first"))
            .pipe(&Tag("second"))
            .run("<p>x</p>")
            .unwrap();
        assert_eq!(html, r#"<p data-seen="second">x</p>"#);
    }

    fn config_with_manifest(dir: &TempDir, version: Option<&str>) -> PostbuildConfig {
        let mut config = PostbuildConfig::default();
        config.build.manifest = dir.path().join("package.json");
        if let Some(version) = version {
            fs::write(
                &config.build.manifest,
                format!(r#"{{"name":"pages","version":"{version}"}}"#),
            )
            .unwrap();
        }
        config
    }

    #[test]
    fn test_context_for_plain_page() {
        let dir = TempDir::new().unwrap();
        let config = config_with_manifest(&dir, Some("1.0.0"));
        let tr = Translations::embedded().unwrap();

        let ctx = PageContext::for_page(&config, &tr, Path::new("about/index.html"));
        assert!(ctx.route.is_none());
        assert!(ctx.platform.is_none());
    }

    #[test]
    fn test_context_for_platform_page() {
        let dir = TempDir::new().unwrap();
        let config = config_with_manifest(&dir, Some("3.1.4"));
        let tr = Translations::embedded().unwrap();

        let path = PathBuf::from("edgeone/pages/cf/block/ip/index.html");
        let ctx = PageContext::for_page(&config, &tr, &path);

        let route = ctx.route.as_ref().unwrap();
        assert_eq!((route.category.as_str(), route.kind.as_str()), ("block", "ip"));
        let platform = ctx.platform.as_ref().unwrap();
        assert_eq!(platform.version, "3.1.4");
        assert!(platform.build_time.ends_with('Z'));
    }

    #[test]
    fn test_context_falls_back_without_manifest() {
        let dir = TempDir::new().unwrap();
        let config = config_with_manifest(&dir, None);
        let tr = Translations::embedded().unwrap();

        let ctx = PageContext::for_page(&config, &tr, Path::new("edgeone/pages/index.html"));
        assert_eq!(ctx.platform.unwrap().version, "unknown");
    }

    #[test]
    fn test_full_rewrite() {
        let dir = TempDir::new().unwrap();
        let config = config_with_manifest(&dir, Some("2.0.0"));
        let tr = Translations::embedded().unwrap();
        let path = Path::new("edgeone/pages/cf/block/ip/index.html");

        let html = rewrite(PAGE, PageContext::for_page(&config, &tr, path)).unwrap();

        let head = &html[..html.find("</head>").unwrap()];
        let body = &html[html.find("<body>").unwrap()..];

        assert!(html.starts_with(concat!(
            "<!DOCTYPE html><html><head>",
            "<meta name=\"x-client-ip\" content=\"{{CLIENT_IP}}\">",
        )));
        assert!(head.contains(r#"<meta name="x-app-version" content="2.0.0">"#));
        assert!(head.contains(r#"rel="stylesheet""#));
        assert!(!head.contains("as=\"style\""));
        assert!(!html.contains("woff2"));
        assert!(head.contains("<title>Access Denied - Cloudflare</title>"));
        assert!(head.contains(r#"name="description""#));
        assert!(head.contains(r#"name="keywords""#));
        assert!(!head.contains("<script"));

        assert!(body.ends_with(concat!(
            "<div id=\"__next\"></div>",
            "<script src=\"/_next/static/chunks/main.js\" async></script>",
            "</body></html>",
        )));
    }

    #[test]
    fn test_rewrite_twice_only_refreshes_build_time() {
        let dir = TempDir::new().unwrap();
        let config = config_with_manifest(&dir, Some("2.0.0"));
        let tr = Translations::embedded().unwrap();
        let path = Path::new("edgeone/pages/cf/block/ip/index.html");

        let mut ctx = PageContext::for_page(&config, &tr, path);
        ctx.platform = Some(PlatformTags::new("T1".into(), "2.0.0".into()));
        let once = rewrite(PAGE, ctx).unwrap();

        let mut ctx = PageContext::for_page(&config, &tr, path);
        ctx.platform = Some(PlatformTags::new("T2".into(), "2.0.0".into()));
        let twice = rewrite(&once, ctx).unwrap();

        assert_eq!(twice, once.replace("\"T1\"", "\"T2\""));
    }
}
