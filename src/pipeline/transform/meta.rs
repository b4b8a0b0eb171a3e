//! Title, description and keywords injection.
//!
//! Pages under `<marker>/<category>/<type>` with a translation get their
//! `<title>` and description replaced. Every page with a `<head>` gets a
//! keywords meta tag unless it already has one.

use lol_html::element;
use lol_html::html_content::ContentType;

use crate::config::MetaConfig;
use crate::i18n::{PageText, Translations};
use crate::page::PageRoute;
use crate::pipeline::survey::PageSurvey;
use crate::pipeline::{Handler, Transform};
use crate::utils::html::{escape, escape_attr};

use super::{meta_name, meta_tag};

pub struct MetaInjector<'a> {
    config: &'a MetaConfig,
    text: Option<&'a PageText>,
    survey: PageSurvey,
}

impl<'a> MetaInjector<'a> {
    pub fn new(
        config: &'a MetaConfig,
        translations: &'a Translations,
        route: Option<&PageRoute>,
        survey: PageSurvey,
    ) -> Self {
        Self {
            config,
            text: route.and_then(|r| translations.lookup(r)),
            survey,
        }
    }

    /// Markup appended at the end of `<head>` for whatever is missing.
    fn head_additions(&self) -> String {
        let mut html = String::new();
        if let Some(text) = self.text {
            if !self.survey.has_title {
                let title = self.config.branded_title(&text.title);
                html.push_str(&format!("<title>{}</title>", escape(&title)));
            }
            if !self.survey.has_description {
                html.push_str(&meta_tag("description", &text.message));
            }
        }
        if !self.survey.has_keywords {
            html.push_str(&meta_tag("keywords", &self.config.keywords));
        }
        html
    }
}

impl Transform for MetaInjector<'_> {
    fn handlers<'h>(&'h self) -> Vec<Handler<'h>> {
        let mut handlers: Vec<Handler<'h>> = Vec::new();

        if let Some(text) = self.text {
            let title = self.config.branded_title(&text.title);
            handlers.push(element!("head title", move |el| {
                el.set_inner_content(&title, ContentType::Text);
                Ok(())
            }));

            let message = escape_attr(&text.message).into_owned();
            handlers.push(element!("head meta[name]", move |el| {
                if meta_name(el).as_deref() == Some("description") {
                    el.set_attribute("content", &message)?;
                }
                Ok(())
            }));
        }

        let additions = self.head_additions();
        if !additions.is_empty() {
            handlers.push(element!("head", move |el| {
                el.append(&additions, ContentType::Html);
                Ok(())
            }));
        }

        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use std::path::Path;

    const WITH_DESCRIPTION: &str = concat!(
        "<html><head><title>Old</title>",
        "<meta name=\"description\" content=\"old description\">",
        "</head><body></body></html>",
    );

    fn run_with(config: &MetaConfig, html: &str, path: &str) -> String {
        let tr = Translations::embedded().unwrap();
        let route = PageRoute::from_path(Path::new(path), &config.marker);
        let survey = PageSurvey::scan(html).unwrap();
        let injector = MetaInjector::new(config, &tr, route.as_ref(), survey);
        Pipeline::new().pipe(&injector).run(html).unwrap()
    }

    fn run(html: &str, path: &str) -> String {
        run_with(&MetaConfig::default(), html, path)
    }

    fn keywords_tag() -> String {
        meta_tag("keywords", &MetaConfig::default().keywords)
    }

    #[test]
    fn test_known_block_page() {
        let tr = Translations::embedded().unwrap();
        let expected = tr
            .lookup(&PageRoute {
                category: "block".into(),
                kind: "ip".into(),
            })
            .unwrap()
            .clone();

        let html = run(WITH_DESCRIPTION, "cf/block/ip/index.html");
        assert!(html.starts_with(&format!(
            "<html><head><title>{} - Cloudflare</title><meta ",
            expected.title
        )));
        assert!(html.contains(&format!("content=\"{}\"", expected.message)));
        assert!(!html.contains("old description"));
        assert_eq!(html.matches("name=\"description\"").count(), 1);
        assert!(html.ends_with(&format!("{}</head><body></body></html>", keywords_tag())));
    }

    #[test]
    fn test_title_and_description_created_when_missing() {
        let html = run(
            "<html><head></head><body></body></html>",
            "cf/challenge/managed/index.html",
        );
        assert!(html.contains(
            "<title>Checking Your Browser - Cloudflare</title><meta name=\"description\""
        ));
        assert_eq!(html.matches("name=\"description\"").count(), 1);
    }

    #[test]
    fn test_unknown_type_leaves_title_and_description() {
        let html = run(WITH_DESCRIPTION, "cf/block/unknown/index.html");
        assert_eq!(
            html,
            WITH_DESCRIPTION.replace("</head>", &format!("{}</head>", keywords_tag()))
        );
    }

    #[test]
    fn test_missing_marker_or_segments_is_noop() {
        for path in ["about/index.html", "cf/index.html"] {
            let html = run(WITH_DESCRIPTION, path);
            assert!(html.contains("<title>Old</title>"), "{path}");
            assert!(html.contains("old description"), "{path}");
        }
    }

    #[test]
    fn test_keywords_inserted_once() {
        let html = run(WITH_DESCRIPTION, "about/index.html");
        assert_eq!(html.matches("name=\"keywords\"").count(), 1);
        assert!(html.contains(&keywords_tag()));
    }

    #[test]
    fn test_existing_keywords_not_overwritten() {
        let source = r#"<html><head><meta name="Keywords" content="mine"></head></html>"#;
        let html = run(source, "about/index.html");
        assert_eq!(html, source);
    }

    #[test]
    fn test_no_head_is_noop() {
        let html = run("<p>fragment</p>", "cf/block/ip/index.html");
        assert_eq!(html, "<p>fragment</p>");
    }

    #[test]
    fn test_translated_text_is_escaped() {
        let mut config = MetaConfig::default();
        config.brand = "R&D".into();

        let path = "cf/block/ip/index.html";
        for source in [
            "<html><head><title>x</title></head></html>",
            "<html><head></head></html>",
        ] {
            let html = run_with(&config, source, path);
            assert!(html.contains("<title>Access Denied - R&amp;D</title>"), "{html}");
        }
    }
}
