use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::domain::ports::ContentExtractor;

/// Fragments at or below this length are treated as boilerplate noise.
pub const MIN_FRAGMENT_LEN: usize = 20;

fn content_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(tweet|status)").expect("content class regex must compile"))
}

/// Structural heuristic over profile-page markup: `div` and `article`
/// elements whose class names suggest message or post containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlContentExtractor;

impl HtmlContentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for HtmlContentExtractor {
    fn extract(&self, document: &str) -> Vec<String> {
        let html = Html::parse_document(document);
        let selector = Selector::parse("div, article").expect("static selector must parse");

        let mut fragments = Vec::new();
        for element in html.select(&selector) {
            let class_attr = element.value().attr("class").unwrap_or("");
            if !content_class_re().is_match(class_attr) {
                continue;
            }

            let raw: Vec<&str> = element.text().collect();
            let text = raw.join(" ");
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if text.len() > MIN_FRAGMENT_LEN {
                fragments.push(text);
            }
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_like_containers() {
        let extractor = HtmlContentExtractor::new();
        let page = concat!(
            "<html><body>",
            "<div class=\"TweetText\">First long enough fragment of content.</div>",
            "<article class=\"status-update\">Second long enough fragment of content.</article>",
            "</body></html>"
        );

        let fragments = extractor.extract(page);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], "First long enough fragment of content.");
    }

    #[test]
    fn ignores_unrelated_class_names() {
        let extractor = HtmlContentExtractor::new();
        let page = "<div class=\"sidebar\">Plenty of text but not a message container.</div>";

        assert!(extractor.extract(page).is_empty());
    }

    #[test]
    fn drops_short_fragments() {
        let extractor = HtmlContentExtractor::new();
        let page = "<div class=\"tweet\">tiny</div>";

        assert!(extractor.extract(page).is_empty());
    }

    #[test]
    fn collapses_internal_whitespace() {
        let extractor = HtmlContentExtractor::new();
        let page = "<div class=\"tweet\">spread   across\n   several    lines of markup</div>";

        let fragments = extractor.extract(page);

        assert_eq!(fragments, vec!["spread across several lines of markup"]);
    }
}
