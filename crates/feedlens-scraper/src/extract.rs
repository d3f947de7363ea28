//! CSS-selector extraction of post texts from rendered markup.

use scraper::{Html, Selector};

use crate::error::ScraperError;

/// Default selector for one rendered post.
pub const DEFAULT_POST_SELECTOR: &str = r#"article[role="article"]"#;
/// Default selector for the text node inside a post.
pub const DEFAULT_TEXT_SELECTOR: &str = "div[lang]";

/// Extracts post texts from a rendered page.
///
/// For every element matching the post selector, the first descendant
/// matching the text selector supplies the text (all of its text nodes
/// concatenated). Posts without such a descendant, or whose text is blank,
/// are skipped. Output follows document order and may contain duplicates.
#[derive(Debug, Clone)]
pub struct PostExtractor {
    post: Selector,
    text: Selector,
}

impl PostExtractor {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if either selector does not parse.
    pub fn new(post_selector: &str, text_selector: &str) -> Result<Self, ScraperError> {
        Ok(Self {
            post: parse_selector(post_selector)?,
            text: parse_selector(text_selector)?,
        })
    }

    #[must_use]
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.post)
            .filter_map(|post| post.select(&self.text).next())
            .map(|node| node.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
            .collect()
    }
}

impl Default for PostExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_POST_SELECTOR, DEFAULT_TEXT_SELECTOR)
            .expect("default selectors are valid")
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
