//! Site constants for the BBC News scraper.
//!
//! Every URL and CSS class name the scraper depends on lives in [`SiteConfig`]
//! and is passed into the link collector and the word tally explicitly. The
//! binary always runs with [`SiteConfig::default`]; tests build their own
//! config pointing at a local mock server.

/// Constants describing the site being scraped.
///
/// # Fields
///
/// * `base_url` - Origin prepended to relative article links
/// * `index_url` - Front page listing the promoted headlines
/// * `headline_tag` - Tag name of headline links
/// * `headline_class` - Class marking an anchor as a promoted headline
/// * `required_link_fragment` - Substring every article link must contain
/// * `excluded_link_fragments` - Substrings that disqualify a link
/// * `paragraph_tag` - Tag name of body-text paragraphs
/// * `paragraph_class` - Class marking a body-text paragraph
/// * `promo_classes` - Wrapper classes whose descendant paragraphs are ignored
/// * `top_n` - Number of words reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub index_url: String,
    pub headline_tag: String,
    pub headline_class: String,
    pub required_link_fragment: String,
    pub excluded_link_fragments: Vec<String>,
    pub paragraph_tag: String,
    pub paragraph_class: String,
    pub promo_classes: Vec<String>,
    pub top_n: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bbc.com".to_string(),
            index_url: "https://www.bbc.com/news".to_string(),
            headline_tag: "a".to_string(),
            headline_class: "gs-c-promo-heading".to_string(),
            required_link_fragment: "news/".to_string(),
            excluded_link_fragments: vec!["/world_radio_and_tv".to_string()],
            paragraph_tag: "p".to_string(),
            paragraph_class: "eq5iqo00".to_string(),
            promo_classes: vec!["ssrcss-190o9en-PromoGroupWrapper".to_string()],
            top_n: 30,
        }
    }
}

impl SiteConfig {
    /// Same selectors and filters as the default, served from another origin.
    ///
    /// The index page is expected at `{base_url}/news`.
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            index_url: format!("{}/news", base_url),
            base_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_bbc() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "https://www.bbc.com");
        assert_eq!(config.index_url, "https://www.bbc.com/news");
        assert_eq!(config.top_n, 30);
        assert_eq!(config.promo_classes.len(), 1);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = SiteConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.index_url, "http://127.0.0.1:4000/news");
        assert_eq!(config.headline_class, "gs-c-promo-heading");
    }
}
