//! BBC News scraper.
//!
//! Indexes the promoted headlines on [BBC News](https://www.bbc.com/news) and
//! counts the words in the body paragraphs of every linked article.
//!
//! # URL Pattern
//!
//! Headline anchors carry the `gs-c-promo-heading` class. Their `href` is
//! either absolute (`https://www.bbc.com/news/...`) or relative
//! (`/news/world-12345`); relative links get the site origin prepended.
//! Only links containing `news/` are kept, and the radio & TV section is
//! dropped.

use crate::config::SiteConfig;
use crate::error::{IndexError, ScrapeError};
use crate::http::fetch_page;
use crate::models::WordTally;
use crate::promo::is_promo;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Build a selector for elements named `tag`.
fn tag_selector(tag: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(tag).map_err(|e| ScrapeError::InvalidSelector {
        selector: tag.to_string(),
        reason: e.to_string(),
    })
}

/// Whether `element` lists `class` in its `class` attribute.
///
/// Compared as a plain string, so any class name works, including ones
/// that are not valid CSS identifiers.
fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Whether an `href` points at an article worth reading.
pub fn keep_link(link: &str, config: &SiteConfig) -> bool {
    link.contains(&config.required_link_fragment)
        && !config
            .excluded_link_fragments
            .iter()
            .any(|excluded| link.contains(excluded.as_str()))
}

/// Prefix relative links with the site origin. `https://` links are returned
/// unchanged.
pub fn normalize_link(link: &str, config: &SiteConfig) -> String {
    if link.starts_with("https://") {
        link.to_string()
    } else {
        format!("{}{}", config.base_url, link)
    }
}

/// Pull the distinct article URLs out of a parsed index page.
///
/// Anchors without an `href` are ignored.
pub fn extract_article_links(
    document: &Html,
    config: &SiteConfig,
) -> Result<HashSet<String>, ScrapeError> {
    let headline_selector = tag_selector(&config.headline_tag)?;

    let mut article_urls = HashSet::new();
    for element in document
        .select(&headline_selector)
        .filter(|element| has_class(element, &config.headline_class))
    {
        let Some(href) = element.value().attr("href") else {
            debug!("Headline anchor without href");
            continue;
        };
        if !keep_link(href, config) {
            debug!(%href, "Skipping non-article link");
            continue;
        }
        article_urls.insert(normalize_link(href, config));
    }
    Ok(article_urls)
}

/// Index the BBC News front page to extract article URLs.
///
/// # Returns
///
/// The distinct absolute article URLs, or an [`IndexError`]. Its `Fetch`
/// variant names the index URL when the page cannot be retrieved.
#[instrument(level = "info", skip_all, fields(index_url = %config.index_url))]
pub async fn index_articles(
    client: &Client,
    config: &SiteConfig,
) -> Result<HashSet<String>, IndexError> {
    let html = fetch_page(client, &config.index_url).await?;
    let document = Html::parse_document(&html);
    let article_urls = extract_article_links(&document, config)?;

    info!(count = article_urls.len(), "Indexed BBC article URLs");
    debug!(urls = ?article_urls, "BBC URLs");
    Ok(article_urls)
}

/// Count the words of every non-promotional body paragraph in `document`
/// into `tally`.
///
/// `paragraph_selector` picks the paragraph tag; only paragraphs carrying
/// `config.paragraph_class` are counted.
///
/// # Returns
///
/// The number of paragraphs that were counted.
pub fn tally_document(
    document: &Html,
    paragraph_selector: &Selector,
    config: &SiteConfig,
    tally: &mut WordTally,
) -> usize {
    let mut counted = 0;
    for paragraph in document
        .select(paragraph_selector)
        .filter(|paragraph| has_class(paragraph, &config.paragraph_class))
    {
        if is_promo(&paragraph, &config.promo_classes) {
            debug!("Skipping promo paragraph");
            continue;
        }
        let text = paragraph.text().collect::<String>();
        tally.add_text(&text);
        counted += 1;
    }
    counted
}

/// Fetch every article in turn and tally the words of its body paragraphs.
///
/// Each page is parsed and counted as soon as it arrives, so only one body is
/// held at a time. Articles that fail to download are logged and skipped; the
/// rest are still counted. An invalid paragraph tag is reported before any
/// article is requested.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn tally_articles(
    client: &Client,
    urls: &HashSet<String>,
    config: &SiteConfig,
) -> Result<WordTally, ScrapeError> {
    let paragraph_selector = &tag_selector(&config.paragraph_tag)?;

    let (tally, fetched) = stream::iter(urls)
        .then(|url: &String| async move {
            let body = match fetch_page(client, url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, %url, "BBC article fetch failed; skipping");
                    return None;
                }
            };
            let document = Html::parse_document(&body);
            let mut page_tally = WordTally::new();
            let paragraphs = tally_document(&document, paragraph_selector, config, &mut page_tally);
            debug!(%url, paragraphs, words = page_tally.total(), "Tallied BBC article");
            Some(page_tally)
        })
        .fold((WordTally::new(), 0usize), |(mut tally, fetched), page| {
            let fetched = match page {
                Some(page_tally) => {
                    tally.merge(page_tally);
                    fetched + 1
                }
                None => fetched,
            };
            std::future::ready((tally, fetched))
        })
        .await;

    info!(
        fetched,
        skipped = urls.len() - fetched,
        distinct_words = tally.len(),
        "Tallied BBC articles"
    );
    Ok(tally)
}
