//! Error types for fetching and parsing pages.

use thiserror::Error;

/// A page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed in transport or while reading the body.
    #[error("get response from {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL that failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } => url,
        }
    }
}

/// Scraper setup failed before any page was parsed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A configured tag name does not form a valid CSS selector.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Indexing produced no URL set.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_message() {
        let err = ScrapeError::InvalidSelector {
            selector: "p!".to_string(),
            reason: "unexpected token".to_string(),
        };
        assert_eq!(err.to_string(), "invalid selector `p!`: unexpected token");

        let wrapped: IndexError = err.into();
        assert!(wrapped.to_string().starts_with("invalid selector"));
    }
}
