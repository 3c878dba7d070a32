//! News source scrapers.
//!
//! Each scraper follows the same two-phase pattern:
//!
//! 1. **Indexing**: discover article URLs from the source's front page
//! 2. **Tallying**: fetch each article and count the words of its body text
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | BBC News | [`bbcnews`] | HTML scraping | Promoted headlines only; promo blocks skipped |
//!
//! Requests are issued one at a time. A failed article fetch is logged and
//! skipped; a failed index fetch is returned to the caller.

pub mod bbcnews;
