//! # News Word Tally
//!
//! Reads the articles promoted on the BBC News front page and reports the
//! words that occur most often in their body text.
//!
//! ## Usage
//!
//! ```sh
//! news_word_tally
//! news_word_tally --format json
//! ```
//!
//! ## Architecture
//!
//! The application is a two-stage pipeline run on a single thread:
//! 1. **Indexing**: Collect article URLs from the front page headlines
//! 2. **Tallying**: Fetch each article in turn and count the words of its
//!    body paragraphs, skipping promotional blocks
//!
//! The top words are then written to stdout as text or JSON. Logs go to
//! stderr.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::io;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod http;
mod models;
mod outputs;
mod promo;
mod scrapers;

use cli::{Cli, OutputFormat};
use config::SiteConfig;
use error::{IndexError, ScrapeError};
use models::WordReport;
use outputs::{json, text};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("news_word_tally starting up");

    let args = Cli::parse();
    debug!(?args.format, "Parsed CLI arguments");

    let config = SiteConfig::default();
    let client = http::build_client()?;

    let Some(report) = run(&client, &config).await? else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => text::write_report(&report, &mut stdout)?,
        OutputFormat::Json => json::write_report(&report, &mut stdout)?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Index the front page, tally every article and build the report.
///
/// Returns `Ok(None)` when there is nothing to report: the index page could
/// not be fetched (logged as an error) or it linked no articles.
#[instrument(level = "info", skip_all)]
async fn run(client: &Client, config: &SiteConfig) -> Result<Option<WordReport>, ScrapeError> {
    let urls = match scrapers::bbcnews::index_articles(client, config).await {
        Ok(urls) => urls,
        Err(IndexError::Fetch(e)) => {
            error!(url = %e.url(), error = %e, "Index page fetch failed");
            return Ok(None);
        }
        Err(IndexError::Scrape(e)) => return Err(e),
    };

    info!(count = urls.len(), "{} news pages to read", urls.len());
    if urls.is_empty() {
        return Ok(None);
    }

    let tally = scrapers::bbcnews::tally_articles(client, &urls, config).await?;
    Ok(Some(WordReport::new(urls.len(), &tally, config.top_n)))
}
