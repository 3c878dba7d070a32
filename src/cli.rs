//! Command-line interface definitions for News Word Tally.
//!
//! The site being scraped and the number of words reported are fixed; the
//! command line only chooses how the result is printed.

use clap::{Parser, ValueEnum};

/// How the final ranking is written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ranked `word count` lines
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

/// Command-line arguments for the News Word Tally application.
///
/// # Examples
///
/// ```sh
/// # Ranked list in the terminal
/// news_word_tally
///
/// # Machine-readable report, with debug logs on stderr
/// RUST_LOG=debug news_word_tally --format json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output format for the word ranking
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
