//! Plain-text ranking of the most common words.

use crate::models::WordReport;
use std::io::{self, Write};

/// Write one line per word: rank, word and count, highest count first.
///
/// The word column is padded to the longest word in the report.
pub fn write_report<W: Write>(report: &WordReport, out: &mut W) -> io::Result<()> {
    let width = report
        .top_words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0);

    for (rank, entry) in report.top_words.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<width$}  {}",
            rank + 1,
            entry.word,
            entry.count,
            width = width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordTally;

    #[test]
    fn test_ranked_lines() {
        let tally: WordTally = ["hello world hello"].into_iter().collect();
        let report = WordReport::new(1, &tally, 30);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "  1. hello  2\n  2. world  1\n");
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let report = WordReport::new(0, &WordTally::new(), 30);
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
