//! JSON output of the report.
//!
//! ```text
//! {
//!   "pages_read": 12,
//!   "distinct_words": 4210,
//!   "total_words": 15873,
//!   "top_words": [
//!     { "word": "the", "count": 912 },
//!     ...
//!   ]
//! }
//! ```

use crate::models::WordReport;
use std::error::Error;
use std::io::Write;
use tracing::{debug, instrument};

/// Serialize `report` as pretty-printed JSON followed by a newline.
#[instrument(level = "debug", skip_all, fields(words = report.top_words.len()))]
pub fn write_report<W: Write>(report: &WordReport, out: &mut W) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;
    debug!(bytes = json.len(), "Serialized report");
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordTally;

    #[test]
    fn test_report_round_trips() {
        let tally: WordTally = ["b a b"].into_iter().collect();
        let report = WordReport::new(2, &tally, 1);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let parsed: WordReport = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.pages_read, 2);
        assert_eq!(parsed.distinct_words, 2);
        assert_eq!(parsed.total_words, 3);
        assert_eq!(parsed.top_words.len(), 1);
        assert_eq!(parsed.top_words[0].word, "b");
        assert_eq!(parsed.top_words[0].count, 2);
    }
}
