//! Data models for word counts and the final report.
//!
//! - [`WordTally`]: running token -> count mapping built from article paragraphs
//! - [`WordCount`]: one `(word, count)` pair of the ranked output
//! - [`WordReport`]: everything printed at the end of a run

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Occurrence counts of whitespace-delimited tokens.
///
/// Tokens keep the order in which they were first seen, which is what breaks
/// ties in [`WordTally::most_common`]. Equality ignores that order, so two
/// tallies built from the same paragraphs in a different order compare equal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordTally {
    counts: IndexMap<String, u64>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` on whitespace and count every token once.
    ///
    /// Punctuation stays part of the token: `"word."` and `"word"` are
    /// different words.
    pub fn add_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            *self.counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    /// Add every count from `other` into `self`.
    pub fn merge(&mut self, other: WordTally) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Count for `word`, zero when it was never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `n` most frequent tokens, highest count first.
    ///
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        self.counts
            .iter()
            // `sorted_by` is a stable sort.
            .sorted_by(|a, b| b.1.cmp(a.1))
            .take(n)
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTally {
    /// Tally every item as a separate piece of text.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = WordTally::new();
        for text in iter {
            tally.add_text(text.as_ref());
        }
        tally
    }
}

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// The result of one run.
#[derive(Debug, Deserialize, Serialize)]
pub struct WordReport {
    /// Number of article pages that were discovered on the index page.
    pub pages_read: usize,
    /// Number of distinct tokens across all pages.
    pub distinct_words: usize,
    /// Number of tokens across all pages.
    pub total_words: u64,
    /// The most frequent tokens, highest count first.
    pub top_words: Vec<WordCount>,
}

impl WordReport {
    pub fn new(pages_read: usize, tally: &WordTally, top_n: usize) -> Self {
        Self {
            pages_read,
            distinct_words: tally.len(),
            total_words: tally.total(),
            top_words: tally.most_common(top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_text_counts_tokens() {
        let mut tally = WordTally::new();
        tally.add_text("hello world hello");
        assert_eq!(tally.get("hello"), 2);
        assert_eq!(tally.get("world"), 1);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tally: WordTally = ["word. word, word"].into_iter().collect();
        assert_eq!(tally.get("word."), 1);
        assert_eq!(tally.get("word,"), 1);
        assert_eq!(tally.get("word"), 1);
    }

    #[test]
    fn test_splits_on_any_whitespace() {
        let tally: WordTally = ["  tab\there\nnew\u{a0}line  "].into_iter().collect();
        assert_eq!(tally.get("tab"), 1);
        assert_eq!(tally.get("here"), 1);
        assert_eq!(tally.get("new"), 1);
        assert_eq!(tally.get("line"), 1);
        assert_eq!(tally.len(), 4);
    }

    #[test]
    fn test_empty_text_adds_nothing() {
        let tally: WordTally = ["", "   \n"].into_iter().collect();
        assert!(tally.is_empty());
        assert!(tally.most_common(30).is_empty());
    }

    #[test]
    fn test_order_independent() {
        let paragraphs = ["the cat sat", "on the mat", "the end."];
        let forward: WordTally = paragraphs.iter().collect();
        let backward: WordTally = paragraphs.iter().rev().collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.get("the"), 3);
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left: WordTally = ["a b"].into_iter().collect();
        let right: WordTally = ["b c"].into_iter().collect();
        left.merge(right);
        assert_eq!(left.get("a"), 1);
        assert_eq!(left.get("b"), 2);
        assert_eq!(left.get("c"), 1);

        let whole: WordTally = ["a b", "b c"].into_iter().collect();
        assert_eq!(left, whole);
    }

    #[test]
    fn test_most_common_ranks_and_breaks_ties_by_first_seen() {
        let tally: WordTally = ["zeta alpha beta alpha gamma beta delta"].into_iter().collect();
        let top = tally.most_common(4);
        let words: Vec<(&str, u64)> = top.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(
            words,
            vec![("alpha", 2), ("beta", 2), ("zeta", 1), ("gamma", 1)]
        );
    }

    #[test]
    fn test_most_common_shorter_than_n() {
        let tally: WordTally = ["one two"].into_iter().collect();
        assert_eq!(tally.most_common(30).len(), 2);
    }

    #[test]
    fn test_report_serialization() {
        let tally: WordTally = ["hello world hello"].into_iter().collect();
        let report = WordReport::new(1, &tally, 30);
        assert_eq!(report.distinct_words, 2);
        assert_eq!(report.total_words, 3);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""pages_read":1"#));
        assert!(json.contains(r#"{"word":"hello","count":2}"#));
    }
}
