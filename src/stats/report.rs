//! Aggregate manuscript report.
//!
//! [`TextReport`] gathers the headline numbers for a piece of prose in one
//! serializable record: counts, averages, the dialogue ratio, and reading
//! time. It is pure data - rendering it is left to the caller.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::segment::chapter::chapters;
use crate::segment::quote::quotes;
use crate::segment::sentence::sentences;
use crate::stats::counts::{
    avg_sentence_word_count, avg_word_length, letter_count, word_count,
};
use crate::stats::dialogue::percent_char_in_quotes;
use crate::stats::reading::{DEFAULT_READING_WPM, reading_time_minutes};

/// A one-shot statistical summary of a text.
///
/// # Examples
///
/// ```
/// use vellum::stats::report::TextReport;
///
/// let report = TextReport::from_text("Hello there.  She left.").unwrap();
/// assert_eq!(report.sentence_count, 2);
/// assert_eq!(report.word_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    /// Number of chapters (leading title text not counted)
    pub chapter_count: usize,
    /// Number of whitespace-policy sentences
    pub sentence_count: usize,
    /// Raw whitespace-token word count
    pub word_count: usize,
    /// Number of quoted spans
    pub quote_count: usize,
    /// Total characters
    pub char_count: usize,
    /// Alphabetic characters
    pub letter_count: usize,
    /// Mean character length of the punctuation-stripped words
    pub avg_word_length: f64,
    /// Mean word count per whitespace-policy sentence
    pub avg_sentence_word_count: f64,
    /// Fraction of characters inside quoted spans, in `[0, 1]`
    pub dialogue_ratio: f64,
    /// Estimated reading time in minutes
    pub reading_time_minutes: f64,
    /// Estimated reading time in seconds
    pub reading_time_seconds: f64,
}

impl TextReport {
    /// Build a report for `text` at the default reading speed.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::with_wpm(text, DEFAULT_READING_WPM)
    }

    /// Build a report for `text` at `wpm` words per minute.
    ///
    /// # Errors
    ///
    /// Returns an error if `wpm` is 0.
    pub fn with_wpm(text: &str, wpm: u32) -> Result<Self> {
        let minutes = reading_time_minutes(text, wpm)?;
        Ok(TextReport {
            chapter_count: chapters(text).len(),
            sentence_count: sentences(text).len(),
            word_count: word_count(text),
            quote_count: quotes(text).len(),
            char_count: text.chars().count(),
            letter_count: letter_count(text),
            avg_word_length: avg_word_length(text),
            avg_sentence_word_count: avg_sentence_word_count(text),
            dialogue_ratio: percent_char_in_quotes(text),
            reading_time_minutes: minutes,
            reading_time_seconds: minutes * 60.0,
        })
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let text = "Chapter 1\n\"Hi,\" she said.  He waved.\nChapter 2\nThe end.";
        let report = TextReport::from_text(text).unwrap();

        assert_eq!(report.chapter_count, 2);
        assert_eq!(report.quote_count, 1);
        assert_eq!(report.word_count, word_count(text));
        assert_eq!(report.char_count, text.chars().count());
        assert!(report.dialogue_ratio > 0.0);
    }

    #[test]
    fn test_empty_text_report() {
        let report = TextReport::from_text("").unwrap();
        assert_eq!(report.word_count, 0);
        assert_eq!(report.avg_word_length, 0.0);
        assert_eq!(report.avg_sentence_word_count, 0.0);
        assert_eq!(report.reading_time_minutes, 0.0);
    }

    #[test]
    fn test_zero_wpm_is_an_error() {
        assert!(TextReport::with_wpm("text", 0).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let report = TextReport::from_text("One.  Two.").unwrap();
        let json = report.to_json().unwrap();
        let parsed: TextReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
