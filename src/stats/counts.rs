//! Token, letter, and sentence counts.
//!
//! # Examples
//!
//! ```
//! use vellum::stats::counts::{avg_word_length, word_count};
//!
//! assert_eq!(word_count("one two  three"), 3);
//! assert_eq!(avg_word_length("ab abcd"), 3.0);
//! ```

use crate::segment::sentence::sentences;
use crate::segment::word::words;

/// Count the whitespace-delimited tokens in `text`.
///
/// Tokens are split on a single space, newline, or tab and counted when
/// non-empty after trimming. Punctuation is not stripped, so this can
/// differ from `words(text).len()` when punctuation-only tokens are
/// present.
pub fn word_count(text: &str) -> usize {
    text.split([' ', '\n', '\t'])
        .filter(|token| !token.trim().is_empty())
        .count()
}

/// Count the alphabetic characters in `text` (Unicode letter category).
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Map [`word_count`] over each item, preserving order and length.
///
/// Pairs with the segmentation functions, e.g.
/// `word_counts(&sentences(text))` for per-sentence word counts.
pub fn word_counts<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    items.iter().map(|item| word_count(item.as_ref())).collect()
}

/// Return the change in word count (current minus previous) for each item.
///
/// The first element is always 0. The running baseline for the first
/// comparison is the punctuation-stripped word list length of element 0,
/// while every later element uses the raw [`word_count`]; the two counts
/// differ when punctuation-only tokens are present. This mixed baseline is
/// kept for compatibility with existing consumers.
pub fn word_count_change<S: AsRef<str>>(items: &[S]) -> Vec<i64> {
    let Some(first) = items.first() else {
        return Vec::new();
    };

    let mut changes = Vec::with_capacity(items.len());
    changes.push(0);
    let mut prev = words(first.as_ref()).len() as i64;
    for item in &items[1..] {
        let current = word_count(item.as_ref()) as i64;
        changes.push(current - prev);
        prev = current;
    }
    changes
}

/// Mean character length over the punctuation-stripped words of `text`.
///
/// Returns 0.0 when the text contains no words.
pub fn avg_word_length(text: &str) -> f64 {
    let list = words(text);
    if list.is_empty() {
        return 0.0;
    }
    let total: usize = list.iter().map(|word| word.chars().count()).sum();
    total as f64 / list.len() as f64
}

/// Mean word count over the whitespace-policy sentences of `text`.
///
/// Returns 0.0 when the text contains no sentences.
pub fn avg_sentence_word_count(text: &str) -> f64 {
    let counts = word_counts(&sentences(text));
    if counts.is_empty() {
        return 0.0;
    }
    counts.iter().sum::<usize>() as f64 / counts.len() as f64
}
