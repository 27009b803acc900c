//! Word repetition detection.
//!
//! Flags words a writer has used more than once, a common revision aid for
//! spotting unintentional echoes like "the supermarket ... the supermarket".
//!
//! # Examples
//!
//! ```
//! use vellum::stats::repetition::word_repetitions;
//!
//! let text = "He walked out of the supermarket with a cart; \
//!             it was the supermarket with a sign out front.";
//! assert_eq!(word_repetitions(text), vec!["out", "supermarket", "with"]);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::segment::word::words;

/// Words too common to be worth flagging as repetitions.
const REPETITION_STOP_WORDS: &[&str] = &["the", "a", "an", "and", "or", "in", "to"];

/// Default repetition stop words as a HashSet.
pub static REPETITION_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| REPETITION_STOP_WORDS.iter().copied().collect());

/// Return every word that appears more than once in `text`, in order of
/// first detection.
///
/// Words are the punctuation-stripped tokens of
/// [`crate::segment::word::words`]; members of the stop-word set
/// {the, a, an, and, or, in, to} are skipped, and a word is reported at
/// most once no matter how often it recurs. Comparisons are
/// case-sensitive: "Supermarket" and "supermarket" count as different
/// words.
pub fn word_repetitions(text: &str) -> Vec<String> {
    let list = words(text);
    let mut repetitions: Vec<String> = Vec::new();

    for (x, word) in list.iter().enumerate() {
        if REPETITION_STOP_WORDS_SET.contains(word.as_str()) {
            continue;
        }
        if repetitions.iter().any(|seen| seen == word) {
            continue;
        }
        if list[x + 1..].iter().any(|later| later == word) {
            repetitions.push(word.clone());
        }
    }
    repetitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repetitions_in_order_of_first_detection() {
        let text = "He walked out of the supermarket with a cart; \
                    it was the supermarket with a sign out front.";
        assert_eq!(word_repetitions(text), vec!["out", "supermarket", "with"]);
    }

    #[test]
    fn test_stop_words_excluded() {
        let reps = word_repetitions("the cat and the dog and the bird");
        assert_eq!(reps, Vec::<String>::new());
    }

    #[test]
    fn test_word_reported_once() {
        assert_eq!(word_repetitions("go go go go"), vec!["go"]);
    }

    #[test]
    fn test_comparisons_are_case_sensitive() {
        assert_eq!(
            word_repetitions("Echo echo Echo"),
            vec!["Echo"]
        );
    }

    #[test]
    fn test_punctuation_does_not_hide_repeats() {
        assert_eq!(word_repetitions("stop! He said stop."), vec!["stop"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(word_repetitions(""), Vec::<String>::new());
    }
}
