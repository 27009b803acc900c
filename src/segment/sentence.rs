//! Sentence segmentation (two policies).
//!
//! The whitespace policy splits where typists break sentences: two
//! consecutive spaces, a newline, or a tab. The punctuation policy closes a
//! sentence at `.`, `?`, `!`, or a newline, gluing runs like `...`, `???`,
//! and `?!` to the sentence they terminate.
//!
//! Neither policy understands abbreviations: under the punctuation policy
//! "John J. Doe" splits into "John J." and "Doe". This is an accepted
//! limitation.
//!
//! # Examples
//!
//! ```
//! use vellum::segment::sentence::{sentences, sentences_by_punctuation};
//!
//! assert_eq!(
//!     sentences("Hello there.  She left.\nGoodbye."),
//!     vec!["Hello there.", "She left.", "Goodbye."]
//! );
//!
//! assert_eq!(
//!     sentences_by_punctuation("Wait... really? Yes!"),
//!     vec!["Wait...", "really?", "Yes!"]
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::Segmenter;
use crate::error::Result;

/// Delimiter pattern for the whitespace policy: two consecutive spaces, a
/// newline, or a tab. A single space never splits.
static SENTENCE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("  |\n|\t").expect("sentence delimiter pattern is valid"));

/// Sentence terminators for the punctuation policy.
const SENTENCE_TERMINATORS: &[char] = &['.', '?', '!', '\n'];

/// A segmenter that splits sentences at whitespace breaks.
///
/// Splits on two consecutive spaces, a newline, or a tab; drops segments
/// that are entirely whitespace and trims the rest.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceSentenceSegmenter;

impl WhitespaceSentenceSegmenter {
    /// Create a new whitespace sentence segmenter.
    pub fn new() -> Self {
        WhitespaceSentenceSegmenter
    }

    /// Split `text` into sentences. Infallible; the trait method wraps this.
    pub fn split(&self, text: &str) -> Vec<String> {
        SENTENCE_DELIMITER
            .split(text)
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| segment.trim().to_string())
            .collect()
    }
}

impl Segmenter for WhitespaceSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "whitespace_sentence"
    }
}

/// A segmenter that closes sentences at terminating punctuation.
///
/// Scans character by character and closes a sentence at `.`, `?`, `!`, or
/// a newline. When the terminator sits at most one character past the
/// current sentence start - the `...` / `???` / `?!` case - the run is
/// appended to the previous completed sentence instead of producing an
/// empty one. Trailing text after the last terminator becomes a final
/// sentence.
#[derive(Clone, Debug, Default)]
pub struct PunctuationSentenceSegmenter;

impl PunctuationSentenceSegmenter {
    /// Create a new punctuation sentence segmenter.
    pub fn new() -> Self {
        PunctuationSentenceSegmenter
    }

    /// Split `text` into sentences. Infallible; the trait method wraps this.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences: Vec<String> = Vec::new();
        let mut start = 0;

        for x in 0..chars.len() {
            if !SENTENCE_TERMINATORS.contains(&chars[x]) {
                continue;
            }
            let run: String = chars[start..=x].iter().collect();
            if x - start <= 1 {
                // Consecutive punctuation belongs to the sentence it ends.
                match sentences.last_mut() {
                    Some(last) => last.push_str(&run),
                    None => sentences.push(run.trim().to_string()),
                }
            } else {
                sentences.push(run.trim().to_string());
            }
            start = x + 1;
        }

        if start < chars.len() {
            let tail: String = chars[start..].iter().collect();
            sentences.push(tail.trim().to_string());
        }
        sentences
    }
}

impl Segmenter for PunctuationSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "punctuation_sentence"
    }
}

/// Split `text` into sentences at whitespace breaks (two consecutive
/// spaces, a newline, or a tab).
pub fn sentences(text: &str) -> Vec<String> {
    WhitespaceSentenceSegmenter::new().split(text)
}

/// Split `text` into sentences at terminating punctuation (`.`, `?`, `!`,
/// or a newline).
pub fn sentences_by_punctuation(text: &str) -> Vec<String> {
    PunctuationSentenceSegmenter::new().split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_policy() {
        assert_eq!(
            sentences("Hello there.  She left.\nGoodbye."),
            vec!["Hello there.", "She left.", "Goodbye."]
        );
    }

    #[test]
    fn test_single_space_does_not_split() {
        assert_eq!(sentences("one two three"), vec!["one two three"]);
    }

    #[test]
    fn test_whitespace_only_segments_dropped() {
        assert_eq!(sentences("a.  \t \n  b."), vec!["a.", "b."]);
    }

    #[test]
    fn test_punctuation_policy() {
        assert_eq!(
            sentences_by_punctuation("Wait... really? Yes!"),
            vec!["Wait...", "really?", "Yes!"]
        );
    }

    #[test]
    fn test_punctuation_interrobang() {
        assert_eq!(
            sentences_by_punctuation("You did what?! Unbelievable."),
            vec!["You did what?!", "Unbelievable."]
        );
    }

    #[test]
    fn test_punctuation_trailing_text() {
        assert_eq!(
            sentences_by_punctuation("Done. And then"),
            vec!["Done.", "And then"]
        );
    }

    #[test]
    fn test_punctuation_abbreviation_limitation() {
        // Initials end sentences under this policy.
        assert_eq!(
            sentences_by_punctuation("John J. Doe left."),
            vec!["John J.", "Doe left."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(sentences(""), Vec::<String>::new());
        assert_eq!(sentences_by_punctuation(""), Vec::<String>::new());
    }

    #[test]
    fn test_segmenter_names() {
        assert_eq!(WhitespaceSentenceSegmenter::new().name(), "whitespace_sentence");
        assert_eq!(
            PunctuationSentenceSegmenter::new().name(),
            "punctuation_sentence"
        );
    }
}
