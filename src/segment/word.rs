//! Word segmentation.

use super::Segmenter;
use crate::error::Result;

/// Characters removed from every token, wherever they occur in it.
pub const PUNCTUATION_STRIP_CHARS: &[char] = &[
    '.', '?', '!', ',', ';', '"', '(', ')', ':', '/', '“', '”',
];

/// A segmenter that splits text into punctuation-stripped words.
///
/// Tokens are split on a single space, newline, or tab; the characters in
/// [`PUNCTUATION_STRIP_CHARS`] are then removed from anywhere inside each
/// token, and tokens left empty or whitespace-only are dropped.
///
/// Note the asymmetry with [`crate::stats::word_count`], which counts raw
/// whitespace tokens without punctuation stripping: a token made entirely
/// of punctuation is counted there but produces no word here.
#[derive(Clone, Debug, Default)]
pub struct WordSegmenter;

impl WordSegmenter {
    /// Create a new word segmenter.
    pub fn new() -> Self {
        WordSegmenter
    }

    /// Split `text` into words. Infallible; the trait method wraps this.
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split([' ', '\n', '\t'])
            .map(|token| {
                token
                    .chars()
                    .filter(|c| !PUNCTUATION_STRIP_CHARS.contains(c))
                    .collect::<String>()
            })
            .filter(|token| !token.trim().is_empty())
            .collect()
    }
}

impl Segmenter for WordSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Split `text` into punctuation-stripped words.
pub fn words(text: &str) -> Vec<String> {
    WordSegmenter::new().split(text)
}
