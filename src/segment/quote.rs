//! Quoted dialogue extraction.
//!
//! Pulls out every span of text enclosed in double quotes. Straight and
//! curly quote marks are treated as equivalent toggles: prose pasted from
//! word processors mixes them freely, so the curly open/close asymmetry is
//! deliberately not used to disambiguate.
//!
//! # Examples
//!
//! ```
//! use vellum::segment::quote::quotes;
//!
//! // A trailing comma inside the quote is dropped.
//! assert_eq!(quotes("He said, \"hi there,\" and left."), vec!["hi there"]);
//! ```

use super::Segmenter;
use crate::error::Result;

/// Quote mark characters recognized as span toggles.
const QUOTE_MARKS: &[char] = &['"', '“', '”'];

/// Check whether a character toggles quoted-dialogue state.
pub fn is_quote_mark(c: char) -> bool {
    QUOTE_MARKS.contains(&c)
}

/// A segmenter that extracts quoted spans from text.
///
/// Runs a two-state toggle scan over the characters: a quote mark flips
/// between outside and inside, characters seen while inside accumulate into
/// the current span, and the closing mark emits the span (minus a single
/// trailing comma, if present). A span still open at the end of the text is
/// discarded.
///
/// Quote spans are extracted independently of sentence and word boundaries,
/// so they may overlap segments produced by the other segmenters.
#[derive(Clone, Debug, Default)]
pub struct QuoteSegmenter;

impl QuoteSegmenter {
    /// Create a new quote segmenter.
    pub fn new() -> Self {
        QuoteSegmenter
    }

    /// Extract quoted spans from `text`. Infallible; the trait method
    /// wraps this.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut quotes = Vec::new();
        let mut buffer = String::new();
        let mut inside = false;

        for c in text.chars() {
            if is_quote_mark(c) {
                if inside {
                    if buffer.ends_with(',') {
                        buffer.pop();
                    }
                    quotes.push(std::mem::take(&mut buffer));
                }
                inside = !inside;
                continue;
            }
            if inside {
                buffer.push(c);
            }
        }
        // An unterminated trailing span is dropped with the buffer.
        quotes
    }
}

impl Segmenter for QuoteSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "quote"
    }
}

/// Extract every quoted span from `text`.
pub fn quotes(text: &str) -> Vec<String> {
    QuoteSegmenter::new().split(text)
}
