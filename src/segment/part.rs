//! Equal-part segmentation.
//!
//! Splits text into exactly `n` contiguous parts of near-equal character
//! length, in document order. Useful for comparing statistics across the
//! beginning, middle, and end of a manuscript.

use super::Segmenter;
use crate::error::{Result, VellumError};

/// A segmenter that splits text into exactly `num_parts` contiguous parts.
///
/// Parts are measured in characters, not bytes. With `len = q * n + r`,
/// the first `r` parts have `q + 1` characters and the remaining `n - r`
/// parts have `q`. Concatenating the parts in order reconstructs the input
/// exactly; when `num_parts` exceeds the text length, the trailing parts
/// are empty.
///
/// # Examples
///
/// ```
/// use vellum::segment::part::PartSegmenter;
///
/// let segmenter = PartSegmenter::new(3).unwrap();
/// assert_eq!(segmenter.split("abcdefgh"), vec!["abc", "def", "gh"]);
/// ```
#[derive(Clone, Debug)]
pub struct PartSegmenter {
    /// Number of parts to produce
    num_parts: usize,
}

impl PartSegmenter {
    /// Create a new part segmenter.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_parts` is 0.
    pub fn new(num_parts: usize) -> Result<Self> {
        if num_parts == 0 {
            return Err(VellumError::segment("num_parts must be at least 1"));
        }
        Ok(Self { num_parts })
    }

    /// Get the number of parts this segmenter produces.
    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    /// Split `text` into exactly `num_parts` parts.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let quotient = chars.len() / self.num_parts;
        let remainder = chars.len() % self.num_parts;

        let mut parts = Vec::with_capacity(self.num_parts);
        let mut start = 0;
        for i in 0..self.num_parts {
            let len = if i < remainder { quotient + 1 } else { quotient };
            parts.push(chars[start..start + len].iter().collect());
            start += len;
        }
        parts
    }
}

impl Segmenter for PartSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "part"
    }
}

/// Split `text` into exactly `num_parts` contiguous near-equal parts.
///
/// # Errors
///
/// Returns an error if `num_parts` is 0.
pub fn split_into_parts(text: &str, num_parts: usize) -> Result<Vec<String>> {
    Ok(PartSegmenter::new(num_parts)?.split(text))
}
