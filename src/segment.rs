//! Prose segmentation for Vellum.
//!
//! This module splits raw text into ordered lists of segments: chapters,
//! sentences, words, quoted dialogue, equal-size parts, and fixed-size
//! chunks. Each policy is a small configured segmenter type implementing
//! the [`Segmenter`] trait, with a free function providing the common
//! default-configuration entry point.
//!
//! Segments are returned in document order. Chapter, sentence, word, part,
//! and chunk segmentation is non-overlapping and contiguous; quote
//! extraction runs independently of the other boundaries.

use crate::error::Result;

/// Trait for segmenters that split text into an ordered list of segments.
pub trait Segmenter: Send + Sync {
    /// Split the given text into segments, preserving document order.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual segmenter modules
pub mod chapter;
pub mod chunk;
pub mod part;
pub mod quote;
pub mod sentence;
pub mod word;

// Re-export all segmenters for convenient access
pub use chapter::{ChapterSegmenter, chapters};
pub use chunk::{ChunkSegmenter, split_by_size};
pub use part::{PartSegmenter, split_into_parts};
pub use quote::{QuoteSegmenter, is_quote_mark, quotes};
pub use sentence::{
    PunctuationSentenceSegmenter, WhitespaceSentenceSegmenter, sentences,
    sentences_by_punctuation,
};
pub use word::{WordSegmenter, words};
