//! # Vellum
//!
//! A fast, featureful prose analysis library for Rust, built for working on
//! manuscripts: novels, serials, and other long-form writing.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Chapter, sentence, word, and dialogue segmentation
//! - Equal-part and fixed-size text splitting
//! - Derived statistics: counts, averages, reading time, word frequency,
//!   repetition detection
//! - Stateless and thread-safe by construction
//!
//! ## Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! let text = "\"Oh, hi,\" he said.  He left.";
//! assert_eq!(sentences(text), vec!["\"Oh, hi,\" he said.", "He left."]);
//! assert_eq!(quotes(text), vec!["Oh, hi"]);
//! assert_eq!(word_count(text), 6);
//! ```

pub mod error;
pub mod segment;
pub mod stats;

pub mod prelude {
    //! Convenient re-exports of the most commonly used items.

    pub use crate::error::{Result, VellumError};
    pub use crate::segment::{
        Segmenter, chapters, quotes, sentences, sentences_by_punctuation, split_by_size,
        split_into_parts, words,
    };
    pub use crate::stats::{
        TextReport, avg_sentence_word_count, avg_word_length, letter_count,
        percent_char_in_quotes, reading_time, reading_time_minutes, word_count,
        word_count_change, word_counts, word_frequency, word_repetitions,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
