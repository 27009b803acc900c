//! Derived prose statistics for Vellum.
//!
//! Everything here is built on top of the segmentation functions in
//! [`crate::segment`]: counts, averages, reading time, word frequency,
//! repetition detection, and the dialogue ratio. All functions are total
//! over arbitrary text input - empty input yields zeros, never a division
//! by zero - while invalid numeric parameters fail fast with an error.

pub mod counts;
pub mod dialogue;
pub mod frequency;
pub mod reading;
pub mod repetition;
pub mod report;

pub use counts::{
    avg_sentence_word_count, avg_word_length, letter_count, word_count, word_count_change,
    word_counts,
};
pub use dialogue::percent_char_in_quotes;
pub use frequency::word_frequency;
pub use reading::{DEFAULT_READING_WPM, reading_time, reading_time_minutes};
pub use repetition::word_repetitions;
pub use report::TextReport;
