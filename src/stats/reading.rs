//! Reading time estimates.

use crate::error::{Result, VellumError};
use crate::stats::counts::word_count;

/// Default reading speed in words per minute.
pub const DEFAULT_READING_WPM: u32 = 200;

/// Estimated reading time of `text` in minutes at `wpm` words per minute.
///
/// # Errors
///
/// Returns an error if `wpm` is 0.
pub fn reading_time_minutes(text: &str, wpm: u32) -> Result<f64> {
    if wpm == 0 {
        return Err(VellumError::stats("wpm must be at least 1"));
    }
    Ok(word_count(text) as f64 / wpm as f64)
}

/// Estimated reading time of `text` in seconds at `wpm` words per minute.
///
/// # Errors
///
/// Returns an error if `wpm` is 0.
pub fn reading_time(text: &str, wpm: u32) -> Result<f64> {
    Ok(reading_time_minutes(text, wpm)? * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time_minutes() {
        let text = "word ".repeat(400);
        assert_eq!(reading_time_minutes(&text, DEFAULT_READING_WPM).unwrap(), 2.0);
    }

    #[test]
    fn test_reading_time_seconds() {
        let text = "word ".repeat(100);
        assert_eq!(reading_time(&text, DEFAULT_READING_WPM).unwrap(), 30.0);
    }

    #[test]
    fn test_empty_text_reads_instantly() {
        assert_eq!(reading_time("", DEFAULT_READING_WPM).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_wpm_is_an_error() {
        assert!(reading_time_minutes("some text", 0).is_err());
        assert!(reading_time("some text", 0).is_err());
    }
}
