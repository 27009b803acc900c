//! Chapter segmentation.
//!
//! Splits a manuscript into chapters by locating headings of the form
//! "chapter 1", "chapter 2", and so on. Matching is case-insensitive and
//! numeral-only: "Chapter XIV" and "Chapter Fourteen" are not recognized.
//!
//! # Examples
//!
//! ```
//! use vellum::segment::Segmenter;
//! use vellum::segment::chapter::ChapterSegmenter;
//!
//! let text = "Intro\nChapter 1\nBody1\nChapter 2\nBody2";
//!
//! let segmenter = ChapterSegmenter::new().include_title(true);
//! assert_eq!(
//!     segmenter.segment(text).unwrap(),
//!     vec!["Intro", "Body1", "Body2"]
//! );
//!
//! // The leading title text is discarded by default.
//! let segmenter = ChapterSegmenter::new();
//! assert_eq!(segmenter.segment(text).unwrap(), vec!["Body1", "Body2"]);
//! ```

use super::Segmenter;
use crate::error::Result;

/// Default number of chapter headings to look for.
pub const DEFAULT_MAX_CHAPTERS: usize = 100;

/// A segmenter that splits text at "chapter N" headings.
///
/// Headings are consumed in strictly increasing order starting at
/// "chapter 1", splitting the unconsumed remainder at the first
/// case-insensitive occurrence of each heading. The scan stops at the first
/// number that cannot be found, and whatever remains becomes the final
/// chapter. Matches are literal substring matches, not word-boundary-aware:
/// the search for "chapter 11" will also land inside "chapter 111".
///
/// Each heading's text is consumed as the delimiter; everything before it,
/// trimmed of surrounding whitespace, becomes the preceding chapter. When
/// `include_title` is false (the default), the text before "chapter 1" is
/// discarded - so a text with no recognizable headings produces no chapters
/// at all unless `include_title` is set.
#[derive(Clone, Debug)]
pub struct ChapterSegmenter {
    /// Number of chapter headings to look for
    num_chapters: usize,
    /// Whether to keep text found before the first heading
    include_title: bool,
}

impl ChapterSegmenter {
    /// Create a new chapter segmenter with the default settings.
    pub fn new() -> Self {
        ChapterSegmenter {
            num_chapters: DEFAULT_MAX_CHAPTERS,
            include_title: false,
        }
    }

    /// Set how many chapter headings to look for.
    ///
    /// The scan breaks on its own at the first heading that cannot be
    /// found, so this is an upper bound rather than an expected count.
    pub fn num_chapters(mut self, num_chapters: usize) -> Self {
        self.num_chapters = num_chapters;
        self
    }

    /// Set whether text found before the first heading is kept as the
    /// first segment.
    pub fn include_title(mut self, include_title: bool) -> Self {
        self.include_title = include_title;
        self
    }
}

impl Default for ChapterSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterSegmenter {
    /// Split `text` into chapters. Infallible; the trait method wraps this.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut remaining = text;

        for i in 1..=self.num_chapters {
            let heading = format!("chapter {i}");
            match find_ignore_ascii_case(remaining, &heading) {
                Some(pos) => {
                    segments.push(remaining[..pos].trim().to_string());
                    remaining = &remaining[pos + heading.len()..];
                }
                None => break,
            }
        }
        segments.push(remaining.trim().to_string());

        if !self.include_title {
            segments.remove(0);
        }
        segments
    }
}

impl Segmenter for ChapterSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "chapter"
    }
}

/// Split `text` into chapters using the default settings (up to
/// [`DEFAULT_MAX_CHAPTERS`] headings, leading title text discarded).
pub fn chapters(text: &str) -> Vec<String> {
    ChapterSegmenter::new().split(text)
}

/// Find the byte offset of the first ASCII-case-insensitive occurrence of
/// `needle` in `haystack`.
///
/// The needle must be plain ASCII: ASCII bytes never occur inside a
/// multi-byte UTF-8 sequence, so any match falls on character boundaries.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapters_with_title() {
        let text = "Intro\nChapter 1\nBody1\nChapter 2\nBody2";
        let segmenter = ChapterSegmenter::new().include_title(true);
        assert_eq!(segmenter.split(text), vec!["Intro", "Body1", "Body2"]);
    }

    #[test]
    fn test_chapters_without_title() {
        let text = "Intro\nChapter 1\nBody1\nChapter 2\nBody2";
        assert_eq!(chapters(text), vec!["Body1", "Body2"]);
    }

    #[test]
    fn test_case_insensitive_headings() {
        let text = "CHAPTER 1 one cHaPtEr 2 two";
        assert_eq!(chapters(text), vec!["one", "two"]);
    }

    #[test]
    fn test_no_headings_found() {
        let text = "Just some prose with no headings at all.";
        assert_eq!(chapters(text), Vec::<String>::new());
        assert_eq!(
            ChapterSegmenter::new().include_title(true).split(text),
            vec![text]
        );
    }

    #[test]
    fn test_headings_must_increase() {
        // A "chapter 2" heading before "chapter 1" is swallowed by the
        // title text; only the in-order headings split.
        let text = "x chapter 2 y chapter 1 z";
        let segmenter = ChapterSegmenter::new().include_title(true);
        assert_eq!(segmenter.split(text), vec!["x chapter 2 y", "z"]);
    }

    #[test]
    fn test_substring_heading_match() {
        // The search for "chapter 1" lands inside "chapter 11".
        let text = "title chapter 11 tail";
        assert_eq!(
            ChapterSegmenter::new().include_title(true).split(text),
            vec!["title", "1 tail"]
        );
    }

    #[test]
    fn test_num_chapters_limit() {
        let text = "a chapter 1 b chapter 2 c";
        let segmenter = ChapterSegmenter::new().num_chapters(1).include_title(true);
        assert_eq!(segmenter.split(text), vec!["a", "b chapter 2 c"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(chapters(""), Vec::<String>::new());
    }

    #[test]
    fn test_segmenter_name() {
        assert_eq!(ChapterSegmenter::new().name(), "chapter");
    }
}
