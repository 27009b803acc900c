//! Word frequency tables.

use ahash::AHashMap;

use crate::segment::word::words;

/// Build a frequency table over the punctuation-stripped words of `text`.
///
/// Keys are lowercased unless `use_cases` is true, in which case tokens are
/// counted case-sensitively. Iteration order of the table is unspecified.
///
/// # Examples
///
/// ```
/// use vellum::stats::frequency::word_frequency;
///
/// let table = word_frequency("The cat saw the dog.", false);
/// assert_eq!(table.get("the"), Some(&2));
/// assert_eq!(table.get("dog"), Some(&1));
/// ```
pub fn word_frequency(text: &str, use_cases: bool) -> AHashMap<String, usize> {
    let mut table = AHashMap::new();
    for word in words(text) {
        let key = if use_cases { word } else { word.to_lowercase() };
        *table.entry(key).or_insert(0) += 1;
    }
    table
}
