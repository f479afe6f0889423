//! Fuzzy word matching against the sounds-like table
//!
//! Speech recognition regularly hears "too" for "to" or "lion" for "line".
//! Rather than an edit-distance guess, each command word lists the spellings
//! the recognizer is known to produce for it.

use std::collections::HashMap;

/// Canonical command word -> spellings the recognizer may emit for it.
pub type SoundsLikeTable = HashMap<String, Vec<String>>;

/// True when `actual` is `expected` or one of its listed alternatives.
///
/// Both words must already be lowercase; no case folding happens here.
pub fn sounds_like(table: &SoundsLikeTable, expected: &str, actual: &str) -> bool {
    if expected == actual {
        return true;
    }
    match table.get(expected) {
        Some(alternatives) => alternatives.iter().any(|alt| alt == actual),
        None => false,
    }
}

/// Split recognized text into lowercase word tokens.
///
/// Recognizers tend to attach punctuation ("twelve."), so trailing ASCII
/// punctuation is stripped from every word. Leading punctuation stays: "-3"
/// is not a line number.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_end_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}
