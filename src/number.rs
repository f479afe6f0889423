//! Spoken number normalization
//!
//! Turns "12" or "twelve" into a line index.

use std::collections::HashMap;

/// Spoken number word -> value. Values are non-negative integers.
pub type NumberTable = HashMap<String, usize>;

/// True for a non-empty run of ASCII digits.
pub fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digit string, saturating when it overflows.
///
/// Caller guarantees `is_digits(word)`.
pub fn parse_digits(word: &str) -> usize {
    word.parse().unwrap_or(usize::MAX)
}

/// Convert a spoken token to a number.
///
/// Digit strings are parsed directly ("007" -> 7, "0" -> 0). Anything else is
/// looked up in the number-word table. `None` means the word is not a number;
/// `Some(0)` is a real zero and callers decide what it means to them.
pub fn normalize_number(table: &NumberTable, word: &str) -> Option<usize> {
    if is_digits(word) {
        return Some(parse_digits(word));
    }
    table.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NumberTable {
        [("zero", 0), ("five", 5), ("twelve", 12)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_digit_strings() {
        let table = table();
        assert_eq!(normalize_number(&table, "12"), Some(12));
        assert_eq!(normalize_number(&table, "007"), Some(7));
        assert_eq!(normalize_number(&table, "0"), Some(0));
    }

    #[test]
    fn test_number_words() {
        let table = table();
        assert_eq!(normalize_number(&table, "twelve"), Some(12));
        assert_eq!(normalize_number(&table, "five"), Some(5));
        assert_eq!(normalize_number(&table, "zero"), Some(0));
    }

    #[test]
    fn test_not_a_number() {
        let table = table();
        assert_eq!(normalize_number(&table, "banana"), None);
        assert_eq!(normalize_number(&table, ""), None);
        assert_eq!(normalize_number(&table, "12a"), None);
        assert_eq!(normalize_number(&table, "-3"), None);
    }

    #[test]
    fn test_overflow_saturates() {
        let table = table();
        assert_eq!(
            normalize_number(&table, "99999999999999999999999999"),
            Some(usize::MAX)
        );
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0"));
        assert!(is_digits("0420"));
        assert!(!is_digits(""));
        assert!(!is_digits("4.2"));
        // Non-ASCII digits do not count
        assert!(!is_digits("٣"));
    }
}
