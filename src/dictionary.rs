//! Read-only lookup tables driving the grammar
//!
//! Three JSON documents back the interpreter:
//! - `like-words.json`: command word -> alternative spellings
//! - `line-jumps.json`: bookmark name -> 1-based line
//! - `number.json`: number word -> value
//!
//! Built-in copies are compiled into the binary. A directory of overrides can
//! replace any of them at startup; nothing is mutated afterwards.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::DictionaryError;
use crate::fuzzy::{self, SoundsLikeTable};
use crate::number::{self, NumberTable};

/// Bookmark name -> 1-based target line.
///
/// Values must be non-negative JSON integers; anything else fails the load.
/// Lines past either end of the document are clamped when jumped to.
pub type BookmarkTable = HashMap<String, usize>;

pub const LIKE_WORDS: &str = "like-words";
pub const LINE_JUMPS: &str = "line-jumps";
pub const NUMBERS: &str = "number";

const BUILTIN_LIKE_WORDS: &str = include_str!("../dictionaries/like-words.json");
const BUILTIN_LINE_JUMPS: &str = include_str!("../dictionaries/line-jumps.json");
const BUILTIN_NUMBERS: &str = include_str!("../dictionaries/number.json");

#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    sounds_like: SoundsLikeTable,
    bookmarks: BookmarkTable,
    numbers: NumberTable,
}

impl Dictionaries {
    /// Build from already-populated tables. Keys are lowercased.
    pub fn new(sounds_like: SoundsLikeTable, bookmarks: BookmarkTable, numbers: NumberTable) -> Self {
        let sounds_like = sounds_like
            .into_iter()
            .map(|(word, alts)| {
                let alts = alts.into_iter().map(|a| a.to_lowercase()).collect();
                (word.to_lowercase(), alts)
            })
            .collect();

        Self {
            sounds_like,
            bookmarks: lowercase_keys(bookmarks),
            numbers: lowercase_keys(numbers),
        }
    }

    /// Tables shipped with the crate.
    pub fn builtin() -> Self {
        // Embedded JSON is checked by test_builtin_tables_parse
        Self::from_json(BUILTIN_LIKE_WORDS, BUILTIN_LINE_JUMPS, BUILTIN_NUMBERS).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Built-in dictionaries are invalid, using empty tables");
            Self::default()
        })
    }

    /// Parse the three tables from JSON documents.
    pub fn from_json(like_words: &str, line_jumps: &str, numbers: &str) -> Result<Self, DictionaryError> {
        Ok(Self::new(
            parse(LIKE_WORDS, like_words)?,
            parse(LINE_JUMPS, line_jumps)?,
            parse(NUMBERS, numbers)?,
        ))
    }

    /// Load `<name>.json` for each table from `dir`.
    ///
    /// A missing file falls back to the built-in table of that name.
    pub fn load_dir(dir: &Path) -> Result<Self, DictionaryError> {
        let like_words = read_or_builtin(dir, LIKE_WORDS, BUILTIN_LIKE_WORDS)?;
        let line_jumps = read_or_builtin(dir, LINE_JUMPS, BUILTIN_LINE_JUMPS)?;
        let numbers = read_or_builtin(dir, NUMBERS, BUILTIN_NUMBERS)?;

        let dictionaries = Self::from_json(&like_words, &line_jumps, &numbers)?;
        tracing::info!(
            dir = %dir.display(),
            like_words = dictionaries.sounds_like.len(),
            bookmarks = dictionaries.bookmarks.len(),
            numbers = dictionaries.numbers.len(),
            "Loaded dictionaries"
        );
        Ok(dictionaries)
    }

    pub fn sounds_like(&self, expected: &str, actual: &str) -> bool {
        fuzzy::sounds_like(&self.sounds_like, expected, actual)
    }

    pub fn alternatives(&self, word: &str) -> &[String] {
        self.sounds_like.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bookmark(&self, word: &str) -> Option<usize> {
        self.bookmarks.get(word).copied()
    }

    pub fn number(&self, word: &str) -> Option<usize> {
        number::normalize_number(&self.numbers, word)
    }

    /// Bookmark names, sorted.
    pub fn bookmark_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bookmarks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn lowercase_keys(table: HashMap<String, usize>) -> HashMap<String, usize> {
    table.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect()
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, DictionaryError> {
    serde_json::from_str(json).map_err(|source| DictionaryError::Parse { name, source })
}

fn read_or_builtin(dir: &Path, name: &'static str, builtin: &str) -> Result<String, DictionaryError> {
    let path = dir.join(format!("{name}.json"));
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Dictionary not found, using built-in");
            Ok(builtin.to_string())
        }
        Err(source) => Err(DictionaryError::ReadFile { name, path, source }),
    }
}
