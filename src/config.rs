use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionaries;
use crate::error::{ConfigError, DictionaryError};
use crate::interpreter::{Grammar, DEFAULT_TO_LINE_TOKEN};

pub const DEFAULT_CONFIG_PATH: &str = "silly-nav.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding like-words.json / line-jumps.json / number.json.
    /// Unset means the built-in tables.
    #[serde(default)]
    pub dictionaries: Option<PathBuf>,

    /// Single word the recognizer produces for "to line"
    #[serde(default = "default_to_line_token")]
    pub to_line_token: String,

    /// Accept number words that map to 0 (e.g. "zero") as a line number
    #[serde(default)]
    pub accept_spoken_zero: bool,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionaries: None,
            to_line_token: default_to_line_token(),
            accept_spoken_zero: false,
            log_filter: default_log_filter(),
        }
    }
}

fn default_to_line_token() -> String {
    DEFAULT_TO_LINE_TOKEN.into()
}

fn default_log_filter() -> String {
    "warn".into()
}

impl Config {
    /// Load from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Relative dictionary paths are relative to the config file
        if let Some(base) = path.parent() {
            config.dictionaries = config
                .dictionaries
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }
        Ok(config)
    }

    pub fn load_dictionaries(&self) -> Result<Dictionaries, DictionaryError> {
        match &self.dictionaries {
            Some(dir) => Dictionaries::load_dir(dir),
            None => Ok(Dictionaries::builtin()),
        }
    }

    pub fn grammar(&self, dictionaries: Dictionaries) -> Grammar {
        Grammar::new(dictionaries)
            .with_to_line_token(&self.to_line_token)
            .with_spoken_zero(self.accept_spoken_zero)
    }
}
