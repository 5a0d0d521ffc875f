//! Runtime configuration loaded from TOML.
//!
//! ```toml
//! [db]
//! debug = true
//! path_separator = "/"
//! ```

use crate::types::{DEFAULT_SEPARATOR, TreePath, TreePathError};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),

    #[error("path_separator must be a single character, got '{0}'")]
    InvalidSeparator(String),
}

///
/// DbConfig
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DbConfig {
    /// Log every executed load at `debug` level instead of `trace`.
    pub debug: bool,
    /// Separator for textual tree paths.
    pub path_separator: char,
}

impl DbConfig {
    /// Parse the `[db]` table of a TOML document; absent keys keep defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Self::default();

        if let Some(debug) = file.db.debug {
            config.debug = debug;
        }
        if let Some(separator) = file.db.path_separator {
            let mut chars = separator.chars();
            config.path_separator = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::InvalidSeparator(separator)),
            };
        }

        Ok(config)
    }

    /// Parse a textual path with the configured separator.
    pub fn parse_path(&self, text: &str) -> Result<TreePath, TreePathError> {
        TreePath::parse_with(text, self.path_separator)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            debug: false,
            path_separator: DEFAULT_SEPARATOR,
        }
    }
}

// on-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    db: DbSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DbSection {
    debug: Option<bool>,
    path_separator: Option<String>,
}

///
/// TESTS
///
