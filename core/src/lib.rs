//! hanyu-core
//!
//! Language-agnostic pattern plumbing shared by the romanization crates
//! (currently `hanyu-pinyin`).
//!
//! Public API:
//! - `Config` - matching options (case folding, normalization, limits)
//! - `Matcher` / `Span` - a compiled pattern and its match results
//! - `render` - deterministic rendering of classes and alternations
//! - `Error` / `Result` - error type for compilation, matching and config I/O
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod matcher;
pub use matcher::{normalize_nfc, Matcher, Span};

pub mod render;

/// Generic configuration for compiled matchers.
///
/// Only language-agnostic options live here. Options that change how a
/// language's patterns are rendered belong in that crate's config (see
/// `PinyinConfig`), which flattens this struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Match letters regardless of case (proper nouns, sentence starts).
    pub case_insensitive: bool,

    /// Normalize input to NFC before matching so that a base letter followed
    /// by a combining tone mark matches the precomposed form.
    pub normalize: bool,

    /// Upper bound on backtracking steps for a single search.
    /// Exceeding it is reported as `Error::Match`.
    pub backtrack_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            normalize: true,
            backtrack_limit: 1_000_000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(cfg.case_insensitive);
        assert!(cfg.normalize);
        assert_eq!(cfg.backtrack_limit, 1_000_000);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg = Config::from_toml_str("case_insensitive = false\n").unwrap();
        assert!(!cfg.case_insensitive);
        assert!(cfg.normalize);
    }

    #[test]
    fn toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanyu.toml");

        let cfg = Config {
            backtrack_limit: 5000,
            ..Config::default()
        };
        cfg.save_toml(&path).unwrap();
        assert_eq!(Config::load_toml(&path).unwrap(), cfg);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = Config::from_toml_str("normalize = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load_toml("/nonexistent/hanyu.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
