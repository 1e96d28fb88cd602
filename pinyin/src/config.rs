use serde::{Deserialize, Serialize};

use hanyu_core::Result;

/// Pinyin-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic matching options from `hanyu_core::Config` (flattened via serde)
/// - Switches for the optional parts of a syllable: trailing tone numbers,
///   the erhua `r` suffix and the leading interpunct
///
/// The defaults accept everything and reproduce the canonical patterns
/// returned by `patterns::syllable()`, `word()` and `sentence()`.
///
/// # Example
///
/// ```rust
/// use hanyu_pinyin::PinyinConfig;
///
/// let config = PinyinConfig::from_toml_str("tone_numbers = false\ncase_insensitive = false\n").unwrap();
/// assert!(!config.tone_numbers);
/// assert!(!config.base().case_insensitive);
/// assert!(config.erhua);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PinyinConfig {
    /// Base matching options (case folding, normalization, limits)
    #[serde(flatten)]
    pub base: hanyu_core::Config,

    /// Accept tone numbers: `[0-5]` after a syllable, `[0-9]*` after a word part
    pub tone_numbers: bool,

    /// Accept the erhua suffix (`nar`, `wanr`)
    pub erhua: bool,

    /// Accept a leading interpunct marking a loanword syllable boundary
    pub interpunct: bool,
}

impl Default for PinyinConfig {
    fn default() -> Self {
        Self {
            base: hanyu_core::Config::default(),
            tone_numbers: true,
            erhua: true,
            interpunct: true,
        }
    }
}

impl PinyinConfig {
    /// Get a reference to the base config
    pub fn base(&self) -> &hanyu_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut hanyu_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
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
    fn defaults_accept_everything() {
        let cfg = PinyinConfig::default();
        assert!(cfg.tone_numbers && cfg.erhua && cfg.interpunct);
        assert_eq!(cfg.base(), &hanyu_core::Config::default());
    }

    #[test]
    fn toml_round_trip_keeps_flattened_fields() {
        let mut cfg = PinyinConfig::default();
        cfg.erhua = false;
        cfg.base_mut().backtrack_limit = 42;

        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("backtrack_limit = 42"));
        assert_eq!(PinyinConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PinyinConfig::from_toml_str("").unwrap(), PinyinConfig::default());
    }
}
