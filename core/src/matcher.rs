//! Compiled pattern matching.
//!
//! `Matcher` compiles one pattern source three ways (unanchored search,
//! prefix-anchored and fully anchored) with `fancy_regex`, which supports the
//! lookahead assertions the phonetic patterns depend on.

use std::borrow::Cow;

use fancy_regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, trace};
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::error::{Error, Result};
use crate::Config;

/// A single match: byte offsets into the (normalized) input plus the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Span {
    pub fn new<T: Into<String>>(start: usize, end: usize, text: T) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<fancy_regex::Match<'_>> for Span {
    fn from(m: fancy_regex::Match<'_>) -> Self {
        Span::new(m.start(), m.end(), m.as_str())
    }
}

/// Normalize `text` to NFC, borrowing when it already is.
pub fn normalize_nfc(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// A pattern source compiled for searching and validation.
#[derive(Debug)]
pub struct Matcher {
    name: String,
    source: String,
    search: Regex,
    prefix: Regex,
    exact: Regex,
    normalize: bool,
}

impl Matcher {
    /// Compile `source` under `config`. `name` is used in errors and logs.
    pub fn new(name: &str, source: &str, config: &Config) -> Result<Self> {
        let flags = if config.case_insensitive { "(?i)" } else { "" };
        let build = |pattern: String| -> Result<Regex> {
            RegexBuilder::new(&pattern)
                .backtrack_limit(config.backtrack_limit)
                .build()
                .map_err(|e| Error::compile(name, e))
        };

        let search = build(format!("{}(?:{})", flags, source))?;
        let prefix = build(format!("{}^(?:{})", flags, source))?;
        let exact = build(format!("{}^(?:{})$", flags, source))?;

        debug!(
            pattern = name,
            source_len = source.len(),
            case_insensitive = config.case_insensitive,
            "compiled matcher"
        );

        Ok(Self {
            name: name.to_string(),
            source: source.to_string(),
            search,
            prefix,
            exact,
            normalize: config.normalize,
        })
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern source, without flags or anchors.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.normalize {
            normalize_nfc(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Leftmost match anywhere in `text`.
    pub fn find(&self, text: &str) -> Result<Option<Span>> {
        let text = self.prepare(text);
        trace!(pattern = %self.name, len = text.len(), "find");
        Ok(self.search.find(&text)?.map(Span::from))
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all(&self, text: &str) -> Result<Vec<Span>> {
        let text = self.prepare(text);
        trace!(pattern = %self.name, len = text.len(), "find_all");
        self.search
            .find_iter(&text)
            .map(|m| m.map(Span::from).map_err(Error::from))
            .collect()
    }

    /// Match starting exactly at the beginning of `text`.
    pub fn match_prefix(&self, text: &str) -> Result<Option<Span>> {
        let text = self.prepare(text);
        Ok(self.prefix.find(&text)?.map(Span::from))
    }

    /// True if the pattern matches somewhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        let text = self.prepare(text);
        Ok(self.search.is_match(&text)?)
    }

    /// True if the pattern matches the whole of `text`.
    pub fn is_full_match(&self, text: &str) -> Result<bool> {
        let text = self.prepare(text);
        Ok(self.exact.is_match(&text)?)
    }
}
