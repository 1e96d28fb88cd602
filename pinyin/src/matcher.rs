//! Compiled Pinyin matchers.
//!
//! `PinyinMatcher` compiles the syllable, word and sentence sources for one
//! `PinyinConfig`. A non-match is reported as `None`, `false` or an empty
//! vector; errors only come from compilation or the backtracking limit.
//!
//! Sentences are not searched with the unanchored sentence pattern. A
//! sentence is a run of words and non-stop characters closed by exactly one
//! stop; words start with a letter or interpunct and non-stops never do, and
//! words are atomic, so the run from any position is deterministic. The
//! search walks that run with the word matcher, remembers positions that
//! reached a dead end, and confirms each candidate with the anchored
//! sentence pattern. Search cost stays linear in the text length.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use hanyu_core::{normalize_nfc, Matcher, Result, Span};

use crate::charsets::{CLOSERS, NON_STOPS, STOPS, WHITESPACE};
use crate::config::PinyinConfig;
use crate::patterns::PatternSet;

/// The unit a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Syllable,
    Word,
    Sentence,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Syllable, Unit::Word, Unit::Sentence];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Syllable => "syllable",
            Unit::Word => "word",
            Unit::Sentence => "sentence",
        }
    }
}

static GLOBAL: Lazy<PinyinMatcher> = Lazy::new(|| {
    PinyinMatcher::new(&PinyinConfig::default()).expect("default pinyin patterns compile")
});

/// Syllable, word and sentence matchers compiled from one configuration.
#[derive(Debug)]
pub struct PinyinMatcher {
    syllable: Matcher,
    word: Matcher,
    sentence: Matcher,
    normalize: bool,
}

fn is_stop(c: char) -> bool {
    STOPS.contains(c)
}

/// Single characters a sentence may hold between words.
fn is_filler(c: char) -> bool {
    NON_STOPS.contains(c) || WHITESPACE.contains(c)
}

/// Byte length of the run of closing marks at the start of `text`.
fn closers_len(text: &str) -> usize {
    text.find(|c: char| !CLOSERS.contains(c)).unwrap_or(text.len())
}

impl PinyinMatcher {
    /// Render and compile the patterns for `config`.
    pub fn new(config: &PinyinConfig) -> Result<Self> {
        let set = PatternSet::build(config);
        let base = config.base();
        let matcher = Self {
            syllable: Matcher::new(Unit::Syllable.name(), &set.syllable, base)?,
            word: Matcher::new(Unit::Word.name(), &set.word, base)?,
            sentence: Matcher::new(Unit::Sentence.name(), &set.sentence, base)?,
            normalize: base.normalize,
        };
        debug!(?config, "pinyin matcher ready");
        Ok(matcher)
    }

    /// Shared matcher for the default configuration, compiled on first use.
    pub fn global() -> &'static PinyinMatcher {
        &GLOBAL
    }

    /// The compiled matcher for `unit`.
    ///
    /// The sentence matcher searches the raw pattern; prefer `find` and
    /// `find_all`, which bound sentence searches on long text.
    pub fn matcher(&self, unit: Unit) -> &Matcher {
        match unit {
            Unit::Syllable => &self.syllable,
            Unit::Word => &self.word,
            Unit::Sentence => &self.sentence,
        }
    }

    /// Leftmost `unit` in `text`.
    pub fn find(&self, unit: Unit, text: &str) -> Result<Option<Span>> {
        match unit {
            Unit::Sentence => Ok(self.sentence_spans(text, true)?.into_iter().next()),
            _ => self.matcher(unit).find(text),
        }
    }

    /// Every non-overlapping `unit` in `text`, left to right.
    pub fn find_all(&self, unit: Unit, text: &str) -> Result<Vec<Span>> {
        match unit {
            Unit::Sentence => self.sentence_spans(text, false),
            _ => self.matcher(unit).find_all(text),
        }
    }

    /// True if the whole of `text` is exactly one `unit`.
    pub fn is_valid(&self, unit: Unit, text: &str) -> Result<bool> {
        if unit != Unit::Sentence {
            return self.matcher(unit).is_full_match(text);
        }
        let text = self.prepare(text);
        let mut dead = vec![false; text.len() + 1];
        match self.sentence_end(&text, 0, &mut dead)? {
            Some(end) if end == text.len() => self.sentence.is_full_match(&text),
            _ => Ok(false),
        }
    }

    pub fn syllables(&self, text: &str) -> Result<Vec<Span>> {
        self.find_all(Unit::Syllable, text)
    }

    pub fn words(&self, text: &str) -> Result<Vec<Span>> {
        self.find_all(Unit::Word, text)
    }

    pub fn sentences(&self, text: &str) -> Result<Vec<Span>> {
        self.find_all(Unit::Sentence, text)
    }

    pub fn is_syllable(&self, text: &str) -> Result<bool> {
        self.is_valid(Unit::Syllable, text)
    }

    pub fn is_word(&self, text: &str) -> Result<bool> {
        self.is_valid(Unit::Word, text)
    }

    pub fn is_sentence(&self, text: &str) -> Result<bool> {
        self.is_valid(Unit::Sentence, text)
    }

    /// Split a single word into its syllables.
    ///
    /// Returns `None` when `text` is not exactly one word. Hyphens and
    /// apostrophes are not part of any returned span; tone digits after a
    /// syllable are part of its span (`ni35hao` is `ni35` + `hao`). Offsets
    /// refer to the normalized text, as for every other search.
    ///
    /// ```
    /// use hanyu_pinyin::PinyinMatcher;
    ///
    /// let m = PinyinMatcher::global();
    /// let parts: Vec<String> = m
    ///     .split_word("Tian'anmen")
    ///     .unwrap()
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|s| s.text)
    ///     .collect();
    /// assert_eq!(parts, ["Tian", "an", "men"]);
    /// assert!(m.split_word("ni hao").unwrap().is_none());
    /// ```
    pub fn split_word(&self, text: &str) -> Result<Option<Vec<Span>>> {
        let text = self.prepare(text);
        if !self.word.is_full_match(&text)? {
            return Ok(None);
        }
        let mut spans = self.syllable.find_all(&text)?;
        for i in 0..spans.len() {
            let limit = spans.get(i + 1).map_or(text.len(), |next| next.start);
            let end = spans[i].end;
            let digits = text[end..limit].bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                let span = &mut spans[i];
                span.end += digits;
                span.text = text[span.start..span.end].to_string();
            }
        }
        Ok(Some(spans))
    }

    fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.normalize {
            normalize_nfc(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Leftmost-first sentences of `text`, stopping after the first when
    /// `first_only` is set.
    fn sentence_spans(&self, text: &str, first_only: bool) -> Result<Vec<Span>> {
        let text = self.prepare(text);
        trace!(len = text.len(), "sentence search");
        let mut dead = vec![false; text.len() + 1];
        let mut spans = Vec::new();
        let mut pos = 0;
        while let Some(c) = text[pos..].chars().next() {
            if let Some(end) = self.sentence_end(&text, pos, &mut dead)? {
                let candidate = &text[pos..end];
                if self.sentence.is_full_match(candidate)? {
                    spans.push(Span::new(pos, end, candidate));
                    if first_only {
                        break;
                    }
                    pos = end;
                    continue;
                }
            }
            pos += c.len_utf8();
        }
        Ok(spans)
    }

    /// Walk the sentence body starting at `start` and return the end of the
    /// sentence (after the stop and its closing marks), if the body reaches a
    /// stop. Every position on a failed walk is marked in `dead`: the walk
    /// from a position does not depend on where it began.
    fn sentence_end(&self, text: &str, start: usize, dead: &mut [bool]) -> Result<Option<usize>> {
        let mut pos = start;
        let mut path = Vec::new();
        while !dead[pos] {
            let Some(c) = text[pos..].chars().next() else {
                break;
            };
            if is_stop(c) {
                if pos > start {
                    let after = pos + c.len_utf8();
                    return Ok(Some(after + closers_len(&text[after..])));
                }
                break;
            }
            path.push(pos);
            if is_filler(c) {
                pos += c.len_utf8();
                continue;
            }
            // a word never spans whitespace or a stop
            let limit = text[pos..]
                .find(|c: char| is_stop(c) || WHITESPACE.contains(c))
                .map_or(text.len(), |i| pos + i);
            match self.word.match_prefix(&text[pos..limit])? {
                Some(m) if !m.is_empty() => pos += m.end,
                _ => break,
            }
        }
        for p in path {
            dead[p] = true;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: Vec<Span>) -> Vec<String> {
        spans.into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn global_compiles() {
        let m = PinyinMatcher::global();
        assert!(m.is_syllable("zhuang").unwrap());
    }

    #[test]
    fn unit_dispatch() {
        let m = PinyinMatcher::global();
        for unit in Unit::ALL {
            assert_eq!(m.matcher(unit).name(), unit.name());
        }
        assert_eq!(
            m.find(Unit::Word, "!! Zhong-guo ..").unwrap(),
            Some(Span::new(3, 12, "Zhong-guo"))
        );
    }

    #[test]
    fn non_match_is_not_an_error() {
        let m = PinyinMatcher::global();
        assert_eq!(m.find(Unit::Syllable, "123 ###").unwrap(), None);
        assert!(m.syllables("").unwrap().is_empty());
        assert!(!m.is_word("xyz").unwrap());
        assert!(m.split_word("xyz").unwrap().is_none());
    }

    #[test]
    fn split_word_drops_separators() {
        let m = PinyinMatcher::global();
        let parts = m.split_word("Zhong1-guo2").unwrap().unwrap();
        assert_eq!(texts(parts), vec!["Zhong1".to_string(), "guo2".to_string()]);
    }

    #[test]
    fn closing_marks_run() {
        assert_eq!(closers_len("\")] next"), 2);
        assert_eq!(closers_len(""), 0);
        assert_eq!(closers_len(" '"), 0);
    }

    #[test]
    fn sentence_search_skips_dead_ends() {
        let m = PinyinMatcher::global();
        let text = format!("{} xq. Hǎo!", "nǐ hǎo ".repeat(100));
        let found = m.find(Unit::Sentence, &text).unwrap().unwrap();
        assert_eq!(found.text, " Hǎo!");
        assert_eq!(found.end, text.len());
    }

    #[test]
    fn case_sensitive_config() {
        let mut cfg = PinyinConfig::default();
        cfg.base_mut().case_insensitive = false;
        let m = PinyinMatcher::new(&cfg).unwrap();
        assert!(m.is_syllable("zhong").unwrap());
        assert!(!m.is_syllable("Zhong").unwrap());
    }

    #[test]
    fn disabling_tone_numbers() {
        let cfg = PinyinConfig {
            tone_numbers: false,
            ..PinyinConfig::default()
        };
        let m = PinyinMatcher::new(&cfg).unwrap();
        assert!(m.is_syllable("hao").unwrap());
        assert!(!m.is_syllable("hao3").unwrap());
        assert!(!m.is_word("ni3hao3").unwrap());
    }

    #[test]
    fn disabling_erhua() {
        let cfg = PinyinConfig {
            erhua: false,
            ..PinyinConfig::default()
        };
        let m = PinyinMatcher::new(&cfg).unwrap();
        assert!(!m.is_syllable("nar").unwrap());
        assert!(PinyinMatcher::global().is_syllable("nar").unwrap());
    }
}
