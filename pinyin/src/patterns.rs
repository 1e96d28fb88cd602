//! Composed pattern sources for syllables, words and sentences.
//!
//! The sources carry no flags and no anchors so they can be embedded into
//! larger expressions. They use negative and positive lookahead, so they need
//! an engine with lookaround support (`fancy_regex`, which `PinyinMatcher`
//! compiles them with). Compile with case-insensitive matching to accept
//! capitalised Pinyin; `PinyinMatcher` does so by default.
//!
//! ```
//! use hanyu_core::{Config, Matcher};
//! use hanyu_pinyin::patterns;
//!
//! let m = Matcher::new("word", patterns::word(), &Config::default()).unwrap();
//! assert!(m.is_full_match("Xi'an").unwrap());
//! ```

use once_cell::sync::Lazy;
use tracing::debug;

use hanyu_core::render::{class_body, followed_by, group, literal_alternation, not_followed_by};

use crate::charsets::{CLOSERS, NON_STOPS, STOPS, WHITESPACE};
use crate::config::PinyinConfig;
use crate::table::FINALS;
use crate::tone::{all_classes, Vowel};

/// Loanword syllable separators: MIDDLE DOT and HYPHENATION POINT.
const INTERPUNCTS: [&str; 2] = ["\u{00B7}", "\u{2027}"];

/// The consonant-end assertion: the next character is neither a vowel (plain
/// or tone-marked) nor the `u:` spelling of ü.
pub fn consonant_end() -> String {
    not_followed_by(&format!("[{}]|u:", class_body(&all_classes())))
}

/// The three pattern sources rendered for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    pub syllable: String,
    pub word: String,
    pub sentence: String,
}

impl PatternSet {
    /// Render all sources for `config`. Rendering only walks ordered slices,
    /// so equal configs give byte-identical sources.
    pub fn build(config: &PinyinConfig) -> Self {
        let syllable = render_syllable(config);
        let word = render_word(&syllable, config);
        let sentence = render_sentence(&word);
        debug!(
            syllable_len = syllable.len(),
            word_len = word.len(),
            sentence_len = sentence.len(),
            "rendered pinyin patterns"
        );
        Self {
            syllable,
            word,
            sentence,
        }
    }
}

fn render_syllable(config: &PinyinConfig) -> String {
    let ce = consonant_end();
    let alternatives: Vec<String> = FINALS.iter().map(|f| f.pattern(&ce)).collect();

    let mut out = String::new();
    if config.interpunct {
        out.push_str(&literal_alternation(&INTERPUNCTS));
        out.push('?');
    }
    out.push_str(&group(&alternatives.join("|")));
    if config.erhua {
        // erhua reuses the nasal-coda assertion: `r` before a vowel starts
        // the next syllable instead
        out.push_str(&group(&format!("r{}", ce)));
        out.push('?');
    }
    if config.tone_numbers {
        out.push_str("[0-5]?");
    }
    out
}

fn render_word(syllable: &str, config: &PinyinConfig) -> String {
    // an apostrophe only separates syllables before a, e or o
    let ambiguous_start: String = [Vowel::A, Vowel::E, Vowel::O]
        .iter()
        .map(|v| v.class())
        .collect();
    let hyphen = format!("-{}", followed_by(syllable));
    let apostrophe = format!(
        "'{}{}",
        followed_by(&format!("[{}]", class_body(&ambiguous_start))),
        followed_by(syllable)
    );
    let digits = if config.tone_numbers { "[0-9]*" } else { "" };
    format!(
        "{}+",
        group(&format!(
            "{}{}?{}",
            syllable,
            group(&format!("{}|{}", hyphen, apostrophe)),
            digits
        ))
    )
}

fn render_sentence(word: &str) -> String {
    // words are atomic: a word is already maximal, and re-splitting it on
    // failure only multiplies backtracking
    format!(
        "{}+[{}][{}]*",
        group(&format!("(?>{})|[{}{}]", word, class_body(NON_STOPS), class_body(WHITESPACE))),
        class_body(STOPS),
        class_body(CLOSERS)
    )
}

static DEFAULT: Lazy<PatternSet> = Lazy::new(|| PatternSet::build(&PinyinConfig::default()));

/// Pattern source matching one Pinyin syllable.
pub fn syllable() -> &'static str {
    &DEFAULT.syllable
}

/// Alias of [`syllable`].
pub fn syl() -> &'static str {
    syllable()
}

/// Pattern source matching one Pinyin word: syllables joined by valid
/// hyphens or apostrophes, with optional tone numbers.
pub fn word() -> &'static str {
    &DEFAULT.word
}

/// Pattern source matching one Pinyin sentence: words, ASCII whitespace and
/// non-stop punctuation up to a stop, then closing quotes or brackets.
pub fn sentence() -> &'static str {
    &DEFAULT.sentence
}

/// Alias of [`sentence`].
pub fn sent() -> &'static str {
    sentence()
}
