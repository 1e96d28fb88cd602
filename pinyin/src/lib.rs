//! hanyu-pinyin crate root
//!
//! This crate recognizes Hanyu Pinyin text at three levels (syllable, word
//! and sentence) with patterns composed from the attested initial/final
//! table of Mandarin. It builds on the shared `hanyu-core` matcher types.
//!
//! Public API exported here:
//! - character-class constants from `charsets` (`VOWELS`, `CONSONANTS`, ...)
//! - pattern sources `syllable`/`syl`, `word`, `sentence`/`sent` from `patterns`
//! - `PinyinMatcher` and `Unit` from `matcher`
//! - `PinyinConfig` from `config`
//!
//! ```
//! use hanyu_pinyin::PinyinMatcher;
//!
//! let m = PinyinMatcher::global();
//! assert!(m.is_word("Zhōngguó").unwrap());
//! let sentences = m.sentences("Wǒ ài nǐ. Nǐ ài wǒ?").unwrap();
//! assert_eq!(sentences.len(), 2);
//! ```

pub mod charsets;
pub mod config;
pub mod matcher;
pub mod patterns;
pub mod syllables;
pub mod table;
pub mod tone;

// Re-export the shared matcher types so callers need only this crate.
pub use hanyu_core::{Config, Error, Matcher, Result, Span};

// Convenience re-exports for common types used by callers.
pub use charsets::{is_printable, CLOSERS, CONSONANTS, MARKS, NON_STOPS, PRINTABLE, STOPS, VOWELS};
pub use config::PinyinConfig;
pub use matcher::{PinyinMatcher, Unit};
pub use patterns::{sent, sentence, syl, syllable, word, PatternSet};
pub use syllables::PINYIN_SYLLABLES;
pub use table::FINALS;
pub use tone::Vowel;
