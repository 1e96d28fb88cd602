//! Character classes of Pinyin text.
//!
//! These are plain strings of code points, assembled at compile time, from
//! which the composed patterns are built. `VOWELS` lists the precomposed
//! tone-marked forms; `ɑ` only exists as base letter plus combining mark.

use once_cell::sync::Lazy;
use regex::Regex;

use hanyu_core::render::class_body;

macro_rules! vowels {
    () => {
        concat!(
            "aɑeiouüvAEIOUÜV",
            "āɑ\u{0304}ēīōūǖĀĒĪŌŪǕ",
            "áɑ\u{0301}éíóúǘÁÉÍÓÚǗ",
            "ǎɑ\u{030C}ěǐǒǔǚǍĚǏǑǓǙ",
            "àɑ\u{0300}èìòùǜÀÈÌÒÙǛ",
        )
    };
}

macro_rules! consonants {
    () => {
        "bpmfdtnlgkhjqxzcsrwyBPMFDTNLGKHJQXZCSRWY"
    };
}

macro_rules! whitespace {
    () => {
        " \t\n\r\u{0B}\u{0C}"
    };
}

macro_rules! stops {
    () => {
        ".!?"
    };
}

macro_rules! non_stops {
    () => {
        "\"#$%&'()*+,-/:;<=>@[\\]^_`{|}~"
    };
}

/// Every vowel letter in every tone-mark and case variant.
pub const VOWELS: &str = vowels!();

/// Initial consonant letters, both cases.
pub const CONSONANTS: &str = consonants!();

/// Syllable- and word-internal marks: interpunct, tone numbers, the colon of
/// `u:`, hyphen and apostrophe.
pub const MARKS: &str = "·012345:-'";

/// Sentence terminators.
pub const STOPS: &str = stops!();

/// Punctuation that may appear inside a sentence without ending it.
pub const NON_STOPS: &str = non_stops!();

/// Closing quotes and brackets consumed after a sentence stop.
pub const CLOSERS: &str = "'\"]})";

/// ASCII whitespace as accepted between words.
pub const WHITESPACE: &str = whitespace!();

/// Every character that can occur in Pinyin text.
pub const PRINTABLE: &str = concat!(
    vowels!(),
    consonants!(),
    "·012345",
    whitespace!(),
    stops!(),
    non_stops!(),
);

static PRINTABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[{}]*$", class_body(PRINTABLE))).expect("printable class compiles")
});

/// True if every character of `text` is in `PRINTABLE`.
///
/// ```
/// use hanyu_pinyin::charsets::is_printable;
///
/// assert!(is_printable("Nǐ hǎo!"));
/// assert!(!is_printable("你好"));
/// ```
pub fn is_printable(text: &str) -> bool {
    PRINTABLE_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::Vowel;

    #[test]
    fn vowels_cover_every_tone_class() {
        for v in Vowel::ALL {
            for c in v.class().chars() {
                if c == 'v' || c == 'ü' {
                    assert!(VOWELS.contains(c));
                    continue;
                }
                assert!(VOWELS.contains(c), "missing {}", c);
                let upper: String = c.to_uppercase().collect();
                assert!(VOWELS.contains(upper.as_str()), "missing {}", upper);
            }
        }
    }

    #[test]
    fn consonants_have_both_cases() {
        for c in CONSONANTS.chars().filter(|c| c.is_ascii_lowercase()) {
            assert!(CONSONANTS.contains(c.to_ascii_uppercase()));
        }
        assert!(!CONSONANTS.contains('v'));
    }

    #[test]
    fn stops_and_non_stops_are_disjoint() {
        for c in STOPS.chars() {
            assert!(!NON_STOPS.contains(c), "{} is both", c);
        }
    }

    #[test]
    fn printable_excludes_word_internal_marks() {
        assert!(PRINTABLE.contains('·'));
        assert!(PRINTABLE.contains('5'));
        assert!(!PRINTABLE.contains('6'));
        // ':' '-' and '\'' only come in through NON_STOPS
        assert!(NON_STOPS.contains(':'));
    }

    #[test]
    fn printable_check() {
        assert!(is_printable("Tā shuō: \"Nǐ hǎo.\""));
        assert!(is_printable("ni3 hao3"));
        assert!(is_printable(""));
        assert!(!is_printable("ni6"));
        assert!(!is_printable("Ñ"));
    }
}
