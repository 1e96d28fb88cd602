//! Tone-marked vowel classes.
//!
//! Each base vowel owns a class of its plain form plus the four precomposed
//! tone-marked forms. The syllable pattern is assembled from these classes so
//! that a tone mark can sit on whichever vowel carries it.

/// A Pinyin base vowel. `V` stands for ü (also written `v`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
    V,
}

impl Vowel {
    pub const ALL: [Vowel; 6] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U, Vowel::V];

    /// Lowercase class members in pattern order: plain, then tone-marked.
    pub const fn class(self) -> &'static str {
        match self {
            Vowel::A => "aāàáǎ",
            Vowel::E => "eēéěè",
            Vowel::I => "iīíǐì",
            Vowel::O => "oōóǒò",
            Vowel::U => "uūúǔù",
            Vowel::V => "vüǖǘǚǜ",
        }
    }

    /// ASCII spelling of the vowel as used in plain syllable lists.
    pub const fn base(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::E => 'e',
            Vowel::I => 'i',
            Vowel::O => 'o',
            Vowel::U => 'u',
            Vowel::V => 'v',
        }
    }

    /// Map an ASCII base letter (or `ü`) back to its vowel.
    pub fn from_base(c: char) -> Option<Vowel> {
        match c.to_ascii_lowercase() {
            'a' => Some(Vowel::A),
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            'v' | 'ü' => Some(Vowel::V),
            _ => None,
        }
    }

    /// The lowercase vowel carrying `tone` (1-4). Tones 0 and 5 are the
    /// neutral tone and return the unmarked letter (`ü` for `V`).
    pub fn with_tone(self, tone: u8) -> char {
        let forms: [char; 5] = match self {
            Vowel::A => ['a', 'ā', 'á', 'ǎ', 'à'],
            Vowel::E => ['e', 'ē', 'é', 'ě', 'è'],
            Vowel::I => ['i', 'ī', 'í', 'ǐ', 'ì'],
            Vowel::O => ['o', 'ō', 'ó', 'ǒ', 'ò'],
            Vowel::U => ['u', 'ū', 'ú', 'ǔ', 'ù'],
            Vowel::V => ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ'],
        };
        match tone {
            1..=4 => forms[tone as usize],
            _ => forms[0],
        }
    }
}

/// Every lowercase tone class, concatenated in `Vowel::ALL` order.
pub fn all_classes() -> String {
    Vowel::ALL.iter().map(|v| v.class()).collect()
}
