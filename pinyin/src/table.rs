//! Attested initial/final combinations of Mandarin.
//!
//! `FINALS` is the phonotactic core of the syllable pattern: one row per
//! final, each listing exactly the initials that occur before it. Rows are
//! ordered from the longest final to the shortest so that the first
//! alternative to succeed is the longest valid one, e.g. `uang` is tried
//! before `ang` and both before `a`.
//!
//! A row ending in a nasal coda carries `Guard::ConsonantEnd`: the `n`/`ng`
//! must not be followed by a vowel, otherwise it is the next syllable's
//! initial (`fana` is `fa` + `na`, `fanga` is `fan` + `ga`).

use hanyu_core::render::{char_class, group};

use crate::tone::Vowel;

/// Glide written between the initial and the tone-carrying vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medial {
    None,
    I,
    U,
    /// ü spelled `v`, `u:` or `ü`
    Umlaut,
}

impl Medial {
    fn pattern(self) -> &'static str {
        match self {
            Medial::None => "",
            Medial::I => "i",
            Medial::U => "u",
            Medial::Umlaut => "(?:v|u:|ü)",
        }
    }

    fn spelling(self) -> &'static str {
        match self {
            Medial::None => "",
            Medial::I => "i",
            Medial::U => "u",
            Medial::Umlaut => "v",
        }
    }
}

/// What may follow a row's final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Free,
    /// The final ends in a consonant that must not be followed by a vowel.
    ConsonantEnd,
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Final {
    /// Plain spelling of the final, for display (`üe` style).
    pub name: &'static str,
    /// Initials attested before this final.
    pub initials: &'static [&'static str],
    /// The final also occurs without an initial (`an`, `ou`, ...).
    pub zero_initial: bool,
    pub medial: Medial,
    /// Vowel that carries the tone mark.
    pub nucleus: Vowel,
    /// Literal letters after the nucleus.
    pub coda: &'static str,
    pub guard: Guard,
}

const fn row(
    name: &'static str,
    initials: &'static [&'static str],
    zero_initial: bool,
    medial: Medial,
    nucleus: Vowel,
    coda: &'static str,
    guard: Guard,
) -> Final {
    Final {
        name,
        initials,
        zero_initial,
        medial,
        nucleus,
        coda,
        guard,
    }
}

use Guard::{ConsonantEnd as CE, Free};

pub const FINALS: &[Final] = &[
    row("uang", &["zh", "ch", "sh", "g", "k", "h"], false, Medial::U, Vowel::A, "ng", CE),
    row("iong", &["j", "q", "x"], false, Medial::I, Vowel::O, "ng", CE),
    row("iang", &["n", "l", "j", "q", "x"], false, Medial::I, Vowel::A, "ng", CE),
    row(
        "uan",
        &[
            "zh", "ch", "sh", "z", "c", "s", "d", "t", "n", "l", "g", "k", "h", "r", "j", "q", "x",
            "y",
        ],
        false,
        Medial::U,
        Vowel::A,
        "n",
        CE,
    ),
    row("uai", &["zh", "ch", "sh", "g", "k", "h"], false, Medial::U, Vowel::A, "i", Free),
    row(
        "ong",
        &["zh", "ch", "z", "c", "r", "d", "t", "n", "l", "g", "k", "h", "s", "y"],
        false,
        Medial::None,
        Vowel::O,
        "ng",
        CE,
    ),
    row(
        "eng",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k",
            "h", "w",
        ],
        true,
        Medial::None,
        Vowel::E,
        "ng",
        CE,
    ),
    row(
        "ang",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k",
            "h", "w", "y",
        ],
        true,
        Medial::None,
        Vowel::A,
        "ng",
        CE,
    ),
    row(
        "ing",
        &["b", "p", "m", "d", "t", "n", "l", "j", "q", "x", "y"],
        false,
        Medial::None,
        Vowel::I,
        "ng",
        CE,
    ),
    row(
        "ian",
        &["b", "p", "m", "d", "t", "n", "l", "j", "q", "x"],
        false,
        Medial::I,
        Vowel::A,
        "n",
        CE,
    ),
    row(
        "iao",
        &["b", "p", "m", "d", "t", "n", "l", "j", "q", "x"],
        false,
        Medial::I,
        Vowel::A,
        "o",
        Free,
    ),
    row("üe", &["n", "l"], false, Medial::Umlaut, Vowel::E, "", Free),
    row("ü", &["n", "l"], false, Medial::None, Vowel::V, "", Free),
    row("ue", &["j", "q", "x", "y"], false, Medial::U, Vowel::E, "", Free),
    row(
        "in",
        &["b", "p", "m", "n", "l", "j", "q", "x", "y"],
        false,
        Medial::None,
        Vowel::I,
        "n",
        CE,
    ),
    row("iu", &["m", "d", "n", "l", "j", "q", "x"], false, Medial::I, Vowel::U, "", Free),
    row(
        "ie",
        &["b", "p", "m", "d", "t", "n", "l", "j", "q", "x"],
        false,
        Medial::I,
        Vowel::E,
        "",
        Free,
    ),
    row("ia", &["d", "l", "j", "q", "x"], false, Medial::I, Vowel::A, "", Free),
    row(
        "un",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "d", "t", "n", "l", "g", "k", "h", "x", "q", "j",
            "y",
        ],
        false,
        Medial::None,
        Vowel::U,
        "n",
        CE,
    ),
    row(
        "ui",
        &["zh", "ch", "sh", "z", "c", "s", "r", "d", "t", "g", "k", "h"],
        false,
        Medial::U,
        Vowel::I,
        "",
        Free,
    ),
    row(
        "uo",
        &["zh", "ch", "sh", "z", "c", "s", "r", "d", "t", "n", "l", "g", "k", "h"],
        false,
        Medial::U,
        Vowel::O,
        "",
        Free,
    ),
    row("ua", &["zh", "ch", "sh", "r", "g", "k", "h"], false, Medial::U, Vowel::A, "", Free),
    row(
        "en",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "b", "p", "m", "f", "d", "n", "g", "k", "h", "w",
        ],
        true,
        Medial::None,
        Vowel::E,
        "n",
        CE,
    ),
    row(
        "an",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k",
            "h", "w", "y",
        ],
        true,
        Medial::None,
        Vowel::A,
        "n",
        CE,
    ),
    row(
        "ou",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h",
            "y",
        ],
        true,
        Medial::None,
        Vowel::O,
        "u",
        Free,
    ),
    row(
        "ao",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "b", "p", "m", "d", "t", "n", "l", "g", "k", "h",
            "y",
        ],
        true,
        Medial::None,
        Vowel::A,
        "o",
        Free,
    ),
    row(
        "ei",
        &["zh", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "w", "z"],
        true,
        Medial::None,
        Vowel::E,
        "i",
        Free,
    ),
    row(
        "ai",
        &[
            "zh", "ch", "sh", "z", "c", "s", "b", "p", "m", "d", "t", "n", "l", "g", "k", "h", "w",
        ],
        true,
        Medial::None,
        Vowel::A,
        "i",
        Free,
    ),
    row(
        "i",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "j", "q", "x", "y", "b", "p", "m", "d", "t", "n",
            "l",
        ],
        false,
        Medial::None,
        Vowel::I,
        "",
        Free,
    ),
    row(
        "u",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "w", "b", "p", "m", "f", "d", "t", "n", "l", "g",
            "k", "h", "j", "q", "x", "y",
        ],
        false,
        Medial::None,
        Vowel::U,
        "",
        Free,
    ),
    row(
        "e",
        &[
            "zh", "ch", "sh", "z", "c", "s", "r", "m", "d", "t", "n", "l", "g", "k", "h", "y",
        ],
        true,
        Medial::None,
        Vowel::E,
        "",
        Free,
    ),
    row("o", &["b", "p", "m", "f", "w", "y", "l"], true, Medial::None, Vowel::O, "", Free),
    row(
        "a",
        &[
            "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "z", "c", "s",
            "w", "y",
        ],
        true,
        Medial::None,
        Vowel::A,
        "",
        Free,
    ),
];

/// Render a set of initials as `(?:zh|ch|[bpm...])`: digraphs first, then a
/// single class of one-letter initials, both in table order.
pub fn initials_pattern(initials: &[&str]) -> String {
    let digraphs: Vec<&str> = initials.iter().copied().filter(|s| s.len() > 1).collect();
    let singles: String = initials.iter().copied().filter(|s| s.len() == 1).collect();

    let mut parts: Vec<String> = digraphs.iter().map(|s| s.to_string()).collect();
    if !singles.is_empty() {
        parts.push(char_class(&singles));
    }
    group(&parts.join("|"))
}

/// Render the pattern of the tone-carrying vowel.
fn nucleus_pattern(vowel: Vowel) -> String {
    let class = char_class(vowel.class());
    match vowel {
        // ü may also be written `u:`
        Vowel::V => group(&format!("{}|u:", class)),
        _ => class,
    }
}

impl Final {
    /// Render this row as one alternative of the syllable pattern.
    /// `consonant_end` is the lookahead appended to nasal-coda rows.
    pub fn pattern(&self, consonant_end: &str) -> String {
        let mut out = String::from("(?:");
        out.push_str(&initials_pattern(self.initials));
        if self.zero_initial {
            out.push('?');
        }
        out.push_str(self.medial.pattern());
        out.push_str(&nucleus_pattern(self.nucleus));
        out.push_str(self.coda);
        if self.guard == Guard::ConsonantEnd {
            out.push_str(consonant_end);
        }
        out.push(')');
        out
    }

    /// Plain (toneless, `v` for ü) spellings this row accepts.
    pub fn spellings(&self) -> Vec<String> {
        let tail = format!("{}{}{}", self.medial.spelling(), self.nucleus.base(), self.coda);
        let mut out: Vec<String> = Vec::with_capacity(self.initials.len() + 1);
        if self.zero_initial {
            out.push(tail.clone());
        }
        out.extend(self.initials.iter().map(|i| format!("{}{}", i, tail)));
        out
    }
}
