//! Helpers for rendering character sets and literal alternatives into
//! pattern source text.
//!
//! Every function here is pure and order-preserving: the same input always
//! yields byte-identical output, so composed patterns are reproducible.

/// Characters that must be escaped inside a bracketed class.
const CLASS_SPECIAL: &[char] = &['\\', '[', ']', '^', '-'];

/// Render `chars` as the body of a character class (no brackets).
///
/// Duplicates are dropped, keeping the first occurrence, and class
/// metacharacters are escaped so every character is matched literally.
pub fn class_body(chars: &str) -> String {
    let mut seen: Vec<char> = Vec::new();
    let mut out = String::with_capacity(chars.len() + 8);
    for c in chars.chars() {
        if seen.contains(&c) {
            continue;
        }
        seen.push(c);
        if CLASS_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render `chars` as a bracketed character class, e.g. `"abc"` -> `[abc]`.
pub fn char_class(chars: &str) -> String {
    format!("[{}]", class_body(chars))
}

/// Render a non-capturing alternation of literal strings, in the given order.
///
/// ```
/// use hanyu_core::render::literal_alternation;
///
/// assert_eq!(literal_alternation(&["zh", "ch"]), "(?:zh|ch)");
/// assert_eq!(literal_alternation(&["a.b"]), r"(?:a\.b)");
/// ```
pub fn literal_alternation<S: AsRef<str>>(items: &[S]) -> String {
    let escaped: Vec<String> = items.iter().map(|s| regex::escape(s.as_ref())).collect();
    group(&escaped.join("|"))
}

/// Wrap `inner` in a non-capturing group.
pub fn group(inner: &str) -> String {
    format!("(?:{})", inner)
}

/// Render a negative lookahead over `inner`.
pub fn not_followed_by(inner: &str) -> String {
    format!("(?!{})", inner)
}

/// Render a positive lookahead over `inner`.
pub fn followed_by(inner: &str) -> String {
    format!("(?={})", inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_body_escapes_and_dedupes() {
        assert_eq!(class_body("aba"), "ab");
        assert_eq!(class_body(",-/"), r",\-/");
        assert_eq!(class_body(r"[\]^"), r"\[\\\]\^");
    }

    #[test]
    fn char_class_keeps_input_order() {
        assert_eq!(char_class("zcs"), "[zcs]");
        assert_eq!(char_class("āa"), "[āa]");
    }

    #[test]
    fn lookarounds() {
        assert_eq!(not_followed_by("[aeo]"), "(?![aeo])");
        assert_eq!(followed_by("x"), "(?=x)");
        assert_eq!(group("a|b"), "(?:a|b)");
    }
}
