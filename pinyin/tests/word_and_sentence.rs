// Segmentation vectors for syllables, words and sentences.

use hanyu_pinyin::{PinyinConfig, PinyinMatcher, Span, Unit};

fn texts(spans: Vec<Span>) -> Vec<String> {
    spans.into_iter().map(|s| s.text).collect()
}

fn syllables(text: &str) -> Vec<String> {
    texts(PinyinMatcher::global().syllables(text).unwrap())
}

fn words(text: &str) -> Vec<String> {
    texts(PinyinMatcher::global().words(text).unwrap())
}

fn sentences(text: &str) -> Vec<String> {
    texts(PinyinMatcher::global().sentences(text).unwrap())
}

#[test]
fn consonant_end_splits() {
    assert_eq!(syllables("fana"), vec!["fa", "na"]);
    assert_eq!(syllables("fanga"), vec!["fan", "ga"]);
    assert_eq!(syllables("minga"), vec!["min", "ga"]);
    assert_eq!(syllables("jina"), vec!["ji", "na"]);
    assert_eq!(syllables("xian"), vec!["xian"]);
    assert_eq!(syllables("wanrong"), vec!["wan", "rong"]);
}

#[test]
fn erhua_yields_to_a_following_vowel() {
    assert_eq!(syllables("nar"), vec!["nar"]);
    assert_eq!(syllables("nara"), vec!["na", "a"]);
}

#[test]
fn apostrophe_words() {
    let m = PinyinMatcher::global();
    for w in ["Xi'an", "Tian'anmen", "Zhong-guo", "pinyin2", "ni3hao3", "Mǎkè·Tǔwēn"] {
        assert!(m.is_word(w).unwrap(), "{}", w);
    }
    assert_eq!(syllables("tian'anmen"), vec!["tian", "an", "men"]);
}

#[test]
fn apostrophe_before_consonant_is_not_consumed() {
    assert_eq!(words("xi'bei"), vec!["xi", "bei"]);
    assert!(!PinyinMatcher::global().is_word("xi'bei").unwrap());
}

#[test]
fn dangling_hyphen_is_not_consumed() {
    assert_eq!(words("zhong-"), vec!["zhong"]);
    assert_eq!(words("zhong-xyz"), vec!["zhong"]);
}

#[test]
fn words_in_running_text() {
    assert_eq!(words("Běijīng huānyíng nǐ"), vec!["Běijīng", "huānyíng", "nǐ"]);
    let m = PinyinMatcher::global();
    assert_eq!(
        m.find(Unit::Word, "!! Zhong-guo ..").unwrap(),
        Some(Span::new(3, 12, "Zhong-guo"))
    );
}

#[test]
fn sentence_with_non_stop_punctuation() {
    let m = PinyinMatcher::global();
    assert!(m.is_sentence("Nǐ hǎo, shìjiè!").unwrap());
    assert!(m.is_sentence("(Wǒ ài nǐ.)").unwrap());
}

#[test]
fn sentence_includes_closing_quote() {
    let text = "Tā shuō: \"Nǐ hǎo.\"";
    assert!(PinyinMatcher::global().is_sentence(text).unwrap());
    assert_eq!(sentences(text), vec![text]);
}

#[test]
fn consecutive_sentences() {
    assert_eq!(sentences("Wǒ ài nǐ. Nǐ ài wǒ?"), vec!["Wǒ ài nǐ.", " Nǐ ài wǒ?"]);
    assert_eq!(sentences("Nǐ hǎo! Zàijiàn."), vec!["Nǐ hǎo!", " Zàijiàn."]);
    assert_eq!(
        sentences("Tā shuō: 'Hǎo!' Ránhòu zǒu le."),
        vec!["Tā shuō: 'Hǎo!'", " Ránhòu zǒu le."]
    );
}

#[test]
fn sentence_without_stop_fails_fast() {
    let text = "nihao".repeat(12);
    let m = PinyinMatcher::global();
    assert_eq!(m.find(Unit::Sentence, &text).unwrap(), None);
    assert!(!m.is_sentence(&text).unwrap());
}

#[test]
fn long_spaced_text_without_stop_is_no_match() {
    let text = "Wǒ ài nǐ ".repeat(200);
    assert!(text.len() > 1024);
    let m = PinyinMatcher::global();
    assert_eq!(m.find(Unit::Sentence, &text).unwrap(), None);
    assert!(m.sentences(&text).unwrap().is_empty());
    assert!(!m.is_sentence(&text).unwrap());
}

#[test]
fn sentence_followed_by_long_unterminated_tail() {
    let text = format!("Nǐ hǎo. {}", "zàijiàn ".repeat(50));
    let m = PinyinMatcher::global();
    assert_eq!(
        m.sentences(&text).unwrap(),
        vec![Span::new(0, "Nǐ hǎo.".len(), "Nǐ hǎo.")]
    );
}

#[test]
fn long_sentence_is_found_whole() {
    let text = format!("{}Zàijiàn!", "Wǒ ài nǐ ".repeat(200));
    let m = PinyinMatcher::global();
    assert_eq!(sentences(&text), vec![text.clone()]);
    assert!(m.is_sentence(&text).unwrap());
}

#[test]
fn sentence_starts_after_a_foreign_character() {
    let text = format!("{}你 Wǒ ài nǐ.", "Wǒ ài nǐ ".repeat(200));
    assert_eq!(sentences(&text), vec![" Wǒ ài nǐ."]);

    let text = format!("{}hello world.", "Wǒ ài nǐ ".repeat(100));
    assert!(sentences(&text).is_empty());
}

#[test]
fn closing_marks_can_open_the_next_sentence() {
    assert_eq!(sentences("..\"Hǎo."), vec!["\"Hǎo."]);
}

#[test]
fn only_ascii_whitespace_joins_words() {
    assert_eq!(sentences("Nǐ hǎo\u{3000}shìjiè!"), vec!["shìjiè!"]);
    assert!(PinyinMatcher::global().is_sentence("Nǐ\thǎo,\nshìjiè!").unwrap());
}

#[test]
fn decomposed_tone_marks_are_normalized() {
    let text = "ni\u{030C}ha\u{030C}o";
    let m = PinyinMatcher::global();
    assert!(m.is_word(text).unwrap());
    assert_eq!(
        m.syllables(text).unwrap(),
        vec![Span::new(0, 3, "nǐ"), Span::new(3, 7, "hǎo")]
    );

    let mut cfg = PinyinConfig::default();
    cfg.base_mut().normalize = false;
    let raw = PinyinMatcher::new(&cfg).unwrap();
    assert!(!raw.is_word(text).unwrap());
}

#[test]
fn split_word_vectors() {
    let m = PinyinMatcher::global();
    let parts = m.split_word("Xi'an").unwrap().unwrap();
    assert_eq!(texts(parts), vec!["Xi", "an"]);
    let parts = m.split_word("zhongguo").unwrap().unwrap();
    assert_eq!(texts(parts), vec!["zhong", "guo"]);
    assert!(m.split_word("xi'bei").unwrap().is_none());
}

#[test]
fn split_word_keeps_every_tone_digit() {
    let m = PinyinMatcher::global();
    let parts = m.split_word("ni35hao").unwrap().unwrap();
    assert_eq!(parts, vec![Span::new(0, 4, "ni35"), Span::new(4, 7, "hao")]);
    let parts = m.split_word("pin1yin12").unwrap().unwrap();
    assert_eq!(texts(parts), vec!["pin1", "yin12"]);
}
