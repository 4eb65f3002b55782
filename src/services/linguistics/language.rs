// Language identification
// Dominant script first; Latin-script text is matched against stop-word profiles,
// then falls back to whatlang trigram detection.

use std::sync::OnceLock;
use whatlang::{Detector, Lang};

use super::{LanguageDetector, LanguageError};
use crate::services::text_processor::word_tokenize_lower;

/// Ordered by priority when two profiles score equally.
const LATIN_PROFILES: &[(&str, &[&str])] = &[
    ("en", &["the", "and", "is", "it", "this", "of", "to", "was", "with", "for", "that", "i", "you", "are", "my", "in", "on", "not", "but", "have"]),
    ("es", &["el", "la", "los", "las", "es", "y", "que", "de", "del", "en", "un", "una", "muy", "por", "con", "para", "pero", "lo", "su", "está"]),
    ("fr", &["le", "la", "les", "est", "et", "un", "une", "des", "du", "je", "que", "très", "pas", "pour", "avec", "dans", "ce", "c'est", "il", "sur"]),
    ("de", &["der", "die", "das", "und", "ist", "nicht", "ein", "eine", "ich", "sehr", "mit", "für", "auf", "zu", "es", "war", "den", "dem", "auch", "sie"]),
    ("it", &["il", "lo", "gli", "è", "e", "di", "che", "un", "una", "molto", "per", "con", "non", "sono", "della", "questo", "ho", "ma", "mi", "nel"]),
    ("pt", &["o", "os", "as", "é", "e", "de", "que", "um", "uma", "muito", "não", "com", "para", "em", "do", "da", "eu", "mas", "foi", "isso"]),
    ("nl", &["de", "het", "een", "en", "is", "niet", "ik", "van", "zeer", "met", "voor", "dat", "op", "te", "zijn", "was", "maar", "ook", "heel", "erg"]),
    ("sv", &["och", "är", "det", "att", "en", "ett", "jag", "inte", "med", "för", "som", "på", "mycket", "var", "till", "av", "den", "men", "har", "om"]),
    ("pl", &["i", "jest", "nie", "to", "na", "się", "w", "z", "że", "bardzo", "do", "jak", "ale", "czy", "tak", "mam", "był", "co", "za", "po"]),
    ("tr", &["ve", "bir", "bu", "çok", "için", "ile", "da", "de", "ama", "gibi", "daha", "ben", "olarak", "değil", "var", "yok", "en", "mi", "ne", "o"]),
];

/// whatlang candidates for Latin-script text, with their ISO 639-1 codes.
const LATIN_LANGS: &[(Lang, &str)] = &[
    (Lang::Eng, "en"),
    (Lang::Spa, "es"),
    (Lang::Fra, "fr"),
    (Lang::Deu, "de"),
    (Lang::Ita, "it"),
    (Lang::Por, "pt"),
    (Lang::Nld, "nl"),
    (Lang::Swe, "sv"),
    (Lang::Pol, "pl"),
    (Lang::Tur, "tr"),
];

fn latin_detector() -> &'static Detector {
    static DETECTOR: OnceLock<Detector> = OnceLock::new();
    DETECTOR.get_or_init(|| Detector::with_allowlist(LATIN_LANGS.iter().map(|&(lang, _)| lang).collect()))
}

fn iso_639_1(lang: Lang) -> Option<&'static str> {
    LATIN_LANGS.iter().find(|&&(l, _)| l == lang).map(|&(_, code)| code)
}

#[derive(Debug, Default)]
struct ScriptCounts {
    latin: usize,
    cyrillic: usize,
    greek: usize,
    arabic: usize,
    han: usize,
    kana: usize,
    hangul: usize,
}

fn count_scripts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        match c {
            '\u{3040}'..='\u{30ff}' => counts.kana += 1,
            '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' => counts.han += 1,
            '\u{ac00}'..='\u{d7af}' | '\u{1100}'..='\u{11ff}' => counts.hangul += 1,
            '\u{0400}'..='\u{04ff}' => counts.cyrillic += 1,
            '\u{0370}'..='\u{03ff}' => counts.greek += 1,
            '\u{0600}'..='\u{06ff}' => counts.arabic += 1,
            _ if c.is_ascii_alphabetic() || ('\u{00c0}'..='\u{024f}').contains(&c) => counts.latin += 1,
            _ => {}
        }
    }
    counts
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileLanguageDetector;

impl ProfileLanguageDetector {
    fn profile_match(text: &str) -> Option<&'static str> {
        let tokens = word_tokenize_lower(text);
        let mut best: Option<(&str, usize)> = None;

        for &(code, words) in LATIN_PROFILES {
            let hits = tokens.iter().filter(|t| words.contains(&t.as_str())).count();
            if hits > 0 && best.map_or(true, |(_, b)| hits > b) {
                best = Some((code, hits));
            }
        }
        best.map(|(code, _)| code)
    }

    /// Stop-word hits decide first; text without any falls back to trigrams.
    fn detect_latin(text: &str) -> Result<String, LanguageError> {
        if let Some(code) = Self::profile_match(text) {
            return Ok(code.to_string());
        }
        latin_detector()
            .detect(text)
            .and_then(|info| iso_639_1(info.lang()))
            .map(str::to_string)
            .ok_or(LanguageError::Undetermined)
    }
}

impl LanguageDetector for ProfileLanguageDetector {
    fn detect(&self, text: &str) -> Result<String, LanguageError> {
        let c = count_scripts(text);
        let cjk = c.han + c.kana;
        let candidates = [
            ("latin", c.latin),
            ("cjk", cjk),
            ("ko", c.hangul),
            ("ru", c.cyrillic),
            ("el", c.greek),
            ("ar", c.arabic),
        ];

        let Some(&(script, count)) = candidates.iter().max_by_key(|(_, n)| *n) else {
            return Err(LanguageError::NoFeatures);
        };
        if count == 0 {
            return Err(LanguageError::NoFeatures);
        }

        match script {
            "latin" => Self::detect_latin(text),
            "cjk" if c.kana > 0 => Ok("ja".to_string()),
            "cjk" => Ok("zh".to_string()),
            code => Ok(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Result<String, LanguageError> {
        ProfileLanguageDetector.detect(text)
    }

    #[test]
    fn test_detects_english() {
        assert_eq!(detect("I bought this for my kitchen and it works.").unwrap(), "en");
    }

    #[test]
    fn test_detects_spanish_and_german() {
        assert_eq!(detect("El producto es muy bueno y la entrega fue rápida").unwrap(), "es");
        assert_eq!(detect("Das Produkt ist sehr gut und nicht teuer").unwrap(), "de");
    }

    #[test]
    fn test_detects_scripts() {
        assert_eq!(detect("Отличный товар").unwrap(), "ru");
        assert_eq!(detect("这个产品很好").unwrap(), "zh");
        assert_eq!(detect("この製品はとても良いです").unwrap(), "ja");
        assert_eq!(detect("정말 좋은 제품입니다").unwrap(), "ko");
        assert_eq!(detect("منتج رائع").unwrap(), "ar");
    }

    #[test]
    fn test_no_features() {
        assert_eq!(detect("12345 !!!"), Err(LanguageError::NoFeatures));
    }

    #[test]
    fn test_english_without_stop_words() {
        for text in [
            "Amazing quality, highly recommended.",
            "Great product, fast shipping, excellent seller!",
            "Terrible quality. Broke after two days.",
        ] {
            assert_eq!(detect(text).unwrap(), "en", "{}", text);
        }
    }

    #[test]
    fn test_iso_codes() {
        assert_eq!(iso_639_1(Lang::Eng), Some("en"));
        assert_eq!(iso_639_1(Lang::Rus), None);
    }
}
