// Text Processing Service
// Word and sentence tokenization shared by the text analyzer

use regex::Regex;
use std::sync::OnceLock;

use crate::services::lexicon::Lexicon;

/// ASCII punctuation characters; a token is punctuation when it is a substring of this.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Lower-case abbreviations that end with a period but do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "no", "approx", "dept", "fig",
];

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:-\w+)*(?:['’]\w+)*|\.\.\.|[^\w\s]").expect("word regex")
    })
}

/// Treebank-style word tokenizer: words, contraction suffixes and single
/// punctuation marks each become a token.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in word_re().find_iter(text) {
        split_contraction(m.as_str(), &mut tokens);
    }
    tokens
}

/// "don't" -> "do" + "n't", "it's" -> "it" + "'s".
fn split_contraction(token: &str, out: &mut Vec<String>) {
    let normalized = token.replace('’', "'");
    let lower = normalized.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = normalized.len() - 3;
        out.push(normalized[..cut].to_string());
        out.push(normalized[cut..].to_string());
        return;
    }

    match normalized.find('\'') {
        Some(pos) if pos > 0 => {
            out.push(normalized[..pos].to_string());
            out.push(normalized[pos..].to_string());
        }
        _ => out.push(normalized),
    }
}

/// Lower-cased word tokens.
pub fn word_tokenize_lower(text: &str) -> Vec<String> {
    word_tokenize(&text.to_lowercase())
}

pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && PUNCTUATION.contains(token)
}

/// Lower-cased tokens with stop words and punctuation removed.
pub fn content_tokens(text: &str, lexicon: &Lexicon) -> Vec<String> {
    word_tokenize_lower(text)
        .into_iter()
        .filter(|t| !lexicon.is_stop_word(t) && !is_punctuation(t))
        .collect()
}

/// Punkt-style sentence splitting.
///
/// A run of terminators (plus closing quotes and brackets) ends a sentence when
/// followed by whitespace or the end of text, unless it closes a decimal number
/// or a known abbreviation. Quotes are not tracked, so a stray inch mark cannot
/// swallow the rest of the text.
pub fn sent_tokenize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut current_start: usize = 0;
    let mut i = 0;

    while i < chars.len() {
        let (_, ch) = chars[i];

        if !SENTENCE_TERMINATORS.contains(&ch) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && (SENTENCE_TERMINATORS.contains(&chars[j].1) || is_closer(chars[j].1)) {
            j += 1;
        }
        let at_end = j >= chars.len();
        let followed_by_space = !at_end && chars[j].1.is_whitespace();
        let cjk_terminator = matches!(ch, '。' | '！' | '？');

        if !(at_end || followed_by_space || cjk_terminator) {
            i = j;
            continue;
        }
        if ch == '.' && j == i + 1 && ends_with_abbreviation(&text[current_start..chars[i].0]) {
            i = j;
            continue;
        }

        let end = if at_end { text.len() } else { chars[j].0 };
        push_sentence(&text[current_start..end], &mut sentences);
        current_start = end;
        i = j;
    }

    if current_start < text.len() {
        push_sentence(&text[current_start..], &mut sentences);
    }

    sentences
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '\'' | '’' | '"' | '”')
}

fn push_sentence(raw: &str, out: &mut Vec<String>) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let last = prefix
        .rsplit(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");
    if last.is_empty() {
        return false;
    }
    // Single initials such as "J." in "J. Smith"; the pronoun "I" still ends a sentence.
    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase() && c != 'I';
    }
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenize_separates_punctuation() {
        assert_eq!(word_tokenize("Great product, fast!"), vec!["Great", "product", ",", "fast", "!"]);
    }

    #[test]
    fn test_word_tokenize_contractions() {
        assert_eq!(word_tokenize("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(word_tokenize("it's fine"), vec!["it", "'s", "fine"]);
        assert_eq!(word_tokenize("it’s fine"), vec!["it", "'s", "fine"]);
    }

    #[test]
    fn test_word_tokenize_keeps_hyphenated_and_ellipsis() {
        assert_eq!(word_tokenize("well-known brand..."), vec!["well-known", "brand", "..."]);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("!"));
        assert!(is_punctuation(","));
        assert!(!is_punctuation("..."));
        assert!(!is_punctuation("word"));
        assert!(!is_punctuation(""));
    }

    #[test]
    fn test_content_tokens_filters_stop_words() {
        let lex = Lexicon::default();
        assert_eq!(content_tokens("This is the BEST product!", &lex), vec!["best", "product"]);
    }

    #[test]
    fn test_sentence_split_basic() {
        let s = sent_tokenize("First one. Second one! Third one? Fourth");
        assert_eq!(s, vec!["First one.", "Second one!", "Third one?", "Fourth"]);
    }

    #[test]
    fn test_sentence_split_skips_decimals_and_abbreviations() {
        let s = sent_tokenize("It costs 3.50 dollars. Dr. Smith agreed.");
        assert_eq!(s, vec!["It costs 3.50 dollars.", "Dr. Smith agreed."]);
    }

    #[test]
    fn test_sentence_split_terminator_runs() {
        let s = sent_tokenize("Wow!!! Really... yes.");
        assert_eq!(s, vec!["Wow!!!", "Really...", "yes."]);
    }

    #[test]
    fn test_sentence_split_collapses_whitespace_between() {
        assert_eq!(sent_tokenize("One.  Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_sentence_split_stray_quote() {
        let s = sent_tokenize("The 15\" screen is nice. It broke fast. It was bad. I am sad.");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], "The 15\" screen is nice.");
    }

    #[test]
    fn test_sentence_split_closing_quote_stays_with_sentence() {
        let s = sent_tokenize("She said \"It works!\" Then it broke.");
        assert_eq!(s, vec!["She said \"It works!\"", "Then it broke."]);
    }

    #[test]
    fn test_word_tokenize_keeps_decimals() {
        assert_eq!(word_tokenize("It costs 3.50 or 1,000 yen."), vec!["It", "costs", "3.50", "or", "1,000", "yen", "."]);
    }

    #[test]
    fn test_sentence_split_cjk() {
        let s = sent_tokenize("这是第一句。这是第二句！");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_sentence_split_blank() {
        assert!(sent_tokenize("   ").is_empty());
    }
}
