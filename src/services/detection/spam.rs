// Spam density
// Share of content tokens drawn from the superlative/intensifier lexicon.

use super::round_to;
use crate::models::SpamAnalysis;
use crate::services::lexicon::Lexicon;
use crate::services::text_processor::content_tokens;

pub fn calculate_spam_density(text: &str, lexicon: &Lexicon) -> SpamAnalysis {
    let words = content_tokens(text, lexicon);
    let spam_words = words.iter().filter(|w| lexicon.is_spam_keyword(w)).count();
    let total_words = words.len();
    let density = spam_words as f64 / total_words.max(1) as f64 * 100.0;

    SpamAnalysis {
        density: round_to(density, 1),
        spam_words,
        total_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density() {
        let s = calculate_spam_density("love this product great quality best buy ever", Lexicon::builtin());
        assert_eq!(s.total_words, 7);
        assert_eq!(s.spam_words, 3);
        assert_eq!(s.density, 42.9);
    }

    #[test]
    fn test_stop_words_only() {
        let s = calculate_spam_density("it is what it is.", Lexicon::builtin());
        assert_eq!(s, SpamAnalysis { density: 0.0, spam_words: 0, total_words: 0 });
    }

    #[test]
    fn test_case_insensitive() {
        let s = calculate_spam_density("AMAZING Perfect", Lexicon::builtin());
        assert_eq!(s.spam_words, 2);
        assert_eq!(s.density, 100.0);
    }
}
