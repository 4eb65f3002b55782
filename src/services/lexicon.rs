// Lexicon
// Immutable keyword lists shared by both engines. Built once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Superlatives and intensifiers that inflate fake reviews.
pub const SPAM_KEYWORDS: &[&str] = &[
    "amazing", "awesome", "excellent", "fantastic", "great", "love", "perfect",
    "wonderful", "best", "super", "incredible", "outstanding", "brilliant",
    "recommend", "highly", "definitely", "absolutely", "totally", "completely",
    "extremely", "very", "so", "much", "really", "truly", "genuinely",
];

/// English stop words (NLTK corpus list).
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Canned review phrasings used for duplicate-content comparison.
pub const SPAM_TEMPLATES: &[&str] = &[
    "love this product great quality",
    "awesome item fast shipping",
    "excellent service quick delivery",
    "good product nice price",
];

/// Formal connectives rarely seen in genuine customer reviews.
pub const FORMAL_TRANSITIONS: &[&str] = &["however", "therefore", "moreover", "consequently", "furthermore"];

/// Well-known brands whose presence in a domain earns a bonus.
pub const TRUSTED_BRANDS: &[&str] = &[
    "google", "microsoft", "apple", "amazon", "facebook", "twitter", "github", "wikipedia",
];

/// Keywords typical of phishing lures.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "secure", "verify", "account", "password", "bank", "paypal",
    "free", "win", "prize", "gift", "urgent", "alert", "confirm",
];

/// Domain suffixes with a good reputation (TLDs and brand prefixes).
pub const REPUTABLE_SUFFIXES: &[&str] = &[
    ".gov", ".edu", ".org", ".com", ".net",
    "google.", "microsoft.", "apple.", "amazon.",
];

/// Free or frequently abused top-level domains.
pub const ABUSED_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq", ".top", ".xyz"];

/// User-supplied additions to the built-in lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LexiconConfig {
    pub extra_spam_keywords: Vec<String>,
    pub extra_stop_words: Vec<String>,
    pub extra_trusted_brands: Vec<String>,
    pub extra_suspicious_keywords: Vec<String>,
}

/// Read-only keyword lists consumed by the trust calculator and the text analyzer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub spam_keywords: HashSet<String>,
    pub stop_words: HashSet<String>,
    pub spam_templates: Vec<String>,
    pub formal_transitions: Vec<String>,
    pub trusted_brands: Vec<String>,
    pub suspicious_keywords: Vec<String>,
    pub reputable_suffixes: Vec<String>,
    pub abused_tlds: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Appends `extra` to `base`, lower-cased, skipping blanks and duplicates.
fn extend_unique(base: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        let item = item.trim().to_lowercase();
        if !item.is_empty() && !base.contains(&item) {
            base.push(item);
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            spam_keywords: owned(SPAM_KEYWORDS).into_iter().collect(),
            stop_words: owned(STOP_WORDS).into_iter().collect(),
            spam_templates: owned(SPAM_TEMPLATES),
            formal_transitions: owned(FORMAL_TRANSITIONS),
            trusted_brands: owned(TRUSTED_BRANDS),
            suspicious_keywords: owned(SUSPICIOUS_KEYWORDS),
            reputable_suffixes: owned(REPUTABLE_SUFFIXES),
            abused_tlds: owned(ABUSED_TLDS),
        }
    }
}

impl Lexicon {
    /// Process-wide default lexicon.
    pub fn builtin() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(Lexicon::default)
    }

    /// Built-in lists extended with the configured additions.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut lexicon = Self::default();

        let normalize = |s: &String| s.trim().to_lowercase();
        lexicon
            .spam_keywords
            .extend(config.extra_spam_keywords.iter().map(normalize).filter(|s| !s.is_empty()));
        lexicon
            .stop_words
            .extend(config.extra_stop_words.iter().map(normalize).filter(|s| !s.is_empty()));
        extend_unique(&mut lexicon.trusted_brands, &config.extra_trusted_brands);
        extend_unique(&mut lexicon.suspicious_keywords, &config.extra_suspicious_keywords);

        lexicon
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn is_spam_keyword(&self, token: &str) -> bool {
        self.spam_keywords.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = Lexicon::builtin() as *const Lexicon;
        let b = Lexicon::builtin() as *const Lexicon;
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_lists() {
        let lex = Lexicon::default();
        assert_eq!(lex.spam_templates.len(), 4);
        assert!(lex.is_spam_keyword("amazing"));
        assert!(lex.is_stop_word("the"));
        assert!(!lex.is_stop_word("product"));
        assert_eq!(lex.suspicious_keywords.len(), 14);
    }

    #[test]
    fn test_from_config_extends_lists() {
        let config = LexiconConfig {
            extra_spam_keywords: vec![" Stellar ".to_string()],
            extra_trusted_brands: vec!["mozilla".to_string(), "google".to_string()],
            extra_suspicious_keywords: vec!["".to_string(), "wallet".to_string()],
            ..Default::default()
        };
        let lex = Lexicon::from_config(&config);
        assert!(lex.is_spam_keyword("stellar"));
        assert_eq!(lex.trusted_brands.len(), TRUSTED_BRANDS.len() + 1);
        assert_eq!(lex.suspicious_keywords.last().map(String::as_str), Some("wallet"));
    }
}
