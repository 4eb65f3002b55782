// Word class tagger
// Closed-class lists, an adjective lexicon and suffix rules.

use super::{PartOfSpeechTagger, WordClass};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours", "he",
    "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "who",
    "whom", "whose", "which", "what", "one", "'s",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "since", "without", "within", "around", "near",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "until", "whereas", "than",
];

const ADVERBS: &[&str] = &[
    "very", "really", "so", "too", "quite", "rather", "just", "also", "still", "already", "always",
    "never", "often", "here", "there", "now", "then", "again", "soon", "well", "even", "ever",
    "not", "n't", "however", "therefore", "moreover", "furthermore", "consequently", "almost",
    "much",
];

const VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "shall", "should", "may", "might", "must", "get",
    "got", "buy", "bought", "love", "like", "enjoy", "recommend", "works", "worked", "arrived",
    "feels", "felt", "make", "made", "use", "used", "think", "know", "want", "need", "say", "said",
    "go", "went", "come", "came", "see", "saw", "look", "looks", "seems", "seemed", "appreciate",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "best", "better", "bad", "worse", "worst", "amazing", "awesome", "excellent",
    "fantastic", "perfect", "wonderful", "super", "incredible", "outstanding", "brilliant",
    "nice", "fine", "fast", "quick", "slow", "cheap", "expensive", "new", "old", "big", "small",
    "large", "little", "high", "low", "long", "short", "easy", "hard", "simple", "happy", "sad",
    "poor", "terrible", "horrible", "awful", "cool", "pretty", "ugly", "lovely", "friendly",
    "early", "late", "sturdy", "solid", "strong", "weak", "clean", "dirty", "broken", "free",
    "full", "empty", "real", "fake", "true", "false", "top", "superb", "decent", "average",
    "smooth", "soft", "bright", "dark", "light", "heavy", "hot", "cold", "warm", "fresh", "safe",
    "quality", "impressive", "reliable", "stunning", "flawless", "exceptional", "remarkable",
    "favorite", "favourite", "disappointing", "satisfied", "delighted", "pleased",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish", "ical", "ic"];

/// Rule-based tagger standing in for a statistical one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn classify(token: &str) -> WordClass {
        let word = token.to_lowercase();

        if !word.chars().any(|c| c.is_alphanumeric()) {
            return WordClass::Punctuation;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return WordClass::Number;
        }

        let w = word.as_str();
        if ADJECTIVES.contains(&w) {
            return WordClass::Adjective;
        }
        if DETERMINERS.contains(&w) {
            return WordClass::Determiner;
        }
        if PRONOUNS.contains(&w) {
            return WordClass::Pronoun;
        }
        if PREPOSITIONS.contains(&w) {
            return WordClass::Preposition;
        }
        if CONJUNCTIONS.contains(&w) {
            return WordClass::Conjunction;
        }
        if ADVERBS.contains(&w) {
            return WordClass::Adverb;
        }
        if VERBS.contains(&w) {
            return WordClass::Verb;
        }

        let len = w.chars().count();
        if len > 4 && w.ends_with("ly") {
            return WordClass::Adverb;
        }
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return WordClass::Adjective;
        }
        if len > 4 && (w.ends_with("ed") || w.ends_with("ing")) {
            return WordClass::Verb;
        }

        WordClass::Noun
    }
}

impl PartOfSpeechTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<WordClass> {
        tokens.iter().map(|t| Self::classify(t)).collect()
    }
}
