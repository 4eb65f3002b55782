// Linguistic Primitives
// Pluggable tagger, sentiment scorer and language detector used by the text analyzer:
// - pos_tagger: adjective-aware word class tagging
// - sentiment: lexicon-based polarity and subjectivity
// - language: script and stop-word profile language identification

pub mod language;
pub mod pos_tagger;
pub mod sentiment;

use thiserror::Error;

pub use language::ProfileLanguageDetector;
pub use pos_tagger::LexiconTagger;
pub use sentiment::{LexiconSentimentScorer, SentimentScore};

/// Coarse word classes; only adjectives matter to the analyzer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WordClass {
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Verb,
    Noun,
    Number,
    Punctuation,
}

pub trait PartOfSpeechTagger: Send + Sync {
    /// One class per input token, in order.
    fn tag(&self, tokens: &[String]) -> Vec<WordClass>;
}

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("no features in text")]
    NoFeatures,
    #[error("language could not be determined")]
    Undetermined,
}

pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code of the dominant language.
    fn detect(&self, text: &str) -> Result<String, LanguageError>;
}

/// The set of primitives the analyzer depends on.
pub struct Toolkit {
    pub tagger: Box<dyn PartOfSpeechTagger>,
    pub sentiment: Box<dyn SentimentScorer>,
    pub language: Box<dyn LanguageDetector>,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self {
            tagger: Box::new(LexiconTagger),
            sentiment: Box::new(LexiconSentimentScorer),
            language: Box::new(ProfileLanguageDetector),
        }
    }
}

impl std::fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit").finish_non_exhaustive()
    }
}
