// Text Authenticity Analyzer
// Runs every sub-analysis over one text and assembles the report.

use tracing::{debug, warn};

use super::frequency::{word_frequency, TOP_WORDS};
use super::patterns::detect_ai_patterns;
use super::readability::calculate_readability;
use super::round_to;
use super::similarity::check_duplicate_content;
use super::spam::calculate_spam_density;
use crate::models::{AdvancedDetection, BasicMetrics, Sentiment, SentimentLabel, TextReport};
use crate::services::lexicon::Lexicon;
use crate::services::linguistics::Toolkit;
use crate::services::text_processor::{sent_tokenize, word_tokenize};

const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// ISO 639-1 code to display name.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

pub const UNKNOWN_LANGUAGE: &str = "unknown";

pub fn language_name(code: &str) -> String {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

pub fn sentiment_label(polarity: f64) -> SentimentLabel {
    if polarity > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

pub struct TextAnalyzer<'a> {
    lexicon: &'a Lexicon,
    toolkit: Toolkit,
}

impl Default for TextAnalyzer<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_toolkit(lexicon, Toolkit::default())
    }

    pub fn with_toolkit(lexicon: &'a Lexicon, toolkit: Toolkit) -> Self {
        Self { lexicon, toolkit }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Full report; blank input short-circuits to [`TextReport::empty`].
    pub fn analyze_text(&self, text: &str) -> TextReport {
        if text.trim().is_empty() {
            return TextReport::empty();
        }

        let words = word_tokenize(text);
        let sentences = sent_tokenize(text);

        let basic_metrics = BasicMetrics {
            word_count: words.len(),
            sentence_count: sentences.len(),
            char_count: text.chars().count(),
            avg_words_per_sentence: round_to(words.len() as f64 / sentences.len().max(1) as f64, 1),
        };

        let report = TextReport {
            basic_metrics,
            readability: calculate_readability(&sentences, &words),
            sentiment: self.analyze_sentiment(text),
            language: self.detect_language(text),
            spam_analysis: calculate_spam_density(text, self.lexicon),
            advanced_detection: AdvancedDetection {
                ai_generated_patterns: detect_ai_patterns(text, &sentences, self.lexicon, self.toolkit.tagger.as_ref()),
                duplicate_content: check_duplicate_content(text, self.lexicon),
            },
            word_frequency: word_frequency(text, self.lexicon, TOP_WORDS),
        };

        debug!(
            words = report.basic_metrics.word_count,
            sentences = report.basic_metrics.sentence_count,
            readability = report.readability.score,
            spam_density = report.spam_analysis.density,
            patterns = report.advanced_detection.ai_generated_patterns.len(),
            "text.analyzed"
        );
        report
    }

    pub fn analyze_sentiment(&self, text: &str) -> Sentiment {
        let score = self.toolkit.sentiment.score(text);
        Sentiment {
            polarity: round_to(score.polarity, 2),
            subjectivity: round_to(score.subjectivity, 2),
            label: sentiment_label(score.polarity),
        }
    }

    /// Display name of the detected language, `"unknown"` when detection fails.
    pub fn detect_language(&self, text: &str) -> String {
        match self.toolkit.language.detect(text) {
            Ok(code) => language_name(&code),
            Err(e) => {
                warn!(error = %e, "text.language.detection_failed");
                UNKNOWN_LANGUAGE.to_string()
            }
        }
    }
}
