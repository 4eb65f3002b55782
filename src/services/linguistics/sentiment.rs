// Sentiment scoring
// Averages lexicon polarity/subjectivity with intensifier and negation handling.

use super::SentimentScorer;
use crate::services::text_processor::word_tokenize_lower;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScore {
    /// In [-1, 1].
    pub polarity: f64,
    /// In [0, 1].
    pub subjectivity: f64,
}

/// (word, polarity, subjectivity)
const POLARITY_LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("perfect", 1.0, 1.0),
    ("perfectly", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("super", 0.33, 0.67),
    ("incredible", 0.9, 0.9),
    ("outstanding", 0.5, 0.67),
    ("brilliant", 0.9, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("fine", 0.42, 0.5),
    ("happy", 0.8, 1.0),
    ("pleased", 0.5, 1.0),
    ("satisfied", 0.5, 1.0),
    ("delighted", 0.7, 1.0),
    ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0),
    ("fast", 0.2, 0.6),
    ("quick", 0.33, 0.5),
    ("sturdy", 0.3, 0.5),
    ("effective", 0.6, 0.8),
    ("reliable", 0.5, 0.6),
    ("impressive", 1.0, 1.0),
    ("recommend", 0.3, 0.4),
    ("cheap", 0.4, 0.7),
    ("decent", 0.17, 0.67),
    ("simple", 0.0, 0.36),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("broken", -0.4, 0.4),
    ("useless", -0.5, 0.0),
    ("slow", -0.3, 0.4),
    ("expensive", -0.5, 0.7),
    ("ugly", -0.7, 1.0),
    ("fake", -0.5, 1.0),
    ("waste", -0.2, 0.1),
    ("dirty", -0.6, 0.8),
    ("angry", -0.5, 1.0),
];

/// (word, multiplier) applied to the next sentiment-bearing word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("highly", 1.4),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("completely", 1.3),
    ("truly", 1.3),
    ("super", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
];

const NEGATIONS: &[&str] = &["not", "n't", "never", "no", "hardly"];

const NEGATION_FACTOR: f64 = -0.5;

fn lookup(word: &str) -> Option<(f64, f64)> {
    POLARITY_LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, p, s)| (p, s))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS.iter().find(|(w, _)| *w == word).map(|&(_, m)| m)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentimentScorer;

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens = word_tokenize_lower(text);
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = lookup(token) else {
                continue;
            };

            // Modifiers directly in front: "not very good".
            let mut k = i;
            while k > 0 {
                let prev = tokens[k - 1].as_str();
                if let Some(m) = intensity(prev) {
                    polarity *= m;
                    subjectivity *= m;
                } else if NEGATIONS.contains(&prev) {
                    polarity *= NEGATION_FACTOR;
                } else {
                    break;
                }
                k -= 1;
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity.clamp(0.0, 1.0));
        }

        if polarities.is_empty() {
            return SentimentScore::default();
        }

        let n = polarities.len() as f64;
        SentimentScore {
            polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}
