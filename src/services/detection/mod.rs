// Detection Module
// Text authenticity analysis organized into specialized submodules:
// - readability: simplified Flesch Reading Ease and its level
// - spam: spam keyword density
// - patterns: AI-generated pattern checklist
// - similarity: duplicate-content check against canned templates
// - frequency: top content words
// - analyzer: assembles the full report

pub mod analyzer;
pub mod frequency;
pub mod patterns;
pub mod readability;
pub mod similarity;
pub mod spam;

pub use analyzer::{language_name, sentiment_label, TextAnalyzer, UNKNOWN_LANGUAGE};
pub use frequency::word_frequency;
pub use patterns::detect_ai_patterns;
pub use readability::{calculate_readability, flesch_reading_ease, readability_level};
pub use similarity::{check_duplicate_content, jaccard_similarity, DUPLICATE_THRESHOLD};
pub use spam::calculate_spam_density;

use crate::models::TextReport;

/// Round half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Analyze with the built-in lexicon and primitives.
pub fn analyze_text(text: &str) -> TextReport {
    TextAnalyzer::default().analyze_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(42.857, 1), 42.9);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(8.0, 1), 8.0);
    }

    #[test]
    fn test_analyze_text_entry_point() {
        assert_eq!(analyze_text(""), TextReport::empty());
    }
}
