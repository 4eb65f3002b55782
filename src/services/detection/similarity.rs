// Duplicate-content check
// Jaccard similarity of token sets against the canned spam templates.

use std::collections::HashSet;

use super::round_to;
use crate::models::DuplicateContent;
use crate::services::lexicon::Lexicon;
use crate::services::text_processor::word_tokenize;

pub const DUPLICATE_THRESHOLD: f64 = 0.7;

fn token_set(text: &str) -> HashSet<String> {
    word_tokenize(text).into_iter().collect()
}

/// Intersection over union; 0 when both sets are empty.
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

pub fn check_duplicate_content(text: &str, lexicon: &Lexicon) -> DuplicateContent {
    let text_words = token_set(text.to_lowercase().trim());

    let max_similarity = lexicon
        .spam_templates
        .iter()
        .map(|template| jaccard_similarity(&token_set(template), &text_words))
        .fold(0.0_f64, f64::max);

    DuplicateContent {
        is_duplicate: max_similarity > DUPLICATE_THRESHOLD,
        confidence: round_to(max_similarity * 100.0, 1),
    }
}
