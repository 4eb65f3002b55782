// Readability
// Simplified Flesch Reading Ease using characters (not syllables) per word.

use super::round_to;
use crate::models::{Readability, ReadabilityLevel};

/// Unclamped score.
pub fn flesch_reading_ease(avg_sentence_len: f64, avg_word_len: f64) -> f64 {
    206.835 - 1.015 * avg_sentence_len - 84.6 * avg_word_len
}

pub fn readability_level(score: f64) -> ReadabilityLevel {
    match score {
        s if s >= 90.0 => ReadabilityLevel::VeryEasy,
        s if s >= 80.0 => ReadabilityLevel::Easy,
        s if s >= 70.0 => ReadabilityLevel::FairlyEasy,
        s if s >= 60.0 => ReadabilityLevel::Standard,
        s if s >= 50.0 => ReadabilityLevel::FairlyDifficult,
        s if s >= 30.0 => ReadabilityLevel::Difficult,
        _ => ReadabilityLevel::VeryDifficult,
    }
}

pub fn calculate_readability(sentences: &[String], words: &[String]) -> Readability {
    if sentences.is_empty() || words.is_empty() {
        return Readability::not_applicable();
    }

    let avg_sentence_len = words.len() as f64 / sentences.len() as f64;
    let avg_word_len = words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64;
    let score = flesch_reading_ease(avg_sentence_len, avg_word_len).clamp(0.0, 100.0);

    Readability {
        score: round_to(score, 1),
        level: readability_level(score),
    }
}
