// AI-generated pattern checklist
// Each check fires independently; results keep check order.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::models::AiPattern;
use crate::services::lexicon::Lexicon;
use crate::services::linguistics::{PartOfSpeechTagger, WordClass};
use crate::services::text_processor::{word_tokenize, word_tokenize_lower};

const MIN_SENTENCES_FOR_RHYTHM: usize = 3;
const MAX_DISTINCT_SENTENCE_LENGTHS: usize = 2;
const MIN_WORDS_FOR_ADJECTIVES: usize = 10;
const ADJECTIVE_RATIO_LIMIT: f64 = 0.15;

fn template_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:i (?:love|like|enjoy|appreciate|recommend)|this (?:is|was) (?:great|amazing|excellent))\b")
            .expect("template regex")
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `word` appears in `haystack` bounded by non-word characters on both sides.
pub fn contains_whole_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

pub fn has_repetitive_sentence_lengths(sentences: &[String]) -> bool {
    if sentences.len() <= MIN_SENTENCES_FOR_RHYTHM {
        return false;
    }
    let lengths: HashSet<usize> = sentences.iter().map(|s| word_tokenize(s).len()).collect();
    lengths.len() <= MAX_DISTINCT_SENTENCE_LENGTHS
}

pub fn has_excessive_adjectives(words: &[String], tagger: &dyn PartOfSpeechTagger) -> bool {
    if words.len() <= MIN_WORDS_FOR_ADJECTIVES {
        return false;
    }
    let adjectives = tagger
        .tag(words)
        .into_iter()
        .filter(|class| *class == WordClass::Adjective)
        .count();
    adjectives as f64 / words.len() as f64 > ADJECTIVE_RATIO_LIMIT
}

pub fn detect_ai_patterns(
    text: &str,
    sentences: &[String],
    lexicon: &Lexicon,
    tagger: &dyn PartOfSpeechTagger,
) -> Vec<AiPattern> {
    let mut patterns = Vec::new();
    let lower = text.to_lowercase();

    if has_repetitive_sentence_lengths(sentences) {
        patterns.push(AiPattern::RepetitiveSentenceLengths);
    }

    if has_excessive_adjectives(&word_tokenize_lower(text), tagger) {
        patterns.push(AiPattern::ExcessiveAdjectives);
    }

    if lexicon.formal_transitions.iter().any(|w| contains_whole_word(&lower, w)) {
        patterns.push(AiPattern::FormalTransitions);
    }

    if template_re().is_match(&lower) {
        patterns.push(AiPattern::TemplatePhrases);
    }

    patterns
}
