// Word frequency profile

use std::collections::HashMap;

use crate::models::WordCount;
use crate::services::lexicon::Lexicon;
use crate::services::text_processor::content_tokens;

pub const TOP_WORDS: usize = 10;
const MIN_WORD_CHARS: usize = 3;

/// Most frequent content words, count descending; equal counts keep first-seen order.
pub fn word_frequency(text: &str, lexicon: &Lexicon, top_n: usize) -> Vec<WordCount> {
    let mut order: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in content_tokens(text, lexicon) {
        if word.chars().count() < MIN_WORD_CHARS {
            continue;
        }
        match index.get(&word) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(word.clone(), order.len());
                order.push((word, 1));
            }
        }
    }

    // Stable sort keeps insertion order among ties.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(top_n);
    order
}
