// Trust Module
// URL trust scoring organized into specialized submodules:
// - features: fixed per-feature deltas over the labelled feature vector
// - patterns: lexical URL patterns and domain reputation
// - recommendations: safety advice keyed on domain cues
// - calculator: combines everything into a clamped score

pub mod calculator;
pub mod features;
pub mod patterns;
pub mod recommendations;

pub use calculator::{TrustCalculator, BASE_SCORE, BENIGN_ADJUSTMENT, MALICIOUS_ADJUSTMENT};
pub use features::{feature_adjustment, FEATURE_RULES};
pub use patterns::{parse_url_parts, MALFORMED_URL_PENALTY, REPUTATION_PARSE_PENALTY};
pub use recommendations::{recommendation_category, sniff_domain, SAFE_MESSAGE};

use crate::models::Verdict;
use crate::services::lexicon::Lexicon;

/// Score with the built-in lexicon. A missing, short or invalid vector skips feature deltas.
pub fn calculate_trust_score(url: &str, verdict: Verdict, features: Option<&[i64]>) -> u8 {
    TrustCalculator::default().calculate_from_raw(url, verdict, features).score
}

pub fn get_recommendations(url: &str, verdict: Verdict) -> Vec<String> {
    recommendations::get_recommendations(url, verdict)
}

pub fn analyze_url_patterns(url: &str) -> i32 {
    patterns::analyze_url_patterns(url, Lexicon::builtin())
}

pub fn check_domain_reputation(url: &str) -> i32 {
    patterns::check_domain_reputation(url, Lexicon::builtin())
}
