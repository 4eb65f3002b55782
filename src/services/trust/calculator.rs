// Trust Score Calculator
// Base score + verdict + feature deltas + URL patterns + reputation, clamped to [0, 100].

use tracing::{debug, warn};

use super::features::feature_adjustment;
use super::patterns::{analyze_url_patterns, check_domain_reputation};
use super::recommendations::{get_recommendations, recommendation_category};
use crate::models::{FeatureVector, RecommendationCategory, ScoreBreakdown, Verdict};
use crate::services::lexicon::Lexicon;
use crate::services::providers::FeatureExtractor;

pub const BASE_SCORE: i32 = 60;
pub const BENIGN_ADJUSTMENT: i32 = 25;
pub const MALICIOUS_ADJUSTMENT: i32 = -45;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy)]
pub struct TrustCalculator<'a> {
    lexicon: &'a Lexicon,
}

impl Default for TrustCalculator<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl<'a> TrustCalculator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Every contribution to the score for `url`.
    pub fn breakdown(&self, url: &str, verdict: Verdict, features: Option<&FeatureVector>) -> ScoreBreakdown {
        let verdict_adjustment = match verdict {
            Verdict::Benign => BENIGN_ADJUSTMENT,
            Verdict::Malicious => MALICIOUS_ADJUSTMENT,
        };
        let feature_adjustment = features.map(feature_adjustment).unwrap_or(0);
        let pattern_adjustment = analyze_url_patterns(url, self.lexicon);
        let reputation_adjustment = check_domain_reputation(url, self.lexicon);

        let raw_total =
            BASE_SCORE + verdict_adjustment + feature_adjustment + pattern_adjustment + reputation_adjustment;
        let score = raw_total.clamp(MIN_SCORE, MAX_SCORE) as u8;

        let breakdown = ScoreBreakdown {
            base: BASE_SCORE,
            verdict_adjustment,
            feature_adjustment,
            pattern_adjustment,
            reputation_adjustment,
            features_applied: features.is_some(),
            raw_total,
            score,
        };
        debug!(url, ?verdict, ?breakdown, "trust.score");
        breakdown
    }

    pub fn calculate_trust_score(&self, url: &str, verdict: Verdict, features: Option<&FeatureVector>) -> u8 {
        self.breakdown(url, verdict, features).score
    }

    /// Scores from a raw positional vector; a short or out-of-range vector is treated as absent.
    pub fn calculate_from_raw(&self, url: &str, verdict: Verdict, raw: Option<&[i64]>) -> ScoreBreakdown {
        // All or nothing: one bad slot, even one no rule reads, drops every feature delta.
        let features = raw.and_then(|values| match FeatureVector::from_slice(values) {
            Ok(fv) => Some(fv),
            Err(e) => {
                debug!(url, error = %e, "trust.features.ignored");
                None
            }
        });
        self.breakdown(url, verdict, features.as_ref())
    }

    /// Runs `extractor` first; any extraction failure degrades to "no features".
    pub fn calculate_with_extractor(
        &self,
        url: &str,
        verdict: Verdict,
        extractor: &dyn FeatureExtractor,
    ) -> ScoreBreakdown {
        match extractor.extract(url) {
            Ok(values) => self.calculate_from_raw(url, verdict, Some(&values)),
            Err(e) => {
                warn!(url, error = %e, "trust.features.extraction_failed");
                self.breakdown(url, verdict, None)
            }
        }
    }

    pub fn analyze_url_patterns(&self, url: &str) -> i32 {
        analyze_url_patterns(url, self.lexicon)
    }

    pub fn check_domain_reputation(&self, url: &str) -> i32 {
        check_domain_reputation(url, self.lexicon)
    }

    pub fn get_recommendations(&self, url: &str, verdict: Verdict) -> Vec<String> {
        get_recommendations(url, verdict)
    }

    pub fn recommendation_category(&self, url: &str, verdict: Verdict) -> RecommendationCategory {
        recommendation_category(url, verdict)
    }
}
