// Scan Composition
// Caller-side glue: runs collaborators, then merges their verdicts with engine output.

use tracing::{info, warn};

use super::detection::{round_to, TextAnalyzer};
use super::providers::{FeatureExtractor, ProviderError, ReviewClassifier, UrlClassifier};
use super::trust::TrustCalculator;
use crate::models::{FeatureVector, MlPrediction, ReviewAssessment, UrlScanResult, Verdict};

pub const FAKE_REVIEW_RESULT: &str = "Fake / Spam Review";
pub const FAKE_REVIEW_REASON: &str = "Detected unnatural word patterns or excessive sentiment.";
pub const REAL_REVIEW_RESULT: &str = "Real Review";
pub const REAL_REVIEW_REASON: &str = "Text seems natural and not repetitive.";

pub fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Benign => "Safe",
        Verdict::Malicious => "Phishing",
    }
}

/// Extract features, classify, score and recommend.
///
/// Classifier failures propagate. Extraction failures propagate too because the
/// classifier cannot run without features.
pub fn scan_url(
    url: &str,
    extractor: &dyn FeatureExtractor,
    classifier: &dyn UrlClassifier,
    calculator: &TrustCalculator<'_>,
) -> Result<UrlScanResult, ProviderError> {
    let raw = extractor.extract(url)?;
    let features = FeatureVector::from_slice(&raw).map_err(|e| ProviderError::Extraction(e.to_string()))?;
    let verdict = classifier.predict(&features)?;

    Ok(build_scan_result(url, verdict, Some(features), calculator))
}

/// Score a URL whose verdict is already known; features are optional.
pub fn build_scan_result(
    url: &str,
    verdict: Verdict,
    features: Option<FeatureVector>,
    calculator: &TrustCalculator<'_>,
) -> UrlScanResult {
    let breakdown = calculator.breakdown(url, verdict, features.as_ref());
    let result = UrlScanResult {
        url: url.to_string(),
        verdict,
        label: verdict_label(verdict).to_string(),
        trust_score: breakdown.score,
        breakdown,
        category: calculator.recommendation_category(url, verdict),
        recommendations: calculator.get_recommendations(url, verdict),
        features,
    };
    info!(url, ?verdict, score = result.trust_score, "scan.url.completed");
    result
}

/// Classify a review and attach the full text report.
pub fn assess_review(
    text: &str,
    classifier: &dyn ReviewClassifier,
    analyzer: &TextAnalyzer<'_>,
) -> Result<ReviewAssessment, ProviderError> {
    let is_fake = classifier.predict(text)?;
    let raw_confidence = classifier.predict_confidence(text)?;
    if !(0.0..=1.0).contains(&raw_confidence) {
        warn!(confidence = raw_confidence, "scan.review.invalid_confidence");
        return Err(ProviderError::InvalidConfidence(raw_confidence));
    }
    let confidence = round_to(raw_confidence * 100.0, 2);

    let (result, reason) = if is_fake {
        (FAKE_REVIEW_RESULT, FAKE_REVIEW_REASON)
    } else {
        (REAL_REVIEW_RESULT, REAL_REVIEW_REASON)
    };

    let assessment = ReviewAssessment {
        result: result.to_string(),
        reason: reason.to_string(),
        confidence,
        ml_prediction: MlPrediction { is_fake, confidence },
        analysis: analyzer.analyze_text(text),
    };
    info!(is_fake, confidence, "scan.review.completed");
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecommendationCategory, FEATURE_COUNT};
    use crate::services::providers::StaticFeatures;

    struct AlwaysPhishing;

    impl UrlClassifier for AlwaysPhishing {
        fn predict(&self, _features: &FeatureVector) -> Result<Verdict, ProviderError> {
            Ok(Verdict::Malicious)
        }
    }

    struct BrokenClassifier;

    impl UrlClassifier for BrokenClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<Verdict, ProviderError> {
            Err(ProviderError::Classifier("model not loaded".to_string()))
        }
    }

    struct KeywordReviewClassifier {
        confidence: f64,
    }

    impl ReviewClassifier for KeywordReviewClassifier {
        fn predict(&self, text: &str) -> Result<bool, ProviderError> {
            Ok(text.contains("best buy ever"))
        }

        fn predict_confidence(&self, _text: &str) -> Result<f64, ProviderError> {
            Ok(self.confidence)
        }
    }

    #[test]
    fn test_scan_url_phishing() {
        let extractor = StaticFeatures(vec![0; FEATURE_COUNT]);
        let calc = TrustCalculator::default();
        let result = scan_url("http://paypal-verify.tk/login", &extractor, &AlwaysPhishing, &calc).unwrap();

        assert_eq!(result.label, "Phishing");
        assert_eq!(result.category, RecommendationCategory::Banking);
        assert!(result.features.is_some());
        assert_eq!(result.trust_score, result.breakdown.score);
        // 60 - 45 + (paypal, verify, login: -9) - 10 (.tk)
        assert_eq!(result.trust_score, 0);
        assert_eq!(result.breakdown.raw_total, -4);
    }

    #[test]
    fn test_scan_url_propagates_classifier_error() {
        let extractor = StaticFeatures(vec![0; FEATURE_COUNT]);
        let calc = TrustCalculator::default();
        let err = scan_url("http://example.com", &extractor, &BrokenClassifier, &calc).unwrap_err();
        assert!(matches!(err, ProviderError::Classifier(_)));
    }

    #[test]
    fn test_scan_url_rejects_short_vector() {
        let extractor = StaticFeatures(vec![0; 5]);
        let calc = TrustCalculator::default();
        let err = scan_url("http://example.com", &extractor, &AlwaysPhishing, &calc).unwrap_err();
        assert!(matches!(err, ProviderError::Extraction(_)));
    }

    #[test]
    fn test_build_scan_result_safe() {
        let calc = TrustCalculator::default();
        let result = build_scan_result("https://github.com", Verdict::Benign, None, &calc);
        assert_eq!(result.label, "Safe");
        assert_eq!(result.recommendations, vec![crate::services::trust::SAFE_MESSAGE]);
        assert!(result.features.is_none());
    }

    #[test]
    fn test_assess_fake_review() {
        let classifier = KeywordReviewClassifier { confidence: 0.91234 };
        let analyzer = TextAnalyzer::default();
        let a = assess_review("love this product great quality best buy ever", &classifier, &analyzer).unwrap();

        assert_eq!(a.result, FAKE_REVIEW_RESULT);
        assert_eq!(a.reason, FAKE_REVIEW_REASON);
        assert_eq!(a.confidence, 91.23);
        assert!(a.ml_prediction.is_fake);
        assert_eq!(a.analysis.basic_metrics.word_count, 8);
    }

    #[test]
    fn test_assess_real_review() {
        let classifier = KeywordReviewClassifier { confidence: 0.7 };
        let analyzer = TextAnalyzer::default();
        let a = assess_review("Sturdy hinge, arrived on time.", &classifier, &analyzer).unwrap();
        assert_eq!(a.result, REAL_REVIEW_RESULT);
        assert!(!a.ml_prediction.is_fake);
    }

    #[test]
    fn test_assess_rejects_bad_confidence() {
        let classifier = KeywordReviewClassifier { confidence: 1.7 };
        let analyzer = TextAnalyzer::default();
        let err = assess_review("text", &classifier, &analyzer).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfidence(_)));
    }
}
