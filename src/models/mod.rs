// TrustLens Data Models
// Shared by the trust calculator, the text analyzer and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============ Classifier Verdict ============

/// Binary verdict handed over by an external classifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Malicious,
    Benign,
}

impl Verdict {
    /// Map a raw classifier label. Only `1` counts as benign.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Self::Benign
        } else {
            Self::Malicious
        }
    }
}

// ============ Feature Vector ============

pub const FEATURE_COUNT: usize = 30;

/// One ternary feature value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Ternary {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Ternary {
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }
}

impl From<Ternary> for i8 {
    fn from(value: Ternary) -> Self {
        value.as_i8()
    }
}

impl TryFrom<i8> for Ternary {
    type Error = FeatureVectorError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Positive),
            other => Err(FeatureVectorError::InvalidValue { index: None, value: other as i64 }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureVectorError {
    #[error("feature vector too short: expected {expected}, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("feature value {value} out of range (index {index:?})")]
    InvalidValue { index: Option<usize>, value: i64 },
}

/// Structural properties of a URL, one labelled field per position of the
/// 30-slot phishing feature layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub using_ip: Ternary,
    pub long_url: Ternary,
    pub short_url: Ternary,
    pub at_symbol: Ternary,
    pub redirecting: Ternary,
    pub prefix_suffix: Ternary,
    pub sub_domains: Ternary,
    pub https: Ternary,
    pub domain_registration_length: Ternary,
    pub favicon: Ternary,
    pub non_standard_port: Ternary,
    pub https_domain_url: Ternary,
    pub request_url: Ternary,
    pub anchor_url: Ternary,
    pub links_in_script_tags: Ternary,
    pub server_form_handler: Ternary,
    pub info_email: Ternary,
    pub abnormal_url: Ternary,
    pub website_forwarding: Ternary,
    pub status_bar_customization: Ternary,
    pub disable_right_click: Ternary,
    pub using_popup_window: Ternary,
    pub iframe_redirection: Ternary,
    pub age_of_domain: Ternary,
    pub dns_recording: Ternary,
    pub website_traffic: Ternary,
    pub page_rank: Ternary,
    pub google_index: Ternary,
    pub links_pointing_to_page: Ternary,
    pub stats_report: Ternary,
}

impl FeatureVector {
    /// Build from the positional layout produced by feature extractors.
    /// Extra trailing values are ignored.
    pub fn from_slice(values: &[i64]) -> Result<Self, FeatureVectorError> {
        if values.len() < FEATURE_COUNT {
            return Err(FeatureVectorError::TooShort {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }

        let mut slots = [Ternary::Neutral; FEATURE_COUNT];
        for (index, (slot, &raw)) in slots.iter_mut().zip(values.iter()).enumerate() {
            *slot = i8::try_from(raw)
                .ok()
                .and_then(|v| Ternary::try_from(v).ok())
                .ok_or(FeatureVectorError::InvalidValue { index: Some(index), value: raw })?;
        }

        let [using_ip, long_url, short_url, at_symbol, redirecting, prefix_suffix, sub_domains, https,
            domain_registration_length, favicon, non_standard_port, https_domain_url, request_url,
            anchor_url, links_in_script_tags, server_form_handler, info_email, abnormal_url,
            website_forwarding, status_bar_customization, disable_right_click, using_popup_window,
            iframe_redirection, age_of_domain, dns_recording, website_traffic, page_rank, google_index,
            links_pointing_to_page, stats_report] = slots;

        Ok(Self {
            using_ip,
            long_url,
            short_url,
            at_symbol,
            redirecting,
            prefix_suffix,
            sub_domains,
            https,
            domain_registration_length,
            favicon,
            non_standard_port,
            https_domain_url,
            request_url,
            anchor_url,
            links_in_script_tags,
            server_form_handler,
            info_email,
            abnormal_url,
            website_forwarding,
            status_bar_customization,
            disable_right_click,
            using_popup_window,
            iframe_redirection,
            age_of_domain,
            dns_recording,
            website_traffic,
            page_rank,
            google_index,
            links_pointing_to_page,
            stats_report,
        })
    }

    /// Positional layout, inverse of [`FeatureVector::from_slice`].
    pub fn to_array(&self) -> [i8; FEATURE_COUNT] {
        [
            self.using_ip,
            self.long_url,
            self.short_url,
            self.at_symbol,
            self.redirecting,
            self.prefix_suffix,
            self.sub_domains,
            self.https,
            self.domain_registration_length,
            self.favicon,
            self.non_standard_port,
            self.https_domain_url,
            self.request_url,
            self.anchor_url,
            self.links_in_script_tags,
            self.server_form_handler,
            self.info_email,
            self.abnormal_url,
            self.website_forwarding,
            self.status_bar_customization,
            self.disable_right_click,
            self.using_popup_window,
            self.iframe_redirection,
            self.age_of_domain,
            self.dns_recording,
            self.website_traffic,
            self.page_rank,
            self.google_index,
            self.links_pointing_to_page,
            self.stats_report,
        ]
        .map(Ternary::as_i8)
    }
}

// ============ Trust Score ============

/// Every additive contribution to a trust score, before and after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreBreakdown {
    pub base: i32,
    pub verdict_adjustment: i32,
    pub feature_adjustment: i32,
    pub pattern_adjustment: i32,
    pub reputation_adjustment: i32,
    pub features_applied: bool,
    pub raw_total: i32,
    pub score: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Banking,
    Shopping,
    News,
    General,
    Safe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlScanResult {
    pub url: String,
    pub verdict: Verdict,
    pub label: String,
    pub trust_score: u8,
    pub breakdown: ScoreBreakdown,
    pub category: RecommendationCategory,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
}

// ============ Text Report ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BasicMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub avg_words_per_sentence: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "N/A")]
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub score: f64,
    pub level: ReadabilityLevel,
}

impl Readability {
    pub fn not_applicable() -> Self {
        Self {
            score: 0.0,
            level: ReadabilityLevel::NotApplicable,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpamAnalysis {
    pub density: f64,
    pub spam_words: usize,
    pub total_words: usize,
}

/// Heuristic markers of machine-written or templated reviews.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum AiPattern {
    #[serde(rename = "Repetitive sentence lengths")]
    RepetitiveSentenceLengths,
    #[serde(rename = "Excessive use of adjectives")]
    ExcessiveAdjectives,
    #[serde(rename = "Formal transition words")]
    FormalTransitions,
    #[serde(rename = "Template-like phrases")]
    TemplatePhrases,
}

impl fmt::Display for AiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::RepetitiveSentenceLengths => "Repetitive sentence lengths",
            Self::ExcessiveAdjectives => "Excessive use of adjectives",
            Self::FormalTransitions => "Formal transition words",
            Self::TemplatePhrases => "Template-like phrases",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DuplicateContent {
    pub is_duplicate: bool,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdvancedDetection {
    pub ai_generated_patterns: Vec<AiPattern>,
    pub duplicate_content: DuplicateContent,
}

/// Token and its occurrence count; serialized as a `[token, count]` pair.
pub type WordCount = (String, usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    pub basic_metrics: BasicMetrics,
    pub readability: Readability,
    pub sentiment: Sentiment,
    pub language: String,
    pub spam_analysis: SpamAnalysis,
    pub advanced_detection: AdvancedDetection,
    pub word_frequency: Vec<WordCount>,
}

impl TextReport {
    /// Neutral report used for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self {
            basic_metrics: BasicMetrics::default(),
            readability: Readability::not_applicable(),
            sentiment: Sentiment::default(),
            language: "unknown".to_string(),
            spam_analysis: SpamAnalysis::default(),
            advanced_detection: AdvancedDetection::default(),
            word_frequency: Vec::new(),
        }
    }
}

// ============ Review Assessment ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub is_fake: bool,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAssessment {
    pub result: String,
    pub reason: String,
    pub confidence: f64,
    pub ml_prediction: MlPrediction,
    pub analysis: TextReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> Vec<i64> {
        (0..FEATURE_COUNT as i64).map(|i| (i % 3) - 1).collect()
    }

    #[test]
    fn test_verdict_from_label() {
        assert_eq!(Verdict::from_label(1), Verdict::Benign);
        assert_eq!(Verdict::from_label(0), Verdict::Malicious);
        assert_eq!(Verdict::from_label(-1), Verdict::Malicious);
    }

    #[test]
    fn test_feature_vector_keeps_positional_order() {
        let values = sample_values();
        let fv = FeatureVector::from_slice(&values).unwrap();
        assert_eq!(fv.using_ip, Ternary::Negative);
        assert_eq!(fv.https, Ternary::Neutral);
        assert_eq!(fv.age_of_domain, Ternary::Positive);
        assert_eq!(fv.dns_recording, Ternary::Negative);
        let back: Vec<i64> = fv.to_array().iter().map(|&v| v as i64).collect();
        assert_eq!(back, values);
    }

    #[test]
    fn test_feature_vector_rejects_short_input() {
        let err = FeatureVector::from_slice(&[1; 29]).unwrap_err();
        assert_eq!(err, FeatureVectorError::TooShort { expected: 30, actual: 29 });
    }

    #[test]
    fn test_feature_vector_rejects_out_of_range_value() {
        let mut values = vec![0; FEATURE_COUNT];
        values[12] = 2;
        let err = FeatureVector::from_slice(&values).unwrap_err();
        assert_eq!(err, FeatureVectorError::InvalidValue { index: Some(12), value: 2 });
    }

    #[test]
    fn test_empty_report_schema() {
        let json = serde_json::to_value(TextReport::empty()).unwrap();
        for key in [
            "basic_metrics",
            "readability",
            "sentiment",
            "language",
            "spam_analysis",
            "advanced_detection",
            "word_frequency",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["readability"]["level"], "N/A");
        assert_eq!(json["sentiment"]["label"], "neutral");
    }

    #[test]
    fn test_ai_pattern_serializes_as_message() {
        let json = serde_json::to_string(&AiPattern::TemplatePhrases).unwrap();
        assert_eq!(json, "\"Template-like phrases\"");
        assert_eq!(AiPattern::ExcessiveAdjectives.to_string(), "Excessive use of adjectives");
    }

    #[test]
    fn test_word_frequency_serializes_as_pairs() {
        let mut report = TextReport::empty();
        report.word_frequency = vec![("great".to_string(), 2)];
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["word_frequency"][0][0], "great");
        assert_eq!(json["word_frequency"][0][1], 2);
    }
}
