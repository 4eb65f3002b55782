// Collaborator Interfaces
// Feature extraction and classifiers live outside the engines; they are reached through these traits.

use thiserror::Error;

use crate::models::{FeatureVector, Verdict};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("feature extraction failed: {0}")]
    Extraction(String),
    #[error("classifier failed: {0}")]
    Classifier(String),
    #[error("classifier returned confidence {0} outside [0, 1]")]
    InvalidConfidence(f64),
}

/// Turns a raw URL into the positional 30-slot feature layout.
pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, url: &str) -> Result<Vec<i64>, ProviderError>;
}

/// Phishing classifier over extracted URL features.
pub trait UrlClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Verdict, ProviderError>;
}

/// Fake-review classifier. `predict` returns `true` for fake/spam text.
pub trait ReviewClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Result<bool, ProviderError>;

    /// Probability of the predicted class, in [0, 1].
    fn predict_confidence(&self, text: &str) -> Result<f64, ProviderError>;
}

/// Extractor backed by a precomputed vector, handy for callers that already ran extraction.
#[derive(Debug, Clone)]
pub struct StaticFeatures(pub Vec<i64>);

impl FeatureExtractor for StaticFeatures {
    fn extract(&self, _url: &str) -> Result<Vec<i64>, ProviderError> {
        Ok(self.0.clone())
    }
}

/// Verdict computed elsewhere, e.g. passed on the command line.
#[derive(Debug, Clone, Copy)]
pub struct StaticVerdict(pub Verdict);

impl UrlClassifier for StaticVerdict {
    fn predict(&self, _features: &FeatureVector) -> Result<Verdict, ProviderError> {
        Ok(self.0)
    }
}

/// Fake-review prediction computed elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct PrecomputedReview {
    pub is_fake: bool,
    pub confidence: f64,
}

impl ReviewClassifier for PrecomputedReview {
    fn predict(&self, _text: &str) -> Result<bool, ProviderError> {
        Ok(self.is_fake)
    }

    fn predict_confidence(&self, _text: &str) -> Result<f64, ProviderError> {
        Ok(self.confidence)
    }
}
