// TrustLens Core Services
// Trust scoring and text authenticity engines plus their supporting pieces

pub mod config_store;
pub mod detection;
pub mod lexicon;
pub mod linguistics;
pub mod providers;
pub mod scan;
pub mod text_processor;
pub mod trust;

pub use config_store::*;
pub use lexicon::{Lexicon, LexiconConfig};
pub use providers::*;
pub use scan::{assess_review, build_scan_result, scan_url, verdict_label};
pub use text_processor::{sent_tokenize, word_tokenize};

// Re-export engine entry points
pub use detection::{analyze_text, TextAnalyzer};
pub use trust::{
    analyze_url_patterns,
    calculate_trust_score,
    check_domain_reputation,
    get_recommendations,
    TrustCalculator,
};
