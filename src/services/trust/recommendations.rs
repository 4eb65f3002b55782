// Safety recommendations
// First matching rule wins: banking/login > shopping > news > general.

use crate::models::{RecommendationCategory, Verdict};

pub const SAFE_MESSAGE: &str = "This URL appears safe to visit.";

#[derive(Debug, Clone, Copy)]
struct RecommendationRule {
    category: RecommendationCategory,
    keywords: &'static [&'static str],
    advice: &'static str,
    alternatives: &'static [&'static str],
}

const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        category: RecommendationCategory::Banking,
        keywords: &["bank", "paypal", "login"],
        advice: "Use official banking apps or visit verified bank websites directly.",
        alternatives: &["bankofamerica.com", "chase.com", "paypal.com"],
    },
    RecommendationRule {
        category: RecommendationCategory::Shopping,
        keywords: &["amazon", "shop"],
        advice: "Shop only on verified e-commerce sites.",
        alternatives: &["amazon.com", "ebay.com", "walmart.com"],
    },
    RecommendationRule {
        category: RecommendationCategory::News,
        keywords: &["news", "article"],
        advice: "Read news from reputable sources.",
        alternatives: &["nytimes.com", "bbc.com", "cnn.com"],
    },
];

const GENERAL_RULE: RecommendationRule = RecommendationRule {
    category: RecommendationCategory::General,
    keywords: &[],
    advice: "Avoid clicking suspicious links.",
    alternatives: &["google.com", "wikipedia.org", "youtube.com"],
};

/// Authority segment of `url` by plain string splitting, lower-cased.
/// Input without a scheme separator is used whole.
pub fn sniff_domain(url: &str) -> String {
    let lower = url.to_lowercase();
    if lower.contains("://") {
        lower.split('/').nth(2).unwrap_or("").to_string()
    } else {
        lower
    }
}

fn rule_for(domain: &str) -> &'static RecommendationRule {
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| domain.contains(k)))
        .unwrap_or(&GENERAL_RULE)
}

pub fn recommendation_category(url: &str, verdict: Verdict) -> RecommendationCategory {
    match verdict {
        Verdict::Benign => RecommendationCategory::Safe,
        Verdict::Malicious => rule_for(&sniff_domain(url)).category,
    }
}

pub fn get_recommendations(url: &str, verdict: Verdict) -> Vec<String> {
    match verdict {
        Verdict::Benign => vec![SAFE_MESSAGE.to_string()],
        Verdict::Malicious => {
            let rule = rule_for(&sniff_domain(url));
            vec![
                rule.advice.to_string(),
                format!("Recommended safe alternatives: {}", rule.alternatives.join(", ")),
            ]
        }
    }
}
