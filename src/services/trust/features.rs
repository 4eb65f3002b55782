// Feature-based adjustments
// Fixed per-feature deltas; favourable and unfavourable values are checked independently.

use crate::models::{FeatureVector, Ternary};

#[derive(Debug, Clone, Copy)]
pub struct FeatureRule {
    pub name: &'static str,
    pub read: fn(&FeatureVector) -> Ternary,
    pub when: Ternary,
    pub delta: i32,
}

pub const FEATURE_RULES: &[FeatureRule] = &[
    FeatureRule { name: "https", read: |f| f.https, when: Ternary::Positive, delta: 15 },
    FeatureRule { name: "age_of_domain", read: |f| f.age_of_domain, when: Ternary::Positive, delta: 12 },
    FeatureRule { name: "dns_recording", read: |f| f.dns_recording, when: Ternary::Positive, delta: 8 },
    FeatureRule { name: "using_ip", read: |f| f.using_ip, when: Ternary::Positive, delta: 8 },
    FeatureRule { name: "short_url", read: |f| f.short_url, when: Ternary::Positive, delta: 7 },
    FeatureRule {
        name: "domain_registration_length",
        read: |f| f.domain_registration_length,
        when: Ternary::Positive,
        delta: 6,
    },
    FeatureRule { name: "using_ip", read: |f| f.using_ip, when: Ternary::Negative, delta: -20 },
    FeatureRule { name: "short_url", read: |f| f.short_url, when: Ternary::Negative, delta: -18 },
    FeatureRule { name: "at_symbol", read: |f| f.at_symbol, when: Ternary::Negative, delta: -15 },
    FeatureRule { name: "redirecting", read: |f| f.redirecting, when: Ternary::Negative, delta: -8 },
    FeatureRule { name: "prefix_suffix", read: |f| f.prefix_suffix, when: Ternary::Negative, delta: -7 },
    FeatureRule { name: "sub_domains", read: |f| f.sub_domains, when: Ternary::Negative, delta: -6 },
    FeatureRule { name: "https", read: |f| f.https, when: Ternary::Negative, delta: -12 },
];

/// Rules that fire for `features`.
pub fn matching_rules(features: &FeatureVector) -> impl Iterator<Item = &'static FeatureRule> + '_ {
    FEATURE_RULES.iter().filter(move |rule| (rule.read)(features) == rule.when)
}

pub fn feature_adjustment(features: &FeatureVector) -> i32 {
    matching_rules(features).map(|rule| rule.delta).sum()
}
