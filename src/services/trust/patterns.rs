// URL pattern and domain reputation heuristics

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::services::lexicon::Lexicon;

pub const MALFORMED_URL_PENALTY: i32 = -10;
pub const REPUTATION_PARSE_PENALTY: i32 = -5;

const TRUSTED_BRAND_BONUS: i32 = 10;
const SUSPICIOUS_KEYWORD_PENALTY: i32 = -3;
const SEPARATOR_RUN_PENALTY: i32 = -5;
const LONG_DOMAIN_PENALTY: i32 = -5;
const LONG_URL_PENALTY: i32 = -3;
const HTTPS_BONUS: i32 = 5;
const MAX_DOMAIN_CHARS: usize = 50;
const MAX_URL_CHARS: usize = 100;

const REPUTABLE_BONUS: i32 = 5;
const ABUSED_TLD_PENALTY: i32 = -10;

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

fn separator_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_]{2,}").expect("separator regex"))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlSplitError {
    #[error("unbalanced brackets in authority: {0}")]
    InvalidIpv6(String),
}

/// Lower-cased authority and path of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Raw authority text, e.g. `user:pass@host:port`; empty without `//`.
    pub domain: String,
    pub path: String,
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Lexical split into scheme, authority and path. Hosts are kept as written
/// (no IDNA, no default-port removal); input without a scheme has an empty
/// authority and is all path.
pub fn parse_url_parts(url: &str) -> Result<UrlParts, UrlSplitError> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut scheme = String::new();
    let mut rest = cleaned.as_str();
    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        let starts_alpha = candidate.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && candidate.chars().all(is_scheme_char) {
            scheme = candidate.to_lowercase();
            rest = &rest[i + 1..];
        }
    }

    let mut authority = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        authority = &after[..end];
        rest = &after[end..];
        if authority.contains('[') != authority.contains(']') {
            return Err(UrlSplitError::InvalidIpv6(authority.to_string()));
        }
    }

    let mut path = rest;
    if let Some(i) = path.find('#') {
        path = &path[..i];
    }
    if let Some(i) = path.find('?') {
        path = &path[..i];
    }
    if PARAM_SCHEMES.contains(&scheme.as_str()) {
        path = strip_params(path);
    }

    Ok(UrlParts {
        domain: authority.to_lowercase(),
        path: path.to_lowercase(),
    })
}

/// Drops `;params`, looking only after the last `/` when there is one.
fn strip_params(path: &str) -> &str {
    let from = path.rfind('/').unwrap_or(0);
    match path[from..].find(';') {
        Some(i) => &path[..from + i],
        None => path,
    }
}

/// Lexical bonus/penalty for a URL. Unparsable input yields [`MALFORMED_URL_PENALTY`].
pub fn analyze_url_patterns(url: &str, lexicon: &Lexicon) -> i32 {
    let parts = match parse_url_parts(url) {
        Ok(parts) => parts,
        Err(e) => {
            debug!(url, error = %e, "trust.patterns.malformed_url");
            return MALFORMED_URL_PENALTY;
        }
    };

    let mut bonus = 0;
    let mut penalty = 0;

    if lexicon.trusted_brands.iter().any(|b| parts.domain.contains(b.as_str())) {
        bonus += TRUSTED_BRAND_BONUS;
    }

    let suspicious = lexicon
        .suspicious_keywords
        .iter()
        .filter(|k| parts.domain.contains(k.as_str()) || parts.path.contains(k.as_str()))
        .count() as i32;
    penalty += suspicious * SUSPICIOUS_KEYWORD_PENALTY;

    if separator_run_re().is_match(&parts.domain) {
        penalty += SEPARATOR_RUN_PENALTY;
    }

    if parts.domain.chars().count() > MAX_DOMAIN_CHARS {
        penalty += LONG_DOMAIN_PENALTY;
    }
    if url.chars().count() > MAX_URL_CHARS {
        penalty += LONG_URL_PENALTY;
    }

    if url.starts_with("https://") {
        bonus += HTTPS_BONUS;
    }

    bonus + penalty
}

/// Suffix-based reputation: reputable suffixes win over abused TLDs.
pub fn check_domain_reputation(url: &str, lexicon: &Lexicon) -> i32 {
    let parts = match parse_url_parts(url) {
        Ok(parts) => parts,
        Err(e) => {
            debug!(url, error = %e, "trust.reputation.malformed_url");
            return REPUTATION_PARSE_PENALTY;
        }
    };
    let domain = parts.domain.as_str();

    if lexicon.reputable_suffixes.iter().any(|s| domain.ends_with(s.as_str())) {
        REPUTABLE_BONUS
    } else if lexicon.abused_tlds.iter().any(|s| domain.ends_with(s.as_str())) {
        ABUSED_TLD_PENALTY
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> &'static Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn test_parse_url_parts() {
        let parts = parse_url_parts("HTTP://User@Example.COM:8080/Login/Page?x=1").unwrap();
        assert_eq!(parts.domain, "user@example.com:8080");
        assert_eq!(parts.path, "/login/page");
    }

    #[test]
    fn test_parse_url_parts_without_scheme() {
        let parts = parse_url_parts("www.PayPal-login.com/x?y#z").unwrap();
        assert_eq!(parts.domain, "");
        assert_eq!(parts.path, "www.paypal-login.com/x");

        let parts = parse_url_parts("//cdn.example.com/lib.js").unwrap();
        assert_eq!(parts.domain, "cdn.example.com");
    }

    #[test]
    fn test_parse_url_parts_keeps_raw_authority() {
        let parts = parse_url_parts("http://München.de:80/a;type=x").unwrap();
        assert_eq!(parts.domain, "münchen.de:80");
        assert_eq!(parts.path, "/a");
    }

    #[test]
    fn test_malformed_url_penalty() {
        assert_eq!(analyze_url_patterns("http://[::1", lex()), -10);
        assert_eq!(analyze_url_patterns("http://::1]/", lex()), -10);
        assert_eq!(check_domain_reputation("http://[::1", lex()), -5);
    }

    #[test]
    fn test_schemeless_url_is_all_path() {
        assert_eq!(analyze_url_patterns("google.com", lex()), 0);
        assert_eq!(check_domain_reputation("google.com", lex()), 0);
        // paypal and login are found in the path.
        assert_eq!(analyze_url_patterns("www.paypal-login.com", lex()), -6);
        assert_eq!(analyze_url_patterns("not a url", lex()), 0);
    }

    #[test]
    fn test_idn_host_is_not_punycoded() {
        assert_eq!(analyze_url_patterns("http://münchen.de", lex()), 0);
        assert_eq!(check_domain_reputation("http://münchen.de", lex()), 0);
    }

    #[test]
    fn test_explicit_port_stays_in_domain() {
        assert_eq!(check_domain_reputation("http://example.com:80", lex()), 0);
        assert_eq!(check_domain_reputation("http://example.com", lex()), 5);
    }

    #[test]
    fn test_neutral_url() {
        assert_eq!(analyze_url_patterns("http://example.com", lex()), 0);
    }

    #[test]
    fn test_trusted_brand_and_https() {
        assert_eq!(analyze_url_patterns("https://www.github.com/rust-lang", lex()), 15);
    }

    #[test]
    fn test_each_suspicious_keyword_counts_once() {
        // "secure", "login", "verify", "account" -> 4 keywords
        assert_eq!(
            analyze_url_patterns("http://secure-login.example.com/verify/account/login", lex()),
            -12
        );
    }

    #[test]
    fn test_separator_run_and_lengths() {
        assert_eq!(analyze_url_patterns("http://my-site--shop.com", lex()), -5);
        let long_domain = format!("http://{}.com", "a".repeat(50));
        assert_eq!(analyze_url_patterns(&long_domain, lex()), -5);
        let long_url = format!("http://example.com/{}", "p".repeat(100));
        assert_eq!(analyze_url_patterns(&long_url, lex()), -3);
    }

    #[test]
    fn test_domain_reputation() {
        assert_eq!(check_domain_reputation("https://example.org/x", lex()), 5);
        assert_eq!(check_domain_reputation("http://google.co.uk", lex()), 0);
        assert_eq!(check_domain_reputation("http://cheap-deals.tk", lex()), -10);
        assert_eq!(check_domain_reputation("http://example.io", lex()), 0);
    }
}
