// Heuristic scoring engine
// Rule weights for URL features and HTML signals, and the final 0-100 combination

use crate::models::{DomainAge, HtmlFeatures, UrlFeatures};

// =============================================================================
// URL RULES
// =============================================================================

pub const INSECURE_PROTOCOL_WEIGHT: u32 = 10;
pub const SUSPICIOUS_WORDS_WEIGHT: u32 = 20;
pub const MANY_SUBDOMAINS_WEIGHT: u32 = 5;
pub const IP_ADDRESS_WEIGHT: u32 = 25;
pub const YOUNG_DOMAIN_WEIGHT: u32 = 50;

/// More subdomains than this adds [`MANY_SUBDOMAINS_WEIGHT`]
pub const SUBDOMAIN_THRESHOLD: i32 = 3;
/// Domains younger than this many days add [`YOUNG_DOMAIN_WEIGHT`]
pub const YOUNG_DOMAIN_DAYS: u32 = 30;

/// URL-level score; additive, not clamped
pub fn evaluate_heuristics(features: &UrlFeatures) -> u32 {
    let mut score = 0;

    if features.uses_insecure_protocol {
        score += INSECURE_PROTOCOL_WEIGHT;
    }
    if features.has_suspicious_words {
        score += SUSPICIOUS_WORDS_WEIGHT;
    }
    if features.num_subdomains > SUBDOMAIN_THRESHOLD {
        score += MANY_SUBDOMAINS_WEIGHT;
    }
    if features.uses_ip_address {
        score += IP_ADDRESS_WEIGHT;
    }
    // Unknown age contributes nothing
    if let DomainAge::Known(days) = features.domain_age_days {
        if days < YOUNG_DOMAIN_DAYS {
            score += YOUNG_DOMAIN_WEIGHT;
        }
    }

    score
}

// =============================================================================
// HTML RULES
// =============================================================================

pub const SUSPICIOUS_TITLE_WEIGHT: u32 = 25;
pub const PHISHING_KEYWORDS_WEIGHT: u32 = 30;
pub const SUSPICIOUS_FORMS_WEIGHT: u32 = 35;
pub const EXTERNAL_REDIRECTS_WEIGHT: u32 = 20;
pub const OBFUSCATED_CODE_WEIGHT: u32 = 40;
pub const MISSING_SSL_WEIGHT: u32 = 15;

/// HTML-level score from the signal flags
pub fn html_score(features: &HtmlFeatures) -> u32 {
    if !features.content_fetched {
        return HtmlFeatures::UNREACHABLE_SCORE;
    }

    [
        (features.has_suspicious_title, SUSPICIOUS_TITLE_WEIGHT),
        (features.has_phishing_keywords, PHISHING_KEYWORDS_WEIGHT),
        (features.has_suspicious_forms, SUSPICIOUS_FORMS_WEIGHT),
        (features.has_external_redirects, EXTERNAL_REDIRECTS_WEIGHT),
        (features.has_obfuscated_code, OBFUSCATED_CODE_WEIGHT),
        (features.missing_ssl_indicators, MISSING_SSL_WEIGHT),
    ]
    .iter()
    .filter(|(triggered, _)| *triggered)
    .map(|(_, weight)| weight)
    .sum()
}

// =============================================================================
// COMBINATION
// =============================================================================

pub const URL_SCORE_SHARE: f64 = 0.4;
pub const HTML_SCORE_SHARE: f64 = 0.6;
pub const MAX_FINAL_SCORE: u8 = 100;

/// Weighted 40/60 blend, rounded and capped at 100
pub fn combine_scores(url_score: u32, html_score: u32) -> u8 {
    let blended =
        (f64::from(url_score) * URL_SCORE_SHARE + f64::from(html_score) * HTML_SCORE_SHARE).round();

    if blended >= f64::from(MAX_FINAL_SCORE) {
        MAX_FINAL_SCORE
    } else {
        blended as u8
    }
}
