// HTML phishing signals
// Each check is an independent predicate over the raw page body

use lazy_static::lazy_static;
use regex::Regex;

// =============================================================================
// PHRASE LISTS
// =============================================================================

pub const SUSPICIOUS_TITLES: [&str; 8] = [
    "verify your account",
    "account suspended",
    "urgent action required",
    "security alert",
    "confirm your identity",
    "update payment",
    "expired session",
    "login verification",
];

pub const PHISHING_PHRASES: [&str; 10] = [
    "click here to verify",
    "account will be closed",
    "immediate action required",
    "suspended account",
    "confirm your password",
    "update your information",
    "verify identity",
    "security breach",
    "unauthorized access",
    "click here immediately",
];

pub const SUSPICIOUS_FORM_ACTIONS: [&str; 6] =
    ["login", "signin", "verify", "confirm", "update", "secure"];

// =============================================================================
// STATIC REGEX PATTERNS
// =============================================================================

lazy_static! {
    static ref TITLE_PATTERN: Regex =
        Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("Invalid title pattern regex");

    static ref PASSWORD_FORM_PATTERN: Regex = Regex::new(
        r#"(?is)<form[^>]*>.*?<input[^>]*type=["']password["'][^>]*>.*?</form>"#
    )
    .expect("Invalid password form pattern regex");

    static ref FORM_ACTION_PATTERN: Regex =
        Regex::new(r#"(?i)action=["']([^"']+)["']"#).expect("Invalid form action pattern regex");

    static ref META_REFRESH_PATTERN: Regex = Regex::new(
        r#"(?i)<meta[^>]*http-equiv=["']refresh["'][^>]*content=["'][^"']*url=([^"']+)["']"#
    )
    .expect("Invalid meta refresh pattern regex");

    /// Script-level `location` reassignment to an absolute URL
    static ref SCRIPT_REDIRECT_PATTERNS: Vec<Regex> = [
        r#"window\.location\.href\s*=\s*["']http"#,
        r#"window\.location\s*=\s*["']http"#,
        r#"location\.href\s*=\s*["']http"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid script redirect pattern regex"))
    .collect();

    static ref OBFUSCATION_PATTERNS: Vec<Regex> = [
        r"eval\s*\(",
        r"document\.write\s*\(\s*unescape",
        r"String\.fromCharCode",
        r"\\x[0-9a-fA-F]{2}",
        r"\\u[0-9a-fA-F]{4}",
        r"atob\s*\(",
        r"btoa\s*\(",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid obfuscation pattern regex"))
    .collect();

    static ref INSECURE_RESOURCE_PATTERN: Regex =
        Regex::new(r#"(?i)(?:src|href|action)=["']http://"#)
            .expect("Invalid insecure resource pattern regex");
}

// =============================================================================
// PREDICATES
// =============================================================================

/// First `<title>` contains an alarm phrase
pub fn has_suspicious_title(html: &str) -> bool {
    let title = match TITLE_PATTERN.captures(html).and_then(|c| c.get(1)) {
        Some(title) => title.as_str().to_lowercase(),
        None => return false,
    };
    SUSPICIOUS_TITLES.iter().any(|phrase| title.contains(phrase))
}

pub fn has_phishing_keywords(html: &str) -> bool {
    let lower = html.to_lowercase();
    PHISHING_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// A password form and a login-style form action must both be present
pub fn has_suspicious_forms(html: &str) -> bool {
    if !PASSWORD_FORM_PATTERN.is_match(html) {
        return false;
    }

    FORM_ACTION_PATTERN
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .any(|action| {
            let action = action.as_str().to_lowercase();
            SUSPICIOUS_FORM_ACTIONS.iter().any(|k| action.contains(k))
        })
}

pub fn has_external_redirects(html: &str) -> bool {
    let meta_redirect = META_REFRESH_PATTERN
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .any(|target| {
            let target = target.as_str().trim();
            target.starts_with("http://") || target.starts_with("https://")
        });

    meta_redirect || SCRIPT_REDIRECT_PATTERNS.iter().any(|p| p.is_match(html))
}

pub fn has_obfuscated_code(html: &str) -> bool {
    OBFUSCATION_PATTERNS.iter().any(|p| p.is_match(html))
}

/// Explicit `http://` resource or form target on the page
pub fn missing_ssl_indicators(html: &str) -> bool {
    INSECURE_RESOURCE_PATTERN.is_match(html)
}
