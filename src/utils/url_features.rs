// URL feature extraction
// Structural and lexical features of a raw URL string, plus the delegated domain age

use std::net::IpAddr;

use crate::models::{DomainAge, UrlFeatures};
use crate::utils::domain_age::DomainAgeResolver;

/// Substrings that mark a URL as suspicious anywhere in its text
pub const SUSPICIOUS_WORDS: [&str; 5] = ["login", "verify", "update", "secure", "bank"];

/// Scheme and hostname of a URL, empty when the input does not parse.
///
/// The hostname is the authority text exactly as written, minus userinfo,
/// port and IPv6 brackets. No IDNA or numeric-host normalization is applied,
/// so `http://192.168.1/` keeps `192.168.1` and `http://bücher.de/` keeps
/// its Unicode form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub hostname: String,
}

impl UrlParts {
    /// Best-effort parse; never fails
    pub fn parse(raw_url: &str) -> Self {
        if raw_url.bytes().any(|b| b < 0x20 || b == 0x7f) {
            tracing::debug!("URL contains control characters, using empty parts: {:?}", raw_url);
            return Self::default();
        }

        // Fragment and query never belong to the authority
        let without_fragment = raw_url.split('#').next().unwrap_or_default();
        let (scheme, rest) = match split_scheme(without_fragment) {
            Some(split) => split,
            None => {
                tracing::debug!("URL has an empty scheme, using empty parts: {}", raw_url);
                return Self::default();
            },
        };
        let rest = rest.split('?').next().unwrap_or_default();

        let has_authority =
            rest.starts_with("//") && (!scheme.is_empty() || !rest.starts_with("///"));
        if !has_authority {
            return Self {
                scheme,
                hostname: String::new(),
            };
        }

        let authority = rest[2..].split('/').next().unwrap_or_default();
        match hostname_of(authority) {
            Some(hostname) => Self { scheme, hostname },
            None => {
                tracing::debug!("URL host did not parse, using empty parts: {}", raw_url);
                Self::default()
            },
        }
    }
}

// `scheme:rest`, with the scheme lowercased. Input without a well-formed
// scheme is all rest; a leading ':' is a parse failure.
fn split_scheme(raw: &str) -> Option<(String, &str)> {
    for (i, c) in raw.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {},
            '0'..='9' | '+' | '-' | '.' if i > 0 => {},
            ':' if i == 0 => return None,
            ':' => return Some((raw[..i].to_ascii_lowercase(), &raw[i + 1..])),
            _ => return Some((String::new(), raw)),
        }
    }
    Some((String::new(), raw))
}

// Host part of an authority: userinfo ends at the last '@', a trailing
// ":digits" is the port, brackets wrap an IPv6 literal
fn hostname_of(authority: &str) -> Option<String> {
    let host_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    let host = if let Some(bracketed) = host_port.strip_prefix('[') {
        let close = bracketed.rfind(']')?;
        if !is_optional_port(&bracketed[close + 1..]) {
            return None;
        }
        &bracketed[..close]
    } else {
        let host = match host_port.rfind(':') {
            Some(colon) => {
                if !is_optional_port(&host_port[colon..]) {
                    return None;
                }
                &host_port[..colon]
            },
            None => host_port,
        };
        if host.chars().any(|c| c.is_whitespace() || "<>\"{}|\\^`".contains(c)) {
            return None;
        }
        host
    };

    Some(host.to_string())
}

// "" or ":" followed only by digits
fn is_optional_port(port: &str) -> bool {
    match port.strip_prefix(':') {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_digit()),
        None => port.is_empty(),
    }
}

/// Features computable from the string alone; `domain_age_days` is unknown
pub fn extract_lexical_features(raw_url: &str) -> UrlFeatures {
    let parts = UrlParts::parse(raw_url);

    UrlFeatures {
        domain_length: parts.hostname.chars().count(),
        url_length: raw_url.chars().count(),
        has_suspicious_words: contains_suspicious_word(raw_url),
        num_subdomains: count_subdomains(&parts.hostname),
        uses_ip_address: is_ip_address(&parts.hostname),
        uses_insecure_protocol: parts.scheme == "http",
        domain_age_days: DomainAge::Unknown,
    }
}

/// Case-insensitive substring match against [`SUSPICIOUS_WORDS`]
pub fn contains_suspicious_word(raw_url: &str) -> bool {
    let lower = raw_url.to_lowercase();
    SUSPICIOUS_WORDS.iter().any(|word| lower.contains(word))
}

/// Label count minus two.
///
/// IP literals are counted like any other host, so `192.168.1.1` yields 2 and
/// `2001:db8::1` yields -1. Known imprecision of the heuristic.
pub fn count_subdomains(hostname: &str) -> i32 {
    let labels = hostname.split('.').count();
    i32::try_from(labels).unwrap_or(i32::MAX) - 2
}

/// Strict IPv4/IPv6 literal check; ports, zones and malformed octets are rejected
pub fn is_ip_address(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    host.parse::<IpAddr>().is_ok()
}

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Full feature extractor: lexical features plus the WHOIS-backed domain age
pub struct UrlFeatureExtractor {
    domain_age: DomainAgeResolver,
}

impl UrlFeatureExtractor {
    pub fn new(domain_age: DomainAgeResolver) -> Self {
        Self { domain_age }
    }

    pub async fn extract(&self, raw_url: &str) -> UrlFeatures {
        let mut features = extract_lexical_features(raw_url);
        let hostname = UrlParts::parse(raw_url).hostname;
        features.domain_age_days = self.domain_age.resolve(&hostname).await;
        features
    }
}
