// URL analysis models
// Feature sets and the per-URL result record returned by /analyze

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// DOMAIN AGE
// =============================================================================

/// Registration age of a domain.
///
/// On the wire this is a plain integer: the day count, or `-1` when the age
/// could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainAge {
    Known(u32),
    #[default]
    Unknown,
}

impl DomainAge {
    /// Sentinel used on the wire for an unknown age
    pub const UNKNOWN_SENTINEL: i64 = -1;

    pub fn days(&self) -> Option<u32> {
        match self {
            DomainAge::Known(days) => Some(*days),
            DomainAge::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DomainAge::Known(_))
    }

    /// Integer form: days for a known age, `-1` otherwise
    pub fn as_sentinel(&self) -> i64 {
        match self {
            DomainAge::Known(days) => i64::from(*days),
            DomainAge::Unknown => Self::UNKNOWN_SENTINEL,
        }
    }

    /// Inverse of [`DomainAge::as_sentinel`]; any negative value is unknown
    pub fn from_sentinel(value: i64) -> Self {
        if value < 0 {
            return DomainAge::Unknown;
        }
        u32::try_from(value)
            .map(DomainAge::Known)
            .unwrap_or(DomainAge::Unknown)
    }
}

impl Serialize for DomainAge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_sentinel())
    }
}

impl<'de> Deserialize<'de> for DomainAge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(DomainAge::from_sentinel(value))
    }
}

// =============================================================================
// FEATURE SETS
// =============================================================================

/// Lexical and registration features of a URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlFeatures {
    pub domain_length: usize,
    pub url_length: usize,
    pub has_suspicious_words: bool,
    /// Dot-separated labels minus two; negative for dot-free hosts
    pub num_subdomains: i32,
    pub uses_ip_address: bool,
    pub uses_insecure_protocol: bool,
    pub domain_age_days: DomainAge,
}

/// Phishing signals derived from a page's HTML
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HtmlFeatures {
    pub content_fetched: bool,
    pub has_suspicious_title: bool,
    pub has_phishing_keywords: bool,
    pub has_suspicious_forms: bool,
    pub has_external_redirects: bool,
    pub has_obfuscated_code: bool,
    pub missing_ssl_indicators: bool,
    pub html_score: u32,
}

impl HtmlFeatures {
    /// Score assigned when a page cannot be fetched at all
    pub const UNREACHABLE_SCORE: u32 = 30;

    /// Features for a page that could not be fetched or read
    pub fn unreachable() -> Self {
        Self {
            html_score: Self::UNREACHABLE_SCORE,
            ..Default::default()
        }
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Analysis result for a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAnalysisResult {
    pub url: String,
    #[serde(rename = "score")]
    pub url_score: u32,
    pub url_details: UrlFeatures,
    pub html_details: HtmlFeatures,
    pub final_score: u8,
}
