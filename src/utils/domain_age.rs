// Domain age resolution
// WHOIS creation date -> whole days since registration, unknown on any failure

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

use crate::models::DomainAge;
use crate::utils::url_features::is_ip_address;
use crate::utils::whois_client::{RegistrationLookup, WhoisRecord};

lazy_static! {
    /// Raw-text fallback for registries whose creation line the parser misses
    static ref RAW_CREATED_PATTERN: Regex =
        Regex::new(r"(?i)created:\s*([0-9]{8})").expect("Invalid raw created pattern regex");
}

/// Layouts tried in order after normalization
const DATE_ONLY_LAYOUT: &str = "%Y-%m-%d";
const DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%SZ", "%Y.%m.%d %H:%M:%S"];

pub struct DomainAgeResolver {
    lookup: Arc<dyn RegistrationLookup>,
}

impl DomainAgeResolver {
    pub fn new(lookup: Arc<dyn RegistrationLookup>) -> Self {
        Self { lookup }
    }

    /// Age of `hostname` in whole days; never fails
    pub async fn resolve(&self, hostname: &str) -> DomainAge {
        // Nothing to look up for an unparsed URL or an address literal
        if hostname.is_empty() || is_ip_address(hostname) {
            return DomainAge::Unknown;
        }

        let record = match self.lookup.lookup(hostname).await {
            Ok(record) => record,
            Err(e) => {
                debug!("WHOIS lookup failed for {}: {}", hostname, e);
                return DomainAge::Unknown;
            },
        };

        age_from_record(&record, Utc::now())
    }
}

/// Age described by a registration record, measured at `now`
pub fn age_from_record(record: &WhoisRecord, now: DateTime<Utc>) -> DomainAge {
    let Some(parsed) = record.parsed.as_ref() else {
        debug!("WHOIS answer could not be parsed");
        return DomainAge::Unknown;
    };

    let created = parsed
        .creation_date
        .as_deref()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(str::to_string)
        .or_else(|| raw_created_date(&record.raw_data))
        .unwrap_or_default();

    match parse_creation_date(&created) {
        Some(created) => days_between(created, now),
        None => DomainAge::Unknown,
    }
}

/// `created: YYYYMMDD` anywhere in the raw text, as `YYYY-MM-DD`
fn raw_created_date(raw: &str) -> Option<String> {
    let digits = RAW_CREATED_PATTERN.captures(raw)?.get(1)?.as_str();
    Some(format!("{}-{}-{}", &digits[..4], &digits[4..6], &digits[6..8]))
}

/// Normalizes and parses a registry creation date string
pub fn parse_creation_date(created: &str) -> Option<DateTime<Utc>> {
    let mut created = created.trim();

    // Registry annotations such as "19990101 #4444540"
    if created.contains('#') {
        created = created.split_whitespace().next().unwrap_or_default();
    }
    if created.is_empty() {
        return None;
    }

    let normalized = if created.len() == 8 && created.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &created[..4], &created[4..6], &created[6..8])
    } else {
        created.to_string()
    };

    let parsed = NaiveDate::parse_from_str(&normalized, DATE_ONLY_LAYOUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .or_else(|| {
            DATE_TIME_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(&normalized, layout).ok())
        })
        // RDAP event dates carry offsets and fractional seconds
        .or_else(|| {
            DateTime::parse_from_rfc3339(&normalized)
                .ok()
                .map(|date| date.naive_utc())
        })?;

    if is_zero_time(&parsed) {
        return None;
    }
    Some(parsed.and_utc())
}

// 0001-01-01 00:00:00 is how some registries spell "no date"
fn is_zero_time(value: &NaiveDateTime) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|zero| *value == zero)
        .unwrap_or(false)
}

/// Whole days from `created` to `now`; creation dates in the future are unknown
pub fn days_between(created: DateTime<Utc>, now: DateTime<Utc>) -> DomainAge {
    // Any future instant, even under a day ahead, is unknown
    if created > now {
        return DomainAge::Unknown;
    }
    let days = (now - created).num_hours() / 24;
    u32::try_from(days)
        .map(DomainAge::Known)
        .unwrap_or(DomainAge::Unknown)
}
