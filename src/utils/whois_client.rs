// WHOIS/RDAP registration lookups
// Thin seam over the whois-service client, bounded by a per-lookup timeout

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use whois_service::WhoisResponse;

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum WhoisError {
    #[error("Failed to create WHOIS client: {0}")]
    Client(String),

    #[error("WHOIS lookup failed: {0}")]
    Lookup(String),

    #[error("WHOIS lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Empty WHOIS query")]
    EmptyQuery,
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Structured fields the registry answer could be parsed into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRegistration {
    pub creation_date: Option<String>,
    pub registrar: Option<String>,
}

/// Raw registry answer plus its parsed form, when parsing succeeded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub raw_data: String,
    pub parsed: Option<ParsedRegistration>,
}

impl From<&WhoisResponse> for WhoisRecord {
    fn from(response: &WhoisResponse) -> Self {
        Self {
            raw_data: response.raw_data.clone(),
            parsed: response.parsed_data.as_ref().map(|parsed| ParsedRegistration {
                creation_date: parsed.creation_date.clone(),
                registrar: parsed.registrar.clone(),
            }),
        }
    }
}

// =============================================================================
// LOOKUP SEAM
// =============================================================================

/// Source of registration records for a domain
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError>;
}

/// whois-service backed lookup (RDAP first, WHOIS fallback)
pub struct WhoisLookup {
    client: whois_service::WhoisClient,
    timeout: Duration,
}

impl WhoisLookup {
    /// whois-service's own deadline is far longer than a per-URL budget, so
    /// every lookup is additionally bounded by `timeout`
    pub async fn new(timeout: Duration) -> Result<Self, WhoisError> {
        let client = whois_service::WhoisClient::new()
            .await
            .map_err(|e| WhoisError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl RegistrationLookup for WhoisLookup {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(WhoisError::EmptyQuery);
        }

        let record = bounded(self.timeout, async {
            self.client
                .lookup(domain)
                .await
                .map(|response| WhoisRecord::from(&response))
                .map_err(|e| WhoisError::Lookup(e.to_string()))
        })
        .await?;

        debug!(
            "WHOIS answer for {}: {} bytes, parsed={}",
            domain,
            record.raw_data.len(),
            record.parsed.is_some()
        );
        Ok(record)
    }
}

/// Runs `lookup`, failing with [`WhoisError::Timeout`] once `timeout` elapses
pub async fn bounded<F>(timeout: Duration, lookup: F) -> Result<WhoisRecord, WhoisError>
where
    F: Future<Output = Result<WhoisRecord, WhoisError>>,
{
    tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| WhoisError::Timeout(timeout))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let record = WhoisRecord {
            raw_data: "Domain Name: EXAMPLE.COM\n".to_string(),
            parsed: Some(ParsedRegistration::default()),
        };
        let expected = record.clone();

        let result = bounded(Duration::from_secs(1), async move { Ok(record) }).await;
        assert_eq!(result.unwrap(), expected);

        let result = bounded(Duration::from_secs(1), async {
            Err(WhoisError::Lookup("no such domain".to_string()))
        })
        .await;
        assert!(matches!(result, Err(WhoisError::Lookup(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_times_out_stalled_lookup() {
        let stalled = std::future::pending::<Result<WhoisRecord, WhoisError>>();
        let result = bounded(Duration::from_secs(8), stalled).await;
        assert!(matches!(result, Err(WhoisError::Timeout(d)) if d == Duration::from_secs(8)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WhoisError::Timeout(Duration::from_secs(8)).to_string(),
            "WHOIS lookup timed out after 8s"
        );
        assert_eq!(WhoisError::EmptyQuery.to_string(), "Empty WHOIS query");
    }
}
