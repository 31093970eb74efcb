// HTML content analyzer
// Fetches a page once and derives phishing signals from its body

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::HtmlFeatures;
use crate::services::scoring::html_score;
use crate::utils::html_signals;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = "HADES-Analyzer/1.0";

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Page fetch timed out")]
    Timeout,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

// =============================================================================
// FETCH SEAM
// =============================================================================

/// Source of page bodies; anything but a readable 200 response is an error
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a whole-request deadline
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        // Redirects are followed by the client; only the final status counts
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response.text().await.map_err(classify)
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(error)
    }
}

// =============================================================================
// ANALYZER
// =============================================================================

pub struct HtmlAnalyzer {
    fetcher: Arc<dyn PageFetcher>,
}

impl HtmlAnalyzer {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Never fails; an unreachable page yields [`HtmlFeatures::unreachable`]
    pub async fn analyze(&self, url: &str) -> HtmlFeatures {
        match self.fetcher.fetch(url).await {
            Ok(body) => analyze_html(&body),
            Err(e) => {
                debug!("HTML fetch failed for {}: {}", url, e);
                HtmlFeatures::unreachable()
            },
        }
    }
}

/// Signals and score for an already fetched body
pub fn analyze_html(body: &str) -> HtmlFeatures {
    let mut features = HtmlFeatures {
        content_fetched: true,
        has_suspicious_title: html_signals::has_suspicious_title(body),
        has_phishing_keywords: html_signals::has_phishing_keywords(body),
        has_suspicious_forms: html_signals::has_suspicious_forms(body),
        has_external_redirects: html_signals::has_external_redirects(body),
        has_obfuscated_code: html_signals::has_obfuscated_code(body),
        missing_ssl_indicators: html_signals::missing_ssl_indicators(body),
        html_score: 0,
    };
    features.html_score = html_score(&features);
    features
}
