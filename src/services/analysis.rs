// Analysis orchestrator
// Runs extraction, page analysis and scoring for each URL of a batch

use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app_config::AppConfig;
use crate::models::UrlAnalysisResult;
use crate::services::predictor::{BaselinePredictor, RiskPredictor};
use crate::services::scoring::{combine_scores, evaluate_heuristics};
use crate::utils::domain_age::DomainAgeResolver;
use crate::utils::html_analyzer::{HtmlAnalyzer, HttpPageFetcher, PageFetcher};
use crate::utils::url_features::UrlFeatureExtractor;
use crate::utils::whois_client::{RegistrationLookup, WhoisLookup};

pub struct AnalysisService {
    extractor: UrlFeatureExtractor,
    html: HtmlAnalyzer,
    predictor: Arc<dyn RiskPredictor>,
}

impl AnalysisService {
    pub fn new(
        lookup: Arc<dyn RegistrationLookup>,
        fetcher: Arc<dyn PageFetcher>,
        predictor: Arc<dyn RiskPredictor>,
    ) -> Self {
        Self {
            extractor: UrlFeatureExtractor::new(DomainAgeResolver::new(lookup)),
            html: HtmlAnalyzer::new(fetcher),
            predictor,
        }
    }

    /// Production wiring: whois-service lookups, reqwest page fetches, baseline predictor
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let analyzer = &config.analyzer;
        let lookup = WhoisLookup::new(analyzer.whois_timeout())
            .await
            .context("Failed to create WHOIS lookup")?;
        let fetcher = HttpPageFetcher::new(analyzer.html_fetch_timeout(), &analyzer.user_agent)
            .context("Failed to create page fetcher")?;

        Ok(Self::new(
            Arc::new(lookup),
            Arc::new(fetcher),
            Arc::new(BaselinePredictor),
        ))
    }

    /// Full analysis of one URL; degraded lookups become data, never errors
    pub async fn analyze(&self, url: &str) -> UrlAnalysisResult {
        let url_details = self.extractor.extract(url).await;
        let url_score = evaluate_heuristics(&url_details);

        // Page analysis runs regardless of the URL-level outcome
        let html_details = self.html.analyze(url).await;
        let final_score = combine_scores(url_score, html_details.html_score);

        let predicted = self.predictor.predict(&url_details);
        debug!(
            "Analyzed {}: url_score={} html_score={} final={} predicted={:.3}",
            url, url_score, html_details.html_score, final_score, predicted
        );

        UrlAnalysisResult {
            url: url.to_string(),
            url_score,
            url_details,
            html_details,
            final_score,
        }
    }

    /// One result per input URL, in input order
    pub async fn analyze_batch(&self, urls: &[String]) -> Vec<UrlAnalysisResult> {
        info!("Analyzing batch of {} URLs", urls.len());

        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            results.push(self.analyze(url).await);
        }
        results
    }
}
