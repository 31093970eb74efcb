// Common test utilities and helper structs
// Shared across all test files to avoid duplication

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use hades_backend_core::{
    app::AppState,
    build_router,
    services::{AnalysisService, BaselinePredictor},
    utils::{
        html_analyzer::{FetchError, PageFetcher},
        whois_client::{ParsedRegistration, RegistrationLookup, WhoisError, WhoisRecord},
    },
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt;

// =============================================================================
// FAKE COLLABORATORS
// =============================================================================

/// WHOIS records keyed by domain; unknown domains fail the lookup
#[derive(Default)]
pub struct FakeLookup {
    records: HashMap<String, WhoisRecord>,
    pub calls: AtomicUsize,
}

impl FakeLookup {
    pub fn with_record(mut self, domain: &str, record: WhoisRecord) -> Self {
        self.records.insert(domain.to_string(), record);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationLookup for FakeLookup {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(domain)
            .cloned()
            .ok_or_else(|| WhoisError::Lookup(format!("no record for {}", domain)))
    }
}

/// Page bodies keyed by full URL; unknown URLs answer 404
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages.get(url).cloned().ok_or(FetchError::Status(404))
    }
}

/// WHOIS record created `days` days ago
pub fn record_aged(domain: &str, days: i64) -> WhoisRecord {
    let created = chrono::Utc::now() - chrono::Duration::days(days);
    let created = created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    WhoisRecord {
        raw_data: format!(
            "Domain Name: {}\r\nCreation Date: {}\r\n",
            domain.to_uppercase(),
            created
        ),
        parsed: Some(ParsedRegistration {
            creation_date: Some(created),
            registrar: None,
        }),
    }
}

// =============================================================================
// TEST APP
// =============================================================================

pub struct TestApp {
    pub app: Router,
    pub lookup: Arc<FakeLookup>,
}

impl TestApp {
    /// Send a POST request
    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "POST", uri)
    }

    /// Send a GET request
    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "GET", uri)
    }
}

/// Test request builder
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: &'static str,
    uri: String,
    content_type: Option<&'static str>,
    body: Vec<u8>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &'static str, uri: &str) -> Self {
        Self {
            app,
            method,
            uri: uri.to_string(),
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Add JSON body to request
    pub fn json(mut self, body: &serde_json::Value) -> Self {
        self.body = serde_json::to_vec(body).unwrap();
        self.content_type = Some("application/json");
        self
    }

    /// Raw body without a content type
    pub fn raw(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Send the request
    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.uri);
        if let Some(content_type) = self.content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(self.body)).unwrap();

        let response = self.app.app.clone().oneshot(request).await.unwrap();

        TestResponse { response }
    }
}

/// Test response wrapper
pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    /// Get status code
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn content_type(&self) -> Option<String> {
        self.response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Parse JSON response
    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}

/// Test application backed by in-memory WHOIS records and pages
pub fn setup_test_app(lookup: FakeLookup, fetcher: FakeFetcher) -> TestApp {
    let lookup = Arc::new(lookup);
    let service = AnalysisService::new(
        lookup.clone(),
        Arc::new(fetcher),
        Arc::new(BaselinePredictor),
    );
    let state = AppState::new(service);

    TestApp {
        app: build_router(state),
        lookup,
    }
}
