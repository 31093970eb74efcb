// Library exports for HADES Backend
// This file exposes modules and functions for library consumers

pub mod app;
pub mod app_config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, ConfigError, Environment};
pub use db::DieselPool;
pub use models::{AnalyzeRequest, DomainAge, HtmlFeatures, UrlAnalysisResult, UrlFeatures};
pub use services::{AnalysisService, BaselinePredictor, RiskPredictor};
pub use utils::{PageFetcher, RegistrationLookup};

/// Complete HTTP surface with request tracing
pub fn build_router(state: AppState) -> Router {
    handlers::analysis_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
