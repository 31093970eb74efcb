// HTTP handlers

pub mod analyze;
pub mod health;

use crate::app::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub use analyze::analyze_urls;
pub use health::health_check;

// Analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze::analyze_urls))
        .route("/health", get(health::health_check))
}
