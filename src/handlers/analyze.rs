// Batch URL analysis endpoint

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{app::AppState, models::AnalyzeRequest, utils::service_error::ServiceError};

/// Score every URL in the request body
/// POST /analyze
///
/// The body is decoded as JSON whatever its `Content-Type`; a missing `urls`
/// key is an empty batch.
pub async fn analyze_urls(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ServiceError> {
    let request: AnalyzeRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected analyze request: {}", e);
        ServiceError::from(e)
    })?;

    let results = state.analysis_service.analyze_batch(&request.urls).await;

    let encoded =
        serde_json::to_vec(&results).map_err(|e| ServiceError::Encoding(e.to_string()))?;

    info!("Returned {} analysis results", results.len());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        encoded,
    )
        .into_response())
}
