// Application state shared across handlers
use std::sync::Arc;

use crate::{app_config::AppConfig, services::AnalysisService};

// Read-only after start-up; the database pool is owned by main, not by handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(analysis_service: AnalysisService) -> Self {
        Self {
            analysis_service: Arc::new(analysis_service),
        }
    }

    /// Production wiring of every analyzer collaborator from `config`
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let analysis_service = AnalysisService::from_config(config).await?;
        Ok(Self::new(analysis_service))
    }
}
