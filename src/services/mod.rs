// Services module for HADES Backend
// Scoring and orchestration layer for URL analysis

pub mod analysis;
pub mod predictor;
pub mod scoring;

// Re-export commonly used services
pub use analysis::AnalysisService;
pub use predictor::{BaselinePredictor, RiskPredictor};
pub use scoring::{combine_scores, evaluate_heuristics, html_score};
