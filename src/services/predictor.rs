// Risk predictor
// Placeholder for a learned model over URL features; not part of the final score

use crate::models::UrlFeatures;

/// Probability-like risk estimate in `[0.0, 1.0]`
pub trait RiskPredictor: Send + Sync {
    fn predict(&self, features: &UrlFeatures) -> f64;
}

/// Stand-in until a trained model exists; always 0.0
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselinePredictor;

impl RiskPredictor for BaselinePredictor {
    fn predict(&self, _features: &UrlFeatures) -> f64 {
        0.0
    }
}
