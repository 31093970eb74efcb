// Data models for HADES Backend
pub mod analysis;
pub mod request;

// Re-export common types
pub use analysis::{DomainAge, HtmlFeatures, UrlAnalysisResult, UrlFeatures};
pub use request::AnalyzeRequest;
