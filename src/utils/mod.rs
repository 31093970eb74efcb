// Utility modules for HADES Backend

pub mod domain_age;
pub mod html_analyzer;
pub mod html_signals;
pub mod service_error;
pub mod url_features;
pub mod whois_client;

pub use domain_age::{age_from_record, parse_creation_date, DomainAgeResolver};
pub use html_analyzer::{analyze_html, FetchError, HtmlAnalyzer, HttpPageFetcher, PageFetcher};
pub use service_error::ServiceError;
pub use url_features::{extract_lexical_features, UrlFeatureExtractor, UrlParts};
pub use whois_client::{ParsedRegistration, RegistrationLookup, WhoisError, WhoisLookup, WhoisRecord};
