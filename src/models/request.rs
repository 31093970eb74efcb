use serde::{Deserialize, Deserializer, Serialize};

/// Batch of URLs submitted to /analyze
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    // A body without the key, or with `null`, is an empty batch, not an error
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
