//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::cache::{CacheResult, CacheSource};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Where the data came from: "network", "cache" or "offline"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// When the served data was cached (absent for fresh network data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                source: None,
                cached_at: None,
            },
        }
    }

    /// Attach cache provenance to the metadata
    pub fn with_source(mut self, source: CacheSource, cached_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.meta.source = Some(source.as_str().to_string());
        self.meta.cached_at = cached_at.map(|dt| dt.to_rfc3339());
        self
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

/// Format a cache read as pretty-printed JSON, including its provenance
pub fn format_cached_json<T: Serialize>(result: &CacheResult<T>) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(&result.data).with_source(result.source, result.cached_at);
    serde_json::to_string_pretty(&output)
}
