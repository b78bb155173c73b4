//! Country models

use serde::{Deserialize, Serialize};

/// Country resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. "JP", "FR")
    pub code: String,

    /// English country name
    pub name: String,

    /// Japanese country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,

    /// Region used for category filtering (e.g. "Asia", "Europe")
    pub region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,

    #[serde(default)]
    pub population: u64,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub currencies: Vec<Currency>,

    #[serde(default)]
    pub flag_url: String,

    #[serde(default)]
    pub flag_emoji: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Currency used in a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code
    pub code: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}
