//! Attraction models

use serde::{Deserialize, Serialize};

/// Sightseeing information for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionsInfo {
    pub country_code: String,

    pub country_name: String,

    #[serde(default)]
    pub attractions: Vec<Attraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_season: Option<String>,

    #[serde(default)]
    pub travel_tips: Vec<String>,
}

/// A single sightseeing spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}
