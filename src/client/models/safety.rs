//! Safety information models

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Travel safety report for a single country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyInfo {
    /// ISO 3166-1 alpha-2 code of the country this report covers
    pub country_code: String,

    pub level: SafetyLevel,

    pub summary: String,

    #[serde(default)]
    pub details: Vec<SafetyDetail>,

    /// Upstream advisory timestamp, passed through as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Advisory level, 0 (safe) to 4 (evacuate).
///
/// Serialized as its numeric value. Unknown values decode as `Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafetyLevel {
    #[default]
    Safe,
    Caution,
    Danger,
    DoNotTravel,
    Evacuate,
}

impl SafetyLevel {
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => SafetyLevel::Caution,
            2 => SafetyLevel::Danger,
            3 => SafetyLevel::DoNotTravel,
            4 => SafetyLevel::Evacuate,
            _ => SafetyLevel::Safe,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            SafetyLevel::Safe => 0,
            SafetyLevel::Caution => 1,
            SafetyLevel::Danger => 2,
            SafetyLevel::DoNotTravel => 3,
            SafetyLevel::Evacuate => 4,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Safe",
            SafetyLevel::Caution => "Exercise caution",
            SafetyLevel::Danger => "Avoid non-essential travel",
            SafetyLevel::DoNotTravel => "Do not travel",
            SafetyLevel::Evacuate => "Evacuate",
        }
    }
}

impl Serialize for SafetyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for SafetyLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(SafetyLevel::from_value(value))
    }
}

/// One line item of a safety report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyDetail {
    pub category: String,
    pub description: String,
    /// "low" | "medium" | "high"
    pub severity: String,
}
