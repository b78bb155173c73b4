//! Entry requirement models

use serde::{Deserialize, Serialize};

/// Visa and passport requirements for entering a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRequirement {
    pub country_code: String,

    pub visa_required: bool,

    pub visa_on_arrival: bool,

    /// Length of visa-free stay, when visa-free entry is allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_free_days: Option<u32>,

    /// Minimum remaining passport validity on entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_validity_months: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
