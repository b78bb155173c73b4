//! Travel detail API trait

use async_trait::async_trait;

use crate::client::models::{AttractionsInfo, EntryRequirement, SafetyInfo};
use crate::error::ApiResult;

/// Per-country travel information
#[async_trait]
pub trait TravelInfoApi: Send + Sync {
    /// Current travel advisory for a country
    async fn get_safety_info(&self, code: &str) -> ApiResult<SafetyInfo>;

    /// Sightseeing highlights for a country
    async fn get_attractions(&self, code: &str) -> ApiResult<AttractionsInfo>;

    /// Visa and passport requirements for a country
    async fn get_entry_requirement(&self, code: &str) -> ApiResult<EntryRequirement>;
}
