//! Country catalogue API trait

use async_trait::async_trait;

use crate::client::CountryQuery;
use crate::client::models::Country;
use crate::error::ApiResult;

/// Country lookups against the travel API
#[async_trait]
pub trait CountryApi: Send + Sync {
    /// List countries, optionally filtered by name text and/or region.
    ///
    /// An empty query returns the full catalogue.
    async fn list_countries(&self, query: &CountryQuery) -> ApiResult<Vec<Country>>;

    /// Get a single country by ISO 3166-1 alpha-2 code
    async fn get_country(&self, code: &str) -> ApiResult<Country>;
}
