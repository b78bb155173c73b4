//! Mock Kanta API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{CountryApi, TravelInfoApi};
use super::models::{AttractionsInfo, Country, EntryRequirement, SafetyInfo};
use super::CountryQuery;
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// Server-side filtering of `list_countries` is emulated.
///
/// # Example
/// ```ignore
/// let mock = MockKantaClient::new()
///     .with_countries(vec![CountryBuilder::new("JP").build()])
///     .await;
///
/// let countries = mock.list_countries(&CountryQuery::all()).await?;
/// assert_eq!(countries.len(), 1);
/// ```
pub struct MockKantaClient {
    /// Countries served by list_countries/get_country
    countries: Arc<Mutex<Vec<Country>>>,
    /// Safety reports served by get_safety_info
    safety: Arc<Mutex<Vec<SafetyInfo>>>,
    /// Attractions served by get_attractions
    attractions: Arc<Mutex<Vec<AttractionsInfo>>>,
    /// Entry requirements served by get_entry_requirement
    entries: Arc<Mutex<Vec<EntryRequirement>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// When set, every call fails with a network error
    offline: Arc<Mutex<bool>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Queries passed to list_countries, in call order
    captured_queries: Arc<Mutex<Vec<CountryQuery>>>,
}

impl Default for MockKantaClient {
    fn default() -> Self {
        Self {
            countries: Arc::new(Mutex::new(Vec::new())),
            safety: Arc::new(Mutex::new(Vec::new())),
            attractions: Arc::new(Mutex::new(Vec::new())),
            entries: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            offline: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_queries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_countries: usize,
    pub get_country: usize,
    pub get_safety_info: usize,
    pub get_attractions: usize,
    pub get_entry_requirement: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_countries
            + self.get_country
            + self.get_safety_info
            + self.get_attractions
            + self.get_entry_requirement
    }
}

impl MockKantaClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure countries to serve.
    pub async fn with_countries(self, countries: Vec<Country>) -> Self {
        *self.countries.lock().await = countries;
        self
    }

    /// Configure safety reports to serve.
    pub async fn with_safety(self, safety: Vec<SafetyInfo>) -> Self {
        *self.safety.lock().await = safety;
        self
    }

    /// Configure attractions to serve.
    pub async fn with_attractions(self, attractions: Vec<AttractionsInfo>) -> Self {
        *self.attractions.lock().await = attractions;
        self
    }

    /// Configure entry requirements to serve.
    pub async fn with_entries(self, entries: Vec<EntryRequirement>) -> Self {
        *self.entries.lock().await = entries;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Replace the served countries (simulates upstream data changing).
    pub async fn set_countries(&self, countries: Vec<Country>) {
        *self.countries.lock().await = countries;
    }

    /// Replace the served safety reports.
    pub async fn set_safety(&self, safety: Vec<SafetyInfo>) {
        *self.safety.lock().await = safety;
    }

    /// Toggle network availability.
    pub async fn set_offline(&self, offline: bool) {
        *self.offline.lock().await = offline;
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Queries received by list_countries.
    pub async fn captured_queries(&self) -> Vec<CountryQuery> {
        self.captured_queries.lock().await.clone()
    }

    async fn check_error(&self) -> ApiResult<()> {
        // Check one-shot error first
        {
            let mut error = self.error.lock().await;
            if let Some(e) = error.take() {
                return Err(e);
            }
        }

        if *self.offline.lock().await {
            return Err(ApiError::Network("Failed to connect to API".to_string()));
        }

        Ok(())
    }
}

fn matches_query(country: &Country, query: &CountryQuery) -> bool {
    let text_ok = query.text.as_deref().is_none_or(|text| {
        let needle = text.to_lowercase();
        country.name.to_lowercase().contains(&needle)
            || country
                .name_ja
                .as_deref()
                .is_some_and(|ja| ja.to_lowercase().contains(&needle))
    });
    let region_ok = query
        .region
        .as_deref()
        .is_none_or(|region| country.region == region);
    text_ok && region_ok
}

fn not_found(kind: &str, code: &str) -> ApiError {
    ApiError::NotFound(format!("{} not found: {}", kind, code))
}

#[async_trait]
impl CountryApi for MockKantaClient {
    async fn list_countries(&self, query: &CountryQuery) -> ApiResult<Vec<Country>> {
        self.captured_queries.lock().await.push(query.clone());
        self.call_count.lock().await.list_countries += 1;
        self.check_error().await?;

        let countries = self.countries.lock().await;
        Ok(countries
            .iter()
            .filter(|c| matches_query(c, query))
            .cloned()
            .collect())
    }

    async fn get_country(&self, code: &str) -> ApiResult<Country> {
        self.call_count.lock().await.get_country += 1;
        self.check_error().await?;

        self.countries
            .lock()
            .await
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .ok_or_else(|| not_found("Country", code))
    }
}

#[async_trait]
impl TravelInfoApi for MockKantaClient {
    async fn get_safety_info(&self, code: &str) -> ApiResult<SafetyInfo> {
        self.call_count.lock().await.get_safety_info += 1;
        self.check_error().await?;

        self.safety
            .lock()
            .await
            .iter()
            .find(|s| s.country_code == code)
            .cloned()
            .ok_or_else(|| not_found("Safety info", code))
    }

    async fn get_attractions(&self, code: &str) -> ApiResult<AttractionsInfo> {
        self.call_count.lock().await.get_attractions += 1;
        self.check_error().await?;

        self.attractions
            .lock()
            .await
            .iter()
            .find(|a| a.country_code == code)
            .cloned()
            .ok_or_else(|| not_found("Attractions", code))
    }

    async fn get_entry_requirement(&self, code: &str) -> ApiResult<EntryRequirement> {
        self.call_count.lock().await.get_entry_requirement += 1;
        self.check_error().await?;

        self.entries
            .lock()
            .await
            .iter()
            .find(|e| e.country_code == code)
            .cloned()
            .ok_or_else(|| not_found("Entry requirement", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{CountryBuilder, SafetyInfoBuilder};

    fn sample_countries() -> Vec<Country> {
        vec![
            CountryBuilder::new("JP")
                .name("Japan")
                .name_ja("日本")
                .region("Asia")
                .build(),
            CountryBuilder::new("FR").name("France").region("Europe").build(),
        ]
    }

    #[tokio::test]
    async fn test_mock_client_list_filters() {
        let mock = MockKantaClient::new()
            .with_countries(sample_countries())
            .await;

        let all = mock.list_countries(&CountryQuery::all()).await.unwrap();
        assert_eq!(all.len(), 2);

        let asia = mock
            .list_countries(&CountryQuery::new(None, Some("Asia")))
            .await
            .unwrap();
        assert_eq!(asia[0].code, "JP");

        let ja = mock
            .list_countries(&CountryQuery::new(Some("日本"), None))
            .await
            .unwrap();
        assert_eq!(ja.len(), 1);

        assert_eq!(mock.captured_queries().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockKantaClient::new()
            .with_countries(sample_countries())
            .await
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        let result = mock.get_country("JP").await;
        assert!(matches!(result, Err(ApiError::ServerError(_))));

        // Error is consumed, next call succeeds
        let result = mock.get_country("JP").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_offline_until_restored() {
        let mock = MockKantaClient::new()
            .with_safety(vec![SafetyInfoBuilder::new("JP").build()])
            .await;
        mock.set_offline(true).await;

        assert!(matches!(
            mock.get_safety_info("JP").await,
            Err(ApiError::Network(_))
        ));
        assert!(mock.get_safety_info("JP").await.is_err());

        mock.set_offline(false).await;
        assert!(mock.get_safety_info("JP").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockKantaClient::new()
            .with_countries(sample_countries())
            .await;

        mock.get_country("JP").await.unwrap();
        mock.get_country("ZZ").await.unwrap_err();
        mock.list_countries(&CountryQuery::all()).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get_country, 2);
        assert_eq!(counts.list_countries, 1);
        assert_eq!(counts.get_safety_info, 0);
        assert_eq!(counts.total(), 3);
    }
}
