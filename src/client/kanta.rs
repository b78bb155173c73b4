//! Kanta travel API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{AttractionsInfo, Country, EntryRequirement, SafetyInfo};
use super::{CountryApi, CountryQuery, TravelInfoApi};
use crate::config::DEFAULT_API_BASE_URL;
use crate::error::{ApiError, ApiResult};

/// Client-side request budget
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Kanta travel API client
///
/// Every call is a single attempt. Caching and fallback live in the
/// repository, not here.
pub struct KantaClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl KantaClient {
    /// Create a client against the production API
    #[allow(dead_code)]
    pub fn new() -> ApiResult<Self> {
        Self::with_host(None)
    }

    /// Create a client against a custom host (e.g. a local backend)
    pub fn with_host(base_url: Option<String>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("kanta/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `/api{path}` and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/api{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            }),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.is_empty())
                    .unwrap_or_else(|| format!("{} not found", path));
                Err(ApiError::NotFound(error_msg))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg))
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg))
            }
            _ => Err(ApiError::InvalidResponse(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl CountryApi for KantaClient {
    async fn list_countries(&self, query: &CountryQuery) -> ApiResult<Vec<Country>> {
        let mut params = Vec::new();
        if let Some(text) = query.text.as_deref() {
            params.push(("q", text));
        }
        if let Some(region) = query.region.as_deref() {
            params.push(("region", region));
        }
        self.get("/countries", &params).await
    }

    async fn get_country(&self, code: &str) -> ApiResult<Country> {
        self.get(&format!("/countries/{}", code), &[]).await
    }
}

#[async_trait]
impl TravelInfoApi for KantaClient {
    async fn get_safety_info(&self, code: &str) -> ApiResult<SafetyInfo> {
        self.get(&format!("/countries/{}/safety", code), &[]).await
    }

    async fn get_attractions(&self, code: &str) -> ApiResult<AttractionsInfo> {
        self.get(&format!("/countries/{}/attractions", code), &[])
            .await
    }

    async fn get_entry_requirement(&self, code: &str) -> ApiResult<EntryRequirement> {
        self.get(&format!("/countries/{}/entry", code), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::SafetyLevel;
    use mockito::Matcher;

    const JAPAN: &str = r#"{
        "code": "JP",
        "name": "Japan",
        "name_ja": "日本",
        "capital": "Tokyo",
        "region": "Asia",
        "population": 125836021,
        "flag_emoji": "🇯🇵"
    }"#;

    #[test]
    fn test_client_creation() {
        let client = KantaClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_custom_host_trailing_slash_trimmed() {
        let client = KantaClient::with_host(Some("http://localhost:8000/".to_string())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_get_country() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/countries/JP")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(JAPAN)
            .create_async()
            .await;

        let client = KantaClient::with_host(Some(server.url())).unwrap();
        let country = client.get_country("JP").await.unwrap();

        assert_eq!(country.name, "Japan");
        assert_eq!(country.name_ja.as_deref(), Some("日本"));
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_list_countries_sends_filters() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/countries")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "jap".into()),
                Matcher::UrlEncoded("region".into(), "Asia".into()),
            ]))
            .with_status(200)
            .with_body(format!("[{}]", JAPAN))
            .create_async()
            .await;

        let client = KantaClient::with_host(Some(server.url())).unwrap();
        let countries = client
            .list_countries(&CountryQuery::new(Some("jap"), Some("Asia")))
            .await
            .unwrap();

        assert_eq!(countries.len(), 1);
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_get_safety_info() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/countries/TH/safety")
            .with_status(200)
            .with_body(r#"{"country_code": "TH", "level": 1, "summary": "Exercise caution"}"#)
            .create_async()
            .await;

        let client = KantaClient::with_host(Some(server.url())).unwrap();
        let info = client.get_safety_info("TH").await.unwrap();

        assert_eq!(info.level, SafetyLevel::Caution);
        assert!(info.details.is_empty());
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/api/countries/ZZ")
            .with_status(404)
            .with_body("Country not found: ZZ")
            .create_async()
            .await;
        let _limited = server
            .mock("GET", "/api/countries/RL")
            .with_status(429)
            .with_header("retry-after", "5")
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/api/countries/SE")
            .with_status(503)
            .create_async()
            .await;
        let _garbage = server
            .mock("GET", "/api/countries/GB")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = KantaClient::with_host(Some(server.url())).unwrap();

        assert!(matches!(
            client.get_country("ZZ").await,
            Err(ApiError::NotFound(msg)) if msg.contains("ZZ")
        ));
        assert!(matches!(
            client.get_country("RL").await,
            Err(ApiError::RateLimit(d)) if d == Duration::from_secs(5)
        ));
        assert!(matches!(
            client.get_country("SE").await,
            Err(ApiError::ServerError(_))
        ));
        assert!(matches!(
            client.get_country("GB").await,
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[cfg_attr(not(feature = "http-tests"), ignore)]
    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Nothing listens on the discard port
        let client = KantaClient::with_host(Some("http://127.0.0.1:9".to_string())).unwrap();
        let err = client.get_country("JP").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
