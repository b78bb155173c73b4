//! Offline-first country repository
//!
//! Binds the generic [`CacheLayer`] to the travel API. Countries and safety
//! reports are read through the local cache; attractions and entry
//! requirements are passed straight through to the API.

use std::sync::Arc;

use crate::cache::{CacheLayer, CacheResult, CacheStorage, ListQuery, TtlPolicy};
use crate::client::models::{AttractionsInfo, Country, EntryRequirement, SafetyInfo};
use crate::client::{CountryQuery, KantaApi};
use crate::error::{Error, Result};

/// Country and travel-info accessor with cache-then-network-then-fallback reads.
pub struct CountryRepository<C: KantaApi> {
    client: Arc<C>,
    cache: CacheLayer,
    ttl: TtlPolicy,
}

impl<C: KantaApi> CountryRepository<C> {
    pub fn new(client: Arc<C>, storage: Arc<CacheStorage>, ttl: TtlPolicy) -> Self {
        Self {
            client,
            cache: CacheLayer::new(storage),
            ttl,
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &CacheStorage {
        self.cache.storage()
    }

    /// Get a country by code.
    ///
    /// Served from cache while fresh; a stale copy is returned if the API is
    /// unreachable.
    pub async fn get_country(&self, code: &str) -> Result<CacheResult<Country>> {
        let code = normalize_code(code)?;
        self.cache
            .fetch_one(&code, self.ttl.ttl_for::<Country>(), || {
                self.client.get_country(&code)
            })
            .await
    }

    /// List countries, optionally filtered.
    ///
    /// Only the unfiltered listing is served from (and written to) the cache.
    /// Filtered listings always hit the API and fall back to matching cached
    /// records when it fails.
    pub async fn list_countries(&self, query: &CountryQuery) -> Result<CacheResult<Vec<Country>>> {
        self.cache
            .fetch_many(&ListQuery::from(query), self.ttl.ttl_for::<Country>(), || {
                self.client.list_countries(query)
            })
            .await
    }

    /// Re-download the full country catalogue, replacing the cached set.
    ///
    /// Returns the number of countries now cached.
    pub async fn refresh_countries(&self) -> Result<usize> {
        let all = CountryQuery::all();
        self.cache
            .refresh::<Country, _, _>(|| self.client.list_countries(&all))
            .await
    }

    /// Get the travel advisory for a country
    pub async fn get_safety_info(&self, code: &str) -> Result<CacheResult<SafetyInfo>> {
        let code = normalize_code(code)?;
        self.cache
            .fetch_one(&code, self.ttl.ttl_for::<SafetyInfo>(), || {
                self.client.get_safety_info(&code)
            })
            .await
    }

    /// Attractions are not cached
    pub async fn get_attractions(&self, code: &str) -> Result<AttractionsInfo> {
        let code = normalize_code(code)?;
        Ok(self.client.get_attractions(&code).await?)
    }

    /// Entry requirements are not cached
    pub async fn get_entry_requirement(&self, code: &str) -> Result<EntryRequirement> {
        let code = normalize_code(code)?;
        Ok(self.client.get_entry_requirement(&code).await?)
    }
}

/// Country codes are ISO 3166-1 alpha-2, keyed in upper case
fn normalize_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(Error::InvalidInput(
            "country code must not be empty".to_string(),
        ));
    }
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidInput(format!(
            "'{}' is not a two-letter country code",
            code
        )));
    }
    Ok(code.to_ascii_uppercase())
}
