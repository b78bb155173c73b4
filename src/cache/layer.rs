//! Cache layer that orchestrates the local store with network fetching.
//!
//! Every read follows the same protocol:
//!
//! 1. Check the local store - if the snapshot is fresh, return it
//! 2. If stale or missing, fetch from the network and write through
//! 3. On network failure, return whatever the store holds (offline mode)
//! 4. With nothing cached, surface the network error
//!
//! Storage errors are never treated as a miss; they always propagate.

use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::policy::{is_expired, oldest};
use super::storage::{CacheStorage, CachedEntity};
use super::traits::{CacheResult, Cacheable};
use crate::error::{ApiError, Result};

/// Filter for multi-record reads.
///
/// Blank strings count as absent. Only an empty query is ever cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text substring matched against searchable fields
    pub text: Option<String>,
    /// Exact category value (e.g. a region)
    pub category: Option<String>,
}

impl ListQuery {
    pub fn new(text: Option<&str>, category: Option<&str>) -> Self {
        Self {
            text: non_blank(text),
            category: non_blank(category),
        }
    }

    #[cfg(test)]
    pub fn text(text: &str) -> Self {
        Self::new(Some(text), None)
    }

    #[cfg(test)]
    pub fn category(category: &str) -> Self {
        Self::new(None, Some(category))
    }

    /// True for a plain "get all" read
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Read-through cache in front of a remote source.
#[derive(Clone)]
pub struct CacheLayer {
    storage: Arc<CacheStorage>,
}

impl CacheLayer {
    /// Create a cache layer over an explicitly constructed store.
    pub fn new(storage: Arc<CacheStorage>) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// Fetch a single entity by key with cache-first strategy.
    ///
    /// A fresh hit never calls `fetcher`. A fetched entity whose key differs
    /// from `key` is rejected as an invalid response, since it could never
    /// be found again under `key`.
    pub async fn fetch_one<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetcher: F,
    ) -> Result<CacheResult<T>>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, ApiError>>,
    {
        let entity_type = T::entity_type();
        let cached = self.storage.get::<T>(key)?;

        if let Some(hit) = &cached
            && !is_expired(hit.cached_at, ttl, Utc::now())
        {
            log::debug!("Cache hit: {}/{}", entity_type, key);
            return Ok(CacheResult::from_cache(hit.entity.clone(), hit.cached_at));
        }

        let fetched = fetcher().await.and_then(|data| {
            if data.cache_key().eq_ignore_ascii_case(key) {
                Ok(data)
            } else {
                Err(ApiError::InvalidResponse(format!(
                    "requested {} '{}' but received '{}'",
                    entity_type,
                    key,
                    data.cache_key()
                )))
            }
        });

        match fetched {
            Ok(data) => {
                self.storage.upsert(&data, Utc::now())?;
                log::debug!("Fetched and cached {}/{}", entity_type, key);
                Ok(CacheResult::from_network(data))
            }
            Err(err) => match cached {
                Some(stale) => {
                    log::warn!(
                        "Fetching {}/{} failed ({}), serving copy cached at {}",
                        entity_type,
                        key,
                        err,
                        stale.cached_at
                    );
                    Ok(CacheResult::offline(stale.entity, stale.cached_at))
                }
                None => Err(err.into()),
            },
        }
    }

    /// Fetch a list with cache-first strategy.
    ///
    /// Freshness is only checked for an empty query, using the oldest record
    /// of the set. Filtered results are never written to the store; an empty
    /// query merges the fetched list into it. Network results are ordered by
    /// sort key, matching cached reads.
    pub async fn fetch_many<T, F, Fut>(
        &self,
        query: &ListQuery,
        ttl: Duration,
        fetcher: F,
    ) -> Result<CacheResult<Vec<T>>>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Vec<T>, ApiError>>,
    {
        let entity_type = T::entity_type();
        let cached = self.read_matching::<T>(query)?;

        if query.is_empty()
            && let Some(oldest_at) = oldest(cached.iter().map(|c| c.cached_at))
            && !is_expired(oldest_at, ttl, Utc::now())
        {
            log::debug!("Cache hit: {} list ({} records)", entity_type, cached.len());
            return Ok(CacheResult::from_cache(into_entities(cached), oldest_at));
        }

        match fetcher().await {
            Ok(mut data) => {
                data.sort_by_key(|entity| entity.sort_key());
                if query.is_empty() {
                    self.storage.upsert_all(&data, Utc::now())?;
                    log::debug!("Cached {} {} records", data.len(), entity_type);
                }
                Ok(CacheResult::from_network(data))
            }
            Err(err) => {
                let fallback = self.read_matching::<T>(query)?;
                match oldest(fallback.iter().map(|c| c.cached_at)) {
                    Some(oldest_at) => {
                        log::warn!(
                            "Fetching {} list failed ({}), serving {} cached records",
                            entity_type,
                            err,
                            fallback.len()
                        );
                        Ok(CacheResult::offline(into_entities(fallback), oldest_at))
                    }
                    None => Err(err.into()),
                }
            }
        }
    }

    /// Force the cached set of `T` to match the remote source.
    ///
    /// On success the previous records are replaced atomically and the number
    /// of records now stored is returned (duplicate keys count once). On
    /// failure the store is left untouched.
    pub async fn refresh<T, F, Fut>(&self, fetcher: F) -> Result<usize>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Vec<T>, ApiError>>,
    {
        let data = fetcher().await?;
        self.storage.replace_all(&data, Utc::now())?;
        let stored = self.storage.count::<T>()?;
        log::info!("Refreshed {} {} records", stored, T::entity_type());
        Ok(stored)
    }

    fn read_matching<T: Cacheable>(&self, query: &ListQuery) -> Result<Vec<CachedEntity<T>>> {
        let rows = match (&query.text, &query.category) {
            (Some(text), _) => self.storage.search::<T>(text)?,
            (None, Some(category)) => self.storage.filter_by_category::<T>(category)?,
            (None, None) => self.storage.get_all::<T>()?,
        };
        Ok(rows)
    }
}

fn into_entities<T>(rows: Vec<CachedEntity<T>>) -> Vec<T> {
    rows.into_iter().map(|c| c.entity).collect()
}
