//! Core traits and types for the caching system.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Trait for entities that can be cached in the local store.
///
/// Implementors provide a natural key plus the columns the store indexes
/// for ordered, searched and filtered reads.
pub trait Cacheable: Clone + Send + Sync + Serialize + DeserializeOwned {
    /// Natural key of this entity (e.g. country code)
    fn cache_key(&self) -> String;

    /// Entity type name used to partition the store (e.g. "country")
    fn entity_type() -> &'static str;

    /// Stable display key used to order multi-record reads.
    fn sort_key(&self) -> String {
        self.cache_key()
    }

    /// Text fields matched by substring search.
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Category value matched exactly by category filters.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Result from a cache operation, including data and metadata about the source.
#[derive(Debug, Clone)]
pub struct CacheResult<T> {
    /// The actual data
    pub data: T,
    /// Where the data came from
    pub source: CacheSource,
    /// When the data was cached (if served from cache)
    pub cached_at: Option<DateTime<Utc>>,
}

impl<T> CacheResult<T> {
    /// Fresh data just fetched from the network.
    pub fn from_network(data: T) -> Self {
        Self {
            data,
            source: CacheSource::Network,
            cached_at: None,
        }
    }

    /// Cached data still within its TTL.
    pub fn from_cache(data: T, cached_at: DateTime<Utc>) -> Self {
        Self {
            data,
            source: CacheSource::CacheFresh,
            cached_at: Some(cached_at),
        }
    }

    /// Cached data served because the network fetch failed.
    pub fn offline(data: T, cached_at: DateTime<Utc>) -> Self {
        Self {
            data,
            source: CacheSource::Offline,
            cached_at: Some(cached_at),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.source == CacheSource::Offline
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping source metadata
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CacheResult<U> {
        CacheResult {
            data: f(self.data),
            source: self.source,
            cached_at: self.cached_at,
        }
    }
}

/// Indicates where returned data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    /// Fresh data from network
    Network,
    /// Data from cache, still within TTL
    CacheFresh,
    /// Network unavailable, serving possibly stale cached data
    Offline,
}

impl CacheSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheSource::Network => "network",
            CacheSource::CacheFresh => "cache",
            CacheSource::Offline => "offline",
        }
    }
}
