//! Offline-first local cache for API responses
//!
//! Provides a SQLite-backed entity store, staleness rules and the
//! read-through layer that falls back to cached data when the network fails.

pub mod layer;
pub mod policy;
pub mod storage;
pub mod traits;

use std::collections::HashMap;
use std::time::Duration;

use crate::config::CacheConfig;

// Re-export main types
pub use layer::{CacheLayer, ListQuery};
pub use storage::CacheStorage;
pub use traits::{CacheResult, CacheSource, Cacheable};

/// Entity types kept in the cache
pub const CACHED_TYPES: [&str; 2] = ["country", "safety_info"];

/// Cache TTL defaults per entity type
pub struct CacheTtl;

impl CacheTtl {
    // Country reference data changes rarely
    pub const COUNTRY: Duration = Duration::from_secs(24 * 60 * 60); // 24 hr

    // Travel advisories are revised during the day
    pub const SAFETY: Duration = Duration::from_secs(6 * 60 * 60); // 6 hr

    // Anything else that opts into caching
    pub const DEFAULT: Duration = Duration::from_secs(60 * 60); // 1 hr

    /// Built-in TTL for an entity type name
    pub fn default_for(entity_type: &str) -> Duration {
        match entity_type {
            "country" => Self::COUNTRY,
            "safety_info" => Self::SAFETY,
            _ => Self::DEFAULT,
        }
    }
}

/// Resolved TTLs: configured overrides on top of [`CacheTtl`] defaults.
#[derive(Debug, Clone, Default)]
pub struct TtlPolicy {
    overrides: HashMap<String, Duration>,
}

impl TtlPolicy {
    /// Build the policy from the `cache.ttl` config section.
    pub fn from_config(config: &CacheConfig) -> Self {
        let overrides = config
            .ttl
            .iter()
            .map(|(entity_type, entry)| {
                (
                    entity_type.clone(),
                    Duration::from_secs(entry.ttl_hours.saturating_mul(60 * 60)),
                )
            })
            .collect();
        Self { overrides }
    }

    /// TTL for the given cacheable type
    pub fn ttl_for<T: Cacheable>(&self) -> Duration {
        self.ttl_for_type(T::entity_type())
    }

    pub fn ttl_for_type(&self, entity_type: &str) -> Duration {
        self.overrides
            .get(entity_type)
            .copied()
            .unwrap_or_else(|| CacheTtl::default_for(entity_type))
    }

    /// Config keys that do not name a known entity type
    pub fn unknown_types(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .overrides
            .keys()
            .map(String::as_str)
            .filter(|t| !CACHED_TYPES.contains(t))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
