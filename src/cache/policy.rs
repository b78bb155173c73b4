//! Staleness rules for cached snapshots

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A snapshot is expired once strictly more than `ttl` has elapsed since it
/// was cached. A snapshot aged exactly `ttl` is still fresh, as is one whose
/// timestamp lies in the future.
pub fn is_expired(cached_at: DateTime<Utc>, ttl: Duration, now: DateTime<Utc>) -> bool {
    match (now - cached_at).to_std() {
        Ok(age) => age > ttl,
        Err(_) => false,
    }
}

/// Freshness of a set is decided by its oldest member.
///
/// Returns `None` for an empty set, which callers treat as a miss.
pub fn oldest<I>(timestamps: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    timestamps.into_iter().min()
}
