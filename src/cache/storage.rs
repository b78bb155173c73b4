//! SQLite-based local store for cached entity snapshots
//!
//! One row per (entity type, natural key). Each row keeps the serialized
//! snapshot alongside the columns used for ordered, searched and filtered
//! reads, plus the time the snapshot was written.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::traits::Cacheable;
use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 2;

/// Database file name inside the cache directory
const DB_FILE: &str = "cache.db";

type Result<T> = std::result::Result<T, CacheError>;

/// A cached snapshot together with the time it was written.
#[derive(Debug, Clone)]
pub struct CachedEntity<T> {
    pub entity: T,
    pub cached_at: DateTime<Utc>,
}

/// SQLite-backed entity store.
///
/// The connection sits behind a mutex, so reads and writes from concurrent
/// tasks are serialized and the last write for a key wins.
pub struct CacheStorage {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl CacheStorage {
    /// Open or create cache storage at the default XDG cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir)
    }

    /// Get the cache directory path (~/.cache/kanta on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("kanta"))
    }

    /// Open cache storage at a specific directory
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            Self::nuke(&db_path)?;
            return Self::open_at(cache_dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entity_cache (
                entity_type TEXT NOT NULL,
                entity_key TEXT NOT NULL,
                sort_key TEXT NOT NULL,
                search_text TEXT NOT NULL DEFAULT '',
                category TEXT,
                data TEXT NOT NULL,
                cached_at INTEGER NOT NULL,
                PRIMARY KEY (entity_type, entity_key)
            );

            CREATE INDEX IF NOT EXISTS idx_entity_sort ON entity_cache(entity_type, sort_key);
            CREATE INDEX IF NOT EXISTS idx_entity_category ON entity_cache(entity_type, category);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: db_path,
        })
    }

    /// Path of the underlying database file
    pub fn db_path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| CacheError::Lock(e.to_string()))
    }

    /// Get a single snapshot by natural key
    pub fn get<T: Cacheable>(&self, key: &str) -> Result<Option<CachedEntity<T>>> {
        let conn = self.lock()?;

        let row: Option<(String, i64)> = conn
            .query_row(
                "SELECT data, cached_at FROM entity_cache
                 WHERE entity_type = ?1 AND entity_key = ?2",
                params![T::entity_type(), key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        row.map(|(data, cached_at)| decode::<T>(key, &data, cached_at))
            .transpose()
    }

    /// All snapshots of `T`, ordered by display key
    pub fn get_all<T: Cacheable>(&self) -> Result<Vec<CachedEntity<T>>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT entity_key, data, cached_at FROM entity_cache
             WHERE entity_type = ?1
             ORDER BY sort_key ASC",
        )?;
        let rows = stmt.query_map(params![T::entity_type()], read_row)?;
        collect_rows::<T>(rows)
    }

    /// Snapshots whose searchable fields contain `text` (case-insensitive)
    pub fn search<T: Cacheable>(&self, text: &str) -> Result<Vec<CachedEntity<T>>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT entity_key, data, cached_at FROM entity_cache
             WHERE entity_type = ?1 AND instr(search_text, ?2) > 0
             ORDER BY sort_key ASC",
        )?;
        let needle = text.to_lowercase();
        let rows = stmt.query_map(params![T::entity_type(), needle], read_row)?;
        collect_rows::<T>(rows)
    }

    /// Snapshots whose category equals `category` exactly
    pub fn filter_by_category<T: Cacheable>(&self, category: &str) -> Result<Vec<CachedEntity<T>>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT entity_key, data, cached_at FROM entity_cache
             WHERE entity_type = ?1 AND category = ?2
             ORDER BY sort_key ASC",
        )?;
        let rows = stmt.query_map(params![T::entity_type(), category], read_row)?;
        collect_rows::<T>(rows)
    }

    /// Insert or replace one snapshot
    pub fn upsert<T: Cacheable>(&self, entity: &T, cached_at: DateTime<Utc>) -> Result<()> {
        let conn = self.lock()?;
        write_row(&conn, entity, cached_at.timestamp_millis())
    }

    /// Insert or replace many snapshots in one transaction.
    ///
    /// Records not present in `entities` are left in place.
    pub fn upsert_all<T: Cacheable>(&self, entities: &[T], cached_at: DateTime<Utc>) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let millis = cached_at.timestamp_millis();
        for entity in entities {
            write_row(&tx, entity, millis)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Replace every snapshot of `T` with `entities` in one transaction.
    ///
    /// Concurrent readers see either the old set or the new one.
    pub fn replace_all<T: Cacheable>(&self, entities: &[T], cached_at: DateTime<Utc>) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM entity_cache WHERE entity_type = ?1",
            params![T::entity_type()],
        )?;
        let millis = cached_at.timestamp_millis();
        for entity in entities {
            write_row(&tx, entity, millis)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete every snapshot of `T`, returning how many were removed
    pub fn delete_all<T: Cacheable>(&self) -> Result<usize> {
        let conn = self.lock()?;
        let deleted = conn.execute(
            "DELETE FROM entity_cache WHERE entity_type = ?1",
            params![T::entity_type()],
        )?;
        Ok(deleted)
    }

    /// Number of snapshots of `T`
    pub fn count<T: Cacheable>(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM entity_cache WHERE entity_type = ?1",
            params![T::entity_type()],
            |r| r.get(0),
        )?;
        Ok(count as usize)
    }

    /// Clear all cache entries of every entity type
    pub fn clear_all(&self) -> Result<ClearStats> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM entity_cache", [])?;
        Ok(ClearStats {
            entries_removed: removed,
        })
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let conn = self.lock()?;

        let (total_entries, total_size, oldest, newest): (i64, i64, Option<i64>, Option<i64>) =
            conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(length(data)), 0), MIN(cached_at), MAX(cached_at)
                 FROM entity_cache",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )?;

        let mut stmt = conn.prepare(
            "SELECT entity_type, COUNT(*) FROM entity_cache
             GROUP BY entity_type ORDER BY entity_type",
        )?;
        let by_type = stmt
            .query_map([], |r| {
                let entity_type: String = r.get(0)?;
                let count: i64 = r.get(1)?;
                Ok((entity_type, count as usize))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(CacheStats {
            total_entries: total_entries as usize,
            total_size_bytes: total_size as usize,
            by_type,
            oldest_entry: oldest.and_then(DateTime::from_timestamp_millis),
            newest_entry: newest.and_then(DateTime::from_timestamp_millis),
        })
    }

    /// Nuke the cache database file
    fn nuke(db_path: &Path) -> Result<()> {
        if db_path.exists() {
            std::fs::remove_file(db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
        }
        Ok(())
    }
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_size_bytes: usize,
    /// Entry count per entity type, sorted by type name
    pub by_type: Vec<(String, usize)>,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
}

fn write_row<T: Cacheable>(conn: &Connection, entity: &T, cached_at_millis: i64) -> Result<()> {
    let data = serde_json::to_string(entity).map_err(|e| CacheError::Serialize(e.to_string()))?;
    let search_text = entity
        .search_fields()
        .iter()
        .map(|field| field.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    conn.execute(
        "INSERT OR REPLACE INTO entity_cache
         (entity_type, entity_key, sort_key, search_text, category, data, cached_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            T::entity_type(),
            entity.cache_key(),
            entity.sort_key(),
            search_text,
            entity.category(),
            data,
            cached_at_millis
        ],
    )?;
    Ok(())
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<(String, String, i64)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn collect_rows<T: Cacheable>(
    rows: impl Iterator<Item = rusqlite::Result<(String, String, i64)>>,
) -> Result<Vec<CachedEntity<T>>> {
    rows.map(|row| {
        let (key, data, cached_at) = row?;
        decode::<T>(&key, &data, cached_at)
    })
    .collect()
}

fn decode<T: Cacheable>(key: &str, data: &str, cached_at: i64) -> Result<CachedEntity<T>> {
    let corrupt = |reason: String| CacheError::Corrupt {
        entity_type: T::entity_type(),
        key: key.to_string(),
        reason,
    };

    let entity = serde_json::from_str(data).map_err(|e| corrupt(e.to_string()))?;
    let cached_at = DateTime::from_timestamp_millis(cached_at)
        .ok_or_else(|| corrupt(format!("invalid timestamp {}", cached_at)))?;

    Ok(CachedEntity { entity, cached_at })
}
