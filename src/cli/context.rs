//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, cache opening, and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{CacheStorage, TtlPolicy};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::KantaClient;
use crate::config::Config;
use crate::error::Result;
use crate::repository::CountryRepository;

/// Context for command execution: the repository plus output preferences.
pub struct CommandContext {
    /// Offline-first accessor over the API client and local cache
    pub repo: CountryRepository<KantaClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config (defaults when the file is absent), resolves the API
    /// base URL and cache directory, opens the cache and builds the client.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the cache cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let ttl = TtlPolicy::from_config(&config.cache);
        for entity_type in ttl.unknown_types() {
            log::warn!(
                "Config sets a TTL for unknown entity type '{}'; it will be ignored",
                entity_type
            );
        }

        let client = Arc::new(KantaClient::with_host(Some(
            config.api_base_url(opts.api_host_ref()),
        ))?);
        log::debug!("Using API base URL {}", client.base_url());

        let storage = Arc::new(open_storage(opts, &config)?);
        let repo = CountryRepository::new(client, storage, ttl);

        Ok(Self {
            repo,
            format: opts.format,
        })
    }
}

/// Cache directory from `--cache-dir` or the config file, flag first
fn configured_cache_dir(cache_dir_override: Option<&str>, config: &Config) -> Option<PathBuf> {
    cache_dir_override
        .map(PathBuf::from)
        .or_else(|| config.cache_dir.clone())
}

/// Effective cache directory: `--cache-dir` > config file > platform default
pub fn resolve_cache_dir(cache_dir_override: Option<&str>, config: &Config) -> Result<PathBuf> {
    match configured_cache_dir(cache_dir_override, config) {
        Some(dir) => Ok(dir),
        None => Ok(CacheStorage::cache_dir()?),
    }
}

/// Open the cache at the effective directory
pub fn open_storage(opts: &GlobalOptions, config: &Config) -> Result<CacheStorage> {
    let storage = match configured_cache_dir(opts.cache_dir_ref(), config) {
        Some(dir) => CacheStorage::open_at(&dir)?,
        None => CacheStorage::open()?,
    };
    log::debug!("Opened cache at {}", storage.db_path().display());
    Ok(storage)
}
