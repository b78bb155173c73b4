//! Cache management commands

use crate::cli::context::{open_storage, resolve_cache_dir};
use crate::cli::{CachedKind, GlobalOptions, OutputFormat};
use crate::client::models::{Country, SafetyInfo};
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::{format_age, format_size, format_timestamp_local};

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let cache = open_storage(opts, &config)?;
    let stats = cache.stats()?;
    let path = cache
        .db_path()
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    match opts.format {
        OutputFormat::Json => {
            let by_type: serde_json::Map<String, serde_json::Value> = stats
                .by_type
                .iter()
                .map(|(entity_type, count)| (entity_type.clone(), (*count).into()))
                .collect();
            let json = serde_json::json!({
                "total_entries": stats.total_entries,
                "entries_by_type": by_type,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "oldest_entry_timestamp": stats.oldest_entry.map(|t| t.to_rfc3339()),
                "newest_entry_timestamp": stats.newest_entry.map(|t| t.to_rfc3339()),
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            let now = chrono::Utc::now();

            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("Entries:        {}", stats.total_entries);
            for (entity_type, count) in &stats.by_type {
                println!("  {:<13} {}", format!("{}:", entity_type), count);
            }
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            if let Some(oldest) = stats.oldest_entry {
                println!(
                    "Oldest entry:   {} ({})",
                    format_timestamp_local(oldest),
                    format_age(oldest, now)
                );
            }

            if let Some(newest) = stats.newest_entry {
                println!(
                    "Newest entry:   {} ({})",
                    format_timestamp_local(newest),
                    format_age(newest, now)
                );
            }
        }
    }

    Ok(())
}

/// Clear cache entries, all of them or one kind
pub fn clear(opts: &GlobalOptions, kind: Option<CachedKind>) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let cache = open_storage(opts, &config)?;
    let entries_removed = match kind {
        Some(CachedKind::Countries) => cache.delete_all::<Country>()?,
        Some(CachedKind::Safety) => cache.delete_all::<SafetyInfo>()?,
        None => cache.clear_all()?.entries_removed,
    };

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": entries_removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if entries_removed > 0 {
                println!("Cleared {} cache entries", entries_removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let path = resolve_cache_dir(opts.cache_dir_ref(), &config)?;
    println!("{}", path.display());
    Ok(())
}
