//! Status command implementation

use colored::Colorize;

use crate::cache::{CACHED_TYPES, TtlPolicy};
use crate::cli::GlobalOptions;
use crate::cli::context::open_storage;
use crate::client::models::{Country, SafetyInfo};
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::{format_age, format_ttl};

/// Run the status command to display configuration and cache status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Kanta Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            if config_path.exists() {
                println!(
                    "{} Config file: {}",
                    "✓".green(),
                    config_path.display().to_string().cyan()
                );
            } else {
                println!("{} No config file (using defaults)", "○".dimmed());
                println!("  → Run 'kanta init' to create one");
            }
            config
        }
        Err(err) => {
            println!("{} Config file invalid: {}", "✗".red(), err);
            return Ok(());
        }
    };

    let base_url = config.api_base_url(opts.api_host_ref());
    println!("{} API: {}", "○".dimmed(), base_url.cyan());

    let ttl = TtlPolicy::from_config(&config.cache);
    for entity_type in CACHED_TYPES {
        println!(
            "{} {} TTL: {}",
            "○".dimmed(),
            entity_type,
            format_ttl(ttl.ttl_for_type(entity_type))
        );
    }
    for unknown in ttl.unknown_types() {
        println!("{} Unknown TTL entry ignored: {}", "⚠".yellow(), unknown);
    }

    println!();

    match open_storage(opts, &config) {
        Ok(storage) => {
            let stats = storage.stats()?;
            println!(
                "{} Cache: {}",
                "✓".green(),
                storage.db_path().display().to_string().cyan()
            );
            println!("  Countries cached: {}", storage.count::<Country>()?);
            println!("  Safety reports cached: {}", storage.count::<SafetyInfo>()?);
            if let Some(newest) = stats.newest_entry {
                println!(
                    "  Last update: {}",
                    format_age(newest, chrono::Utc::now())
                );
            } else {
                println!("  → Run 'kanta countries refresh' to fill the cache");
            }
        }
        Err(err) => println!("{} Cache unavailable: {}", "✗".red(), err),
    }

    println!();
    Ok(())
}
