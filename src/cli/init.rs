//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cache::CacheTtl;
use crate::cli::GlobalOptions;
use crate::client::{CountryApi, CountryQuery, KantaClient};
use crate::config::{Config, TtlEntry};
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API base URL and cache TTLs, optionally checks that the
/// API is reachable, then writes the config file. Existing values are
/// offered as defaults.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Kanta!".bold().green());
    println!("Let's set up your travel API configuration.\n");

    let existing = Config::load_at(opts.config_ref()).unwrap_or_default();
    let theme = ColorfulTheme::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(existing.api_base_url(opts.api_host_ref()))
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://".to_string())
            }
        })
        .interact_text()?;

    let country_hours: u64 = Input::with_theme(&theme)
        .with_prompt("Country cache TTL (hours)")
        .default(current_hours(&existing, "country", CacheTtl::COUNTRY))
        .interact_text()?;

    let safety_hours: u64 = Input::with_theme(&theme)
        .with_prompt("Safety report cache TTL (hours)")
        .default(current_hours(&existing, "safety_info", CacheTtl::SAFETY))
        .interact_text()?;

    let config = apply_answers(existing, &base_url, country_hours, safety_hours);
    config.validate()?;

    let check_connection = Confirm::with_theme(&theme)
        .with_prompt("Check the API connection now?")
        .default(true)
        .interact()?;

    if check_connection {
        println!("\n{}", "Contacting API...".cyan());
        let client = KantaClient::with_host(Some(base_url.clone()))?;
        match client.list_countries(&CountryQuery::all()).await {
            Ok(countries) => println!(
                "{} API reachable ({} countries available)",
                "✓".green(),
                countries.len()
            ),
            Err(err) => println!(
                "{} API not reachable: {} (saving anyway, cached data will be used offline)",
                "⚠".yellow(),
                err
            ),
        }
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Download the country list", "kanta countries refresh".cyan());
    println!("  {} - Browse countries", "kanta countries list".cyan());

    Ok(())
}

fn current_hours(config: &Config, entity_type: &str, default: std::time::Duration) -> u64 {
    config
        .cache
        .ttl
        .get(entity_type)
        .map(|entry| entry.ttl_hours)
        .unwrap_or(default.as_secs() / 3600)
}

/// Merge prompt answers into a config. TTLs equal to the built-in default
/// are left out of the file.
fn apply_answers(mut config: Config, base_url: &str, country_hours: u64, safety_hours: u64) -> Config {
    let base_url = base_url.trim_end_matches('/');
    config.api_base_url = if base_url == crate::config::DEFAULT_API_BASE_URL {
        None
    } else {
        Some(base_url.to_string())
    };

    for (entity_type, hours, default) in [
        ("country", country_hours, CacheTtl::COUNTRY),
        ("safety_info", safety_hours, CacheTtl::SAFETY),
    ] {
        if hours == default.as_secs() / 3600 {
            config.cache.ttl.remove(entity_type);
        } else {
            config
                .cache
                .ttl
                .insert(entity_type.to_string(), TtlEntry { ttl_hours: hours });
        }
    }

    config
}
