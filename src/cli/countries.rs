//! Country command implementations

use colored::Colorize;

use crate::cli::{CommandContext, CountryFilterArgs, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::{CountryDetail, CountryList};
use crate::output::{offline_notice, print_cached};

/// Run the `countries list` command
pub async fn list(opts: &GlobalOptions, filters: &CountryFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let query = filters.to_query();
    log::debug!("Listing countries with {:?}", query);

    let limit = filters.limit;
    let result = ctx.repo.list_countries(&query).await?.map(|mut countries| {
        if let Some(limit) = limit {
            countries.truncate(limit);
        }
        CountryList(countries)
    });

    print_cached(&result, ctx.format)
}

/// Run the `countries get` command.
///
/// With `--with-safety` the country and its safety report are fetched
/// concurrently. A failed safety lookup only drops the safety section.
pub async fn get(opts: &GlobalOptions, code: &str, with_safety: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !with_safety {
        let result = ctx.repo.get_country(code).await?;
        return print_cached(&result.map(CountryDetail::new), ctx.format);
    }

    let (country, safety) = tokio::join!(ctx.repo.get_country(code), ctx.repo.get_safety_info(code));
    let country = country?;

    let safety = match safety {
        Ok(result) => {
            if ctx.format != OutputFormat::Json
                && let Some(notice) = offline_notice(&result)
            {
                eprintln!("{}", format!("Safety report: {}", notice).yellow());
            }
            Some(result.into_data())
        }
        Err(err) => {
            log::warn!("Safety report unavailable for {}: {}", code, err);
            None
        }
    };

    print_cached(
        &country.map(|c| CountryDetail::new(c).with_safety(safety)),
        ctx.format,
    )
}

/// Run the `countries refresh` command
pub async fn refresh(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let count = ctx.repo.refresh_countries().await?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "countries_cached": count,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => println!("{} Cached {} countries", "✓".green(), count),
    }

    Ok(())
}
