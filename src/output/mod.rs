//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cache::CacheResult;
use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Lists of display rows render as one table row per entry in both
/// human-readable formats.
impl<D: Tabled + Serialize> Formattable for Vec<D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Print a cache read.
///
/// JSON output carries the source and cache time in `meta`. Human-readable
/// output notes stale fallbacks on stderr so stdout stays parseable.
pub fn print_cached<T: Formattable + Serialize>(
    result: &CacheResult<T>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_cached_json(result)?),
        _ => {
            result.data.print(format)?;
            if let Some(notice) = offline_notice(result) {
                eprintln!("{}", notice.yellow());
            }
        }
    }
    Ok(())
}

/// One-line notice for data served from cache because the API failed
pub fn offline_notice<T>(result: &CacheResult<T>) -> Option<String> {
    if !result.is_offline() {
        return None;
    }
    let when = result
        .cached_at
        .map(|at| {
            format!(
                "{} ({})",
                formatters::format_timestamp_local(at),
                formatters::format_age(at, chrono::Utc::now())
            )
        })
        .unwrap_or_else(|| "an unknown time".to_string());
    Some(format!("⚠ Offline: showing data cached at {}", when))
}
