//! Country display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{join_or_dash, or_dash};
use super::safety::{safety_pretty_lines, safety_record_fields};
use crate::cli::OutputFormat;
use crate::client::models::{Country, Currency, SafetyInfo};
use crate::error::Result;
use crate::output::formatters::format_count;
use crate::output::{Formattable, json, table};

/// Country row for list output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CountryDisplay {
    #[tabled(rename = "CODE")]
    pub code: String,

    /// English name, prefixed with the flag emoji when present
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "NAME (JA)")]
    pub name_ja: String,

    #[tabled(rename = "CAPITAL")]
    pub capital: String,

    #[tabled(rename = "REGION")]
    pub region: String,

    #[tabled(rename = "POPULATION")]
    pub population: String,
}

impl From<&Country> for CountryDisplay {
    fn from(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            name: flagged_name(country),
            name_ja: or_dash(country.name_ja.as_deref()),
            capital: or_dash(country.capital.as_deref()),
            region: country.region.clone(),
            population: format_count(country.population),
        }
    }
}

impl From<Country> for CountryDisplay {
    fn from(country: Country) -> Self {
        Self::from(&country)
    }
}

/// Country listing: one table row per country, raw records in JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CountryList(pub Vec<Country>);

impl Formattable for CountryList {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => self
                .0
                .iter()
                .map(CountryDisplay::from)
                .collect::<Vec<_>>()
                .format(format),
            OutputFormat::Json => Ok(json::format_json(&self.0)?),
        }
    }
}

fn flagged_name(country: &Country) -> String {
    if country.flag_emoji.is_empty() {
        country.name.clone()
    } else {
        format!("{} {}", country.flag_emoji, country.name)
    }
}

fn format_currency(currency: &Currency) -> String {
    match &currency.symbol {
        Some(symbol) => format!("{} ({} {})", currency.code, symbol, currency.name),
        None => format!("{} ({})", currency.code, currency.name),
    }
}

fn format_currencies(country: &Country) -> String {
    let currencies: Vec<String> = country.currencies.iter().map(format_currency).collect();
    join_or_dash(&currencies)
}

fn format_coordinates(country: &Country) -> Option<String> {
    match (country.latitude, country.longitude) {
        (Some(lat), Some(lon)) => Some(format!("{:.2}, {:.2}", lat, lon)),
        _ => None,
    }
}

/// Single-country view, optionally joined with its safety report.
#[derive(Debug, Clone, Serialize)]
pub struct CountryDetail {
    #[serde(flatten)]
    pub country: Country,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetyInfo>,
}

impl CountryDetail {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            safety: None,
        }
    }

    pub fn with_safety(mut self, safety: Option<SafetyInfo>) -> Self {
        self.safety = safety;
        self
    }

    fn pretty(&self) -> String {
        let c = &self.country;
        let mut lines = Vec::new();

        let mut header = format!("{} [{}]", flagged_name(c), c.code);
        if let Some(ja) = &c.name_ja {
            header = format!("{} {}", header, ja);
        }
        lines.push(header);

        let region = match &c.subregion {
            Some(sub) => format!("{} / {}", c.region, sub),
            None => c.region.clone(),
        };
        lines.push(format!(
            "Capital: {} | Region: {} | Population: {}",
            or_dash(c.capital.as_deref()),
            region,
            format_count(c.population)
        ));
        lines.push(format!("Languages: {}", join_or_dash(&c.languages)));
        lines.push(format!("Currencies: {}", format_currencies(c)));
        if let Some(coords) = format_coordinates(c) {
            lines.push(format!("Coordinates: {}", coords));
        }

        if let Some(safety) = &self.safety {
            lines.push(String::new());
            lines.extend(safety_pretty_lines(safety));
        }

        lines.join("\n")
    }

    fn record(&self) -> String {
        let c = &self.country;
        let mut fields = vec![
            ("Code", c.code.clone()),
            ("Name", c.name.clone()),
            ("Name (JA)", or_dash(c.name_ja.as_deref())),
            ("Capital", or_dash(c.capital.as_deref())),
            ("Region", c.region.clone()),
            ("Subregion", or_dash(c.subregion.as_deref())),
            ("Population", format_count(c.population)),
            ("Languages", join_or_dash(&c.languages)),
            ("Currencies", format_currencies(c)),
            ("Flag", or_dash(Some(c.flag_url.as_str()))),
        ];
        if let Some(coords) = format_coordinates(c) {
            fields.push(("Coordinates", coords));
        }
        if let Some(safety) = &self.safety {
            fields.extend(safety_record_fields(safety));
        }
        table::format_record(&fields)
    }
}

impl Formattable for CountryDetail {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.pretty()),
            OutputFormat::Table => Ok(self.record()),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
