//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::{
    Attraction, AttractionsInfo, Country, Currency, EntryRequirement, SafetyDetail, SafetyInfo,
    SafetyLevel,
};

// ============================================================================
// CountryBuilder
// ============================================================================

/// Builder for creating test Country instances.
///
/// # Example
/// ```ignore
/// let japan = CountryBuilder::new("JP")
///     .name("Japan")
///     .region("Asia")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CountryBuilder {
    code: String,
    name: String,
    name_ja: Option<String>,
    capital: Option<String>,
    region: String,
    population: u64,
    languages: Vec<String>,
    currencies: Vec<Currency>,
}

impl CountryBuilder {
    /// Create a new builder with the given ISO code.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: format!("Country {}", &code),
            code,
            name_ja: None,
            capital: None,
            region: "Asia".to_string(),
            population: 1_000_000,
            languages: Vec::new(),
            currencies: Vec::new(),
        }
    }

    /// Set the English name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the Japanese name.
    pub fn name_ja(mut self, name_ja: impl Into<String>) -> Self {
        self.name_ja = Some(name_ja.into());
        self
    }

    /// Set the capital city.
    pub fn capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the population.
    pub fn population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Add a spoken language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Add a currency.
    pub fn currency(mut self, code: &str, name: &str, symbol: Option<&str>) -> Self {
        self.currencies.push(Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.map(String::from),
        });
        self
    }

    /// Build the Country.
    pub fn build(self) -> Country {
        Country {
            flag_url: format!("https://flagcdn.com/{}.svg", self.code.to_lowercase()),
            code: self.code,
            name: self.name,
            name_ja: self.name_ja,
            capital: self.capital,
            region: self.region,
            subregion: None,
            population: self.population,
            languages: self.languages,
            currencies: self.currencies,
            flag_emoji: String::new(),
            latitude: None,
            longitude: None,
        }
    }
}

// ============================================================================
// SafetyInfoBuilder
// ============================================================================

/// Builder for creating test SafetyInfo instances.
#[derive(Debug, Clone)]
pub struct SafetyInfoBuilder {
    country_code: String,
    level: SafetyLevel,
    summary: String,
    details: Vec<SafetyDetail>,
}

impl SafetyInfoBuilder {
    /// Create a new builder for the given country code.
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            level: SafetyLevel::Safe,
            summary: "No advisory in effect".to_string(),
            details: Vec::new(),
        }
    }

    /// Set the advisory level.
    pub fn level(mut self, level: SafetyLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the summary text.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Add a detail line.
    pub fn detail(mut self, category: &str, description: &str, severity: &str) -> Self {
        self.details.push(SafetyDetail {
            category: category.to_string(),
            description: description.to_string(),
            severity: severity.to_string(),
        });
        self
    }

    /// Build the SafetyInfo.
    pub fn build(self) -> SafetyInfo {
        SafetyInfo {
            country_code: self.country_code,
            level: self.level,
            summary: self.summary,
            details: self.details,
            last_updated: None,
        }
    }
}

// ============================================================================
// Simple constructors
// ============================================================================

/// Attractions payload with a single sight.
pub fn attractions(country_code: &str, sight: &str) -> AttractionsInfo {
    AttractionsInfo {
        country_code: country_code.to_string(),
        country_name: format!("Country {}", country_code),
        attractions: vec![Attraction {
            name: sight.to_string(),
            description: format!("{} description", sight),
            category: "landmark".to_string(),
            highlights: Vec::new(),
        }],
        best_season: None,
        travel_tips: Vec::new(),
    }
}

/// Visa-free entry requirement.
pub fn visa_free_entry(country_code: &str, days: u32) -> EntryRequirement {
    EntryRequirement {
        country_code: country_code.to_string(),
        visa_required: false,
        visa_on_arrival: false,
        visa_free_days: Some(days),
        passport_validity_months: None,
        notes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_builder_defaults() {
        let country = CountryBuilder::new("JP").build();
        assert_eq!(country.code, "JP");
        assert_eq!(country.name, "Country JP");
        assert_eq!(country.region, "Asia");
        assert_eq!(country.flag_url, "https://flagcdn.com/jp.svg");
    }

    #[test]
    fn test_country_builder_custom() {
        let country = CountryBuilder::new("FR")
            .name("France")
            .capital("Paris")
            .region("Europe")
            .language("French")
            .currency("EUR", "Euro", Some("€"))
            .build();

        assert_eq!(country.capital.as_deref(), Some("Paris"));
        assert_eq!(country.languages, vec!["French"]);
        assert_eq!(country.currencies[0].symbol.as_deref(), Some("€"));
    }

    #[test]
    fn test_safety_info_builder() {
        let info = SafetyInfoBuilder::new("UA")
            .level(SafetyLevel::Evacuate)
            .detail("conflict", "Active hostilities", "high")
            .build();

        assert_eq!(info.level, SafetyLevel::Evacuate);
        assert_eq!(info.details.len(), 1);
    }
}
