//! Attraction display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{join_or_dash, or_dash, truncate_string};
use crate::cli::OutputFormat;
use crate::client::models::{Attraction, AttractionsInfo};
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Attraction row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AttractionDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "HIGHLIGHTS")]
    pub highlights: String,
}

impl From<&Attraction> for AttractionDisplay {
    fn from(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            category: attraction.category.clone(),
            description: truncate_string(&attraction.description, 60),
            highlights: join_or_dash(&attraction.highlights),
        }
    }
}

impl Formattable for AttractionsInfo {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut lines = vec![format!(
                    "{} [{}] | Best season: {}",
                    self.country_name,
                    self.country_code,
                    or_dash(self.best_season.as_deref())
                )];
                for attraction in &self.attractions {
                    lines.push(format!(
                        "  • {} ({}): {}",
                        attraction.name, attraction.category, attraction.description
                    ));
                }
                if !self.travel_tips.is_empty() {
                    lines.push("Tips:".to_string());
                    lines.extend(self.travel_tips.iter().map(|tip| format!("  - {}", tip)));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let rows: Vec<AttractionDisplay> =
                    self.attractions.iter().map(AttractionDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
