//! Safety report display models

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::cli::OutputFormat;
use crate::client::models::{SafetyDetail, SafetyInfo, SafetyLevel};
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Safety detail row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SafetyDetailDisplay {
    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&SafetyDetail> for SafetyDetailDisplay {
    fn from(detail: &SafetyDetail) -> Self {
        Self {
            category: detail.category.clone(),
            severity: detail.severity.clone(),
            description: detail.description.clone(),
        }
    }
}

/// "Level N - label"
pub fn level_text(level: SafetyLevel) -> String {
    format!("Level {} - {}", level.value(), level.label())
}

/// Color a string by advisory level
pub fn colorize_level(text: &str, level: SafetyLevel) -> ColoredString {
    match level {
        SafetyLevel::Safe => text.green(),
        SafetyLevel::Caution => text.yellow(),
        SafetyLevel::Danger => text.red(),
        SafetyLevel::DoNotTravel => text.red().bold(),
        SafetyLevel::Evacuate => text.bright_red().bold(),
    }
}

/// Pretty lines for a safety report, shared with the country detail view.
pub(crate) fn safety_pretty_lines(info: &SafetyInfo) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Safety: {}",
            colorize_level(&level_text(info.level), info.level)
        ),
        format!("Summary: {}", info.summary),
    ];
    if let Some(updated) = &info.last_updated {
        lines.push(format!("Updated: {}", updated));
    }
    for detail in &info.details {
        lines.push(format!(
            "  • [{}] {} ({})",
            detail.category, detail.description, detail.severity
        ));
    }
    lines
}

/// Record fields for a safety report, shared with the country detail view.
pub(crate) fn safety_record_fields(info: &SafetyInfo) -> Vec<(&'static str, String)> {
    vec![
        ("Safety Level", level_text(info.level)),
        ("Safety Summary", info.summary.clone()),
        ("Safety Updated", or_dash(info.last_updated.as_deref())),
    ]
}

impl Formattable for SafetyInfo {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut lines = vec![format!("Safety report for {}", self.country_code)];
                lines.extend(safety_pretty_lines(self));
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let mut fields = vec![("Country", self.country_code.clone())];
                fields.extend(safety_record_fields(self));
                let mut out = table::format_record(&fields);
                if !self.details.is_empty() {
                    let rows: Vec<SafetyDetailDisplay> =
                        self.details.iter().map(SafetyDetailDisplay::from).collect();
                    out.push('\n');
                    out.push_str(&table::format_table(&rows));
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::SafetyInfoBuilder;

    fn report() -> SafetyInfo {
        SafetyInfoBuilder::new("TH")
            .level(SafetyLevel::Danger)
            .summary("Border areas unsafe")
            .detail("region", "Avoid southern provinces", "high")
            .build()
    }

    #[test]
    fn test_level_text() {
        assert_eq!(level_text(SafetyLevel::Safe), "Level 0 - Safe");
        assert_eq!(level_text(SafetyLevel::DoNotTravel), "Level 3 - Do not travel");
    }

    #[test]
    fn test_pretty_lists_details() {
        let out = report().format(OutputFormat::Pretty).unwrap();
        assert!(out.starts_with("Safety report for TH"));
        assert!(out.contains("Summary: Border areas unsafe"));
        assert!(out.contains("  • [region] Avoid southern provinces (high)"));
        assert!(!out.contains("Updated:"));
    }

    #[test]
    fn test_table_includes_detail_rows() {
        let out = report().format(OutputFormat::Table).unwrap();
        assert!(out.contains("Safety Level"));
        assert!(out.contains("Level 2 - Avoid non-essential travel"));
        assert!(out.contains("CATEGORY"));
        assert!(out.contains("Avoid southern provinces"));
    }

    #[test]
    fn test_table_without_details_has_no_detail_table() {
        let out = SafetyInfoBuilder::new("JP").build().format(OutputFormat::Table).unwrap();
        assert!(!out.contains("CATEGORY"));
    }

    #[test]
    fn test_json_level_is_numeric() {
        let out = report().format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["level"], 2);
        assert_eq!(value["data"]["country_code"], "TH");
    }
}
