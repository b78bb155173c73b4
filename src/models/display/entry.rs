//! Entry requirement display

use colored::Colorize;

use super::common::or_dash;
use crate::cli::OutputFormat;
use crate::client::models::EntryRequirement;
use crate::error::Result;
use crate::output::{Formattable, json, table};

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn visa_summary(entry: &EntryRequirement) -> String {
    if !entry.visa_required {
        match entry.visa_free_days {
            Some(days) => format!("Visa-free up to {} days", days),
            None => "No visa required".to_string(),
        }
    } else if entry.visa_on_arrival {
        "Visa on arrival".to_string()
    } else {
        "Visa required before travel".to_string()
    }
}

impl Formattable for EntryRequirement {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let summary = visa_summary(self);
                let summary = if self.visa_required && !self.visa_on_arrival {
                    summary.yellow().to_string()
                } else {
                    summary.green().to_string()
                };
                let mut lines = vec![format!("Entry to {}: {}", self.country_code, summary)];
                if let Some(months) = self.passport_validity_months {
                    lines.push(format!("Passport validity: {} months", months));
                }
                if let Some(notes) = &self.notes {
                    lines.push(format!("Notes: {}", notes));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => Ok(table::format_record(&[
                ("Country", self.country_code.clone()),
                ("Visa Required", yes_no(self.visa_required).to_string()),
                ("Visa On Arrival", yes_no(self.visa_on_arrival).to_string()),
                (
                    "Visa-Free Days",
                    or_dash(self.visa_free_days.map(|d| d.to_string()).as_deref()),
                ),
                (
                    "Passport Validity",
                    or_dash(
                        self.passport_validity_months
                            .map(|m| format!("{} months", m))
                            .as_deref(),
                    ),
                ),
                ("Notes", or_dash(self.notes.as_deref())),
            ])),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
