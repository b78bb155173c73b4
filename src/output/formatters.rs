//! Reusable formatting utilities for CLI output
//!
//! Formatting helpers for timestamps, ages, counts and other display values
//! used across multiple commands.

use chrono::{DateTime, Utc};

/// Format a UTC timestamp as local date/time.
///
/// # Example output
/// `2026-01-15 14:30`
pub fn format_timestamp_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Format the age of a timestamp relative to `now`.
///
/// Future timestamps are reported as "just now".
///
/// # Example output
/// - `2d 3h ago`
/// - `5h 10m ago`
/// - `12m ago`
/// - `just now`
pub fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let mins = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h ago", days, hours)
    } else if hours > 0 {
        format!("{}h {}m ago", hours, mins)
    } else {
        format!("{}m ago", mins)
    }
}

/// Format an integer with thousands separators.
///
/// # Example output
/// `125,836,021`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a TTL as whole hours (or minutes below one hour)
pub fn format_ttl(ttl: std::time::Duration) -> String {
    let secs = ttl.as_secs();
    if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}m", secs / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_format_timestamp_local_shape() {
        let result = format_timestamp_local(Utc::now());
        assert_eq!(result.len(), "2026-01-15 14:30".len());
    }

    #[test]
    fn test_format_age_days() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::hours(51), now), "2d 3h ago");
    }

    #[test]
    fn test_format_age_hours() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::minutes(310), now), "5h 10m ago");
    }

    #[test]
    fn test_format_age_minutes_and_now() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(format_age(now - Duration::seconds(5), now), "just now");
        assert_eq!(format_age(now + Duration::hours(1), now), "just now");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(125_836_021), "125,836,021");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_format_ttl() {
        assert_eq!(format_ttl(StdDuration::from_secs(6 * 3600)), "6h");
        assert_eq!(format_ttl(StdDuration::from_secs(90)), "1m");
        assert_eq!(format_ttl(StdDuration::ZERO), "0m");
    }
}
