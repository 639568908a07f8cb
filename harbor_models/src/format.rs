//! Presentation helpers for job postings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::job::Salary;

pub const SALARY_NOT_SPECIFIED: &str = "Salary not specified";

/// Formats a salary for display.
///
/// Zero amounts and empty text count as "not specified", as do ranges with a
/// zero bound.
pub fn format_salary(salary: Option<&Salary>) -> String {
    match salary {
        Some(Salary::Text(text)) if !text.is_empty() => text.clone(),
        Some(&Salary::Amount(amount)) if amount != 0.0 => format_usd(amount),
        Some(Salary::Range(range)) if range.min != 0.0 && range.max != 0.0 => {
            format!("{} - {}", format_usd(range.min), format_usd(range.max))
        }
        _ => SALARY_NOT_SPECIFIED.into(),
    }
}

/// en-US dollar amount without fraction digits, e.g. `$120,000`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

/// Formats a timestamp relative to `now`.
///
/// Timestamps older than 30 days are shown as an absolute date
/// (`Mar 15, 2025`). Unparseable input yields an empty string.
pub fn format_date(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_timestamp(timestamp) else {
        return String::new();
    };

    let diff = now.signed_duration_since(date);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if days > 30 {
        date.format("%b %-d, %Y").to_string()
    } else if days > 1 {
        format!("{days} days ago")
    } else if days == 1 {
        "yesterday".into()
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".into()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Parses RFC 3339 timestamps, naive date-times and plain dates. Values
/// without an offset are interpreted as UTC.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date.and_utc());
    }

    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

/// Cuts `text` after `max_chars` characters and appends `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into(),
    }
}
