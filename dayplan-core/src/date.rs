//! Date parsing and formatting
//!
//! The form's date field accepts:
//! - ISO dates: "2026-01-25"
//! - Human dates: "Jan 25", "January 25 2026", "01/25/2026"
//! - Relative: "today", "tomorrow", "yesterday"
//! - Weekdays: "monday", "next friday"
//! - Offset: "in 3 days", "in 1 week"

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Weekday};

use crate::error::{CoreError, Result};

/// Parse a date string relative to the local current day
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_date_from(input, Local::now().date_naive())
}

/// Parse a date string, resolving relative forms against `today`
pub fn parse_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Err(CoreError::parse("Date is empty"));
    }

    if let Some(date) = try_parse_relative(&input, today) {
        return Ok(date);
    }

    if let Some(date) = try_parse_weekday(&input, today) {
        return Ok(date);
    }

    if let Some(date) = try_parse_offset(&input, today) {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return Ok(date);
    }

    // Formats carrying their own year
    for format in ["%b %d %Y", "%B %d %Y", "%m/%d/%Y", "%d %b %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&input, format) {
            return Ok(date);
        }
    }

    // Year-less formats resolve to the next occurrence
    for format in ["%b %d", "%B %d", "%m/%d"] {
        let with_year = format!("{} {}", input, today.year());
        let format_with_year = format!("{} %Y", format);
        if let Ok(mut date) = NaiveDate::parse_from_str(&with_year, &format_with_year) {
            if date < today {
                date = date
                    .with_year(today.year() + 1)
                    .ok_or_else(|| CoreError::parse("Invalid date"))?;
            }
            return Ok(date);
        }
    }

    Err(CoreError::parse(format!(
        "Could not parse date '{}'. Try formats like: 'tomorrow', 'Jan 25', '2026-01-25', 'next monday', 'in 3 days'",
        input
    )))
}

fn try_parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => None,
    }
}

fn try_parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let weekday_str = input.strip_prefix("next ").unwrap_or(input);

    let target = match weekday_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    // Always strictly after today, with or without "next"
    let days = (7 + target.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    let days = if days == 0 { 7 } else { days };

    today.checked_add_days(Days::new(u64::from(days)))
}

fn try_parse_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let rest = input.strip_prefix("in ")?.trim();
    let parts: Vec<&str> = rest.split_whitespace().collect();

    if parts.len() != 2 {
        return None;
    }

    let num: u64 = parts[0].parse().ok()?;

    match parts[1] {
        "day" | "days" => today.checked_add_days(Days::new(num)),
        "week" | "weeks" => today.checked_add_days(Days::new(num.checked_mul(7)?)),
        _ => None,
    }
}

/// "January 5, 2024"
pub fn format_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// "Jan 5, 2024 3:04 PM"
pub fn format_created<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date = at.date_naive();
    format!(
        "{} {}, {} {}",
        date.format("%b"),
        date.day(),
        date.year(),
        at.format("%-I:%M %p")
    )
}

/// ISO form used to prefill the date field
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
