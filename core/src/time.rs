use chrono::{Datelike, Duration, NaiveDate, TimeDelta, Weekday};
use anyhow::{anyhow, Result};

/// Every date from `start` to `end`, both included. Empty when `end < start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let len = if end < start { 0 } else { (end - start).num_days() + 1 };
    (0..len).map(move |offset| start + Duration::days(offset))
}

/// Calendar-month membership, not a rolling window.
pub fn is_in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// First and last day of the month. `None` for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month - Duration::days(1)))
}

pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    match month_bounds(year, month) {
        Some((first, last)) => days_in_range(first, last).collect(),
        None => Vec::new(),
    }
}

/// Parses "YYYY-MM" into (year, month).
pub fn parse_period(input: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", input))?;
    let year: i32 = year_str.parse().map_err(|_| anyhow!("Invalid year: {}", year_str))?;
    let month: u32 = month_str.parse().map_err(|_| anyhow!("Invalid month: {}", month_str))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be 1-12, got {}", month));
    }
    Ok((year, month))
}

/// Accepts `today`, `yesterday`, `tomorrow`, `+3d`/`-2w`, a weekday name
/// (the next one after `today`), or `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    let out_of_range = || anyhow!("Date out of range: {}", input);
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return today.pred_opt().ok_or_else(out_of_range),
        "tomorrow" | "tom" => return today.succ_opt().ok_or_else(out_of_range),
        _ => {}
    }

    if input.starts_with('+') || input.starts_with('-') {
        let offset = parse_offset(input)?;
        return today.checked_add_signed(offset).ok_or_else(out_of_range);
    }

    if let Ok(weekday) = parse_weekday_str(input) {
        let mut days_needed = weekday.num_days_from_sunday() as i64
            - today.weekday().num_days_from_sunday() as i64;
        if days_needed <= 0 {
            days_needed += 7;
        }
        return today
            .checked_add_signed(TimeDelta::days(days_needed))
            .ok_or_else(out_of_range);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

// "+3d", "-2w"
fn parse_offset(input: &str) -> Result<TimeDelta> {
    let invalid = || anyhow!("Invalid relative date: {}", input);
    let (sign, rest) = input.split_at(1);
    let (unit_at, unit) = rest.char_indices().last().ok_or_else(invalid)?;
    let count: i64 = rest[..unit_at].parse().map_err(|_| invalid())?;
    let count = if sign == "-" { -count } else { count };
    match unit {
        'd' => TimeDelta::try_days(count).ok_or_else(invalid),
        'w' => TimeDelta::try_weeks(count).ok_or_else(invalid),
        _ => Err(anyhow!("Unknown unit in relative date: {}", unit)),
    }
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_in_range() {
        let days: Vec<_> = days_in_range(d(2025, 3, 10), d(2025, 3, 12)).collect();
        assert_eq!(days, vec![d(2025, 3, 10), d(2025, 3, 11), d(2025, 3, 12)]);
        assert_eq!(days_in_range(d(2025, 3, 10), d(2025, 3, 10)).count(), 1);
        assert_eq!(days_in_range(d(2025, 3, 12), d(2025, 3, 10)).count(), 0);
        // across a month boundary
        let days: Vec<_> = days_in_range(d(2025, 2, 27), d(2025, 3, 1)).collect();
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(month_bounds(2025, 12), Some((d(2025, 12, 1), d(2025, 12, 31))));
        assert_eq!(month_bounds(2025, 13), None);
        assert_eq!(month_days(2025, 4).len(), 30);
        assert!(month_days(2025, 0).is_empty());
    }

    #[test]
    fn test_is_in_month() {
        assert!(is_in_month(d(2025, 3, 31), 2025, 3));
        assert!(!is_in_month(d(2025, 4, 1), 2025, 3));
        assert!(!is_in_month(d(2024, 3, 15), 2025, 3));
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("2025-03").unwrap(), (2025, 3));
        assert!(parse_period("2025-13").is_err());
        assert!(parse_period("march").is_err());
    }

    #[test]
    fn test_parse_human_date() {
        // 2025-03-12 is a Wednesday
        let today = d(2025, 3, 12);
        assert_eq!(parse_human_date("today", today).unwrap(), today);
        assert_eq!(parse_human_date("yesterday", today).unwrap(), d(2025, 3, 11));
        assert_eq!(parse_human_date("tom", today).unwrap(), d(2025, 3, 13));
        assert_eq!(parse_human_date("+3d", today).unwrap(), d(2025, 3, 15));
        assert_eq!(parse_human_date("-1w", today).unwrap(), d(2025, 3, 5));
        assert_eq!(parse_human_date("fri", today).unwrap(), d(2025, 3, 14));
        assert_eq!(parse_human_date("wed", today).unwrap(), d(2025, 3, 19));
        assert_eq!(parse_human_date("2025-01-05", today).unwrap(), d(2025, 1, 5));
        assert!(parse_human_date("someday", today).is_err());
        assert!(parse_human_date("+d", today).is_err());
    }

    #[test]
    fn test_bad_relative_dates_are_errors() {
        let today = d(2025, 3, 12);
        assert!(parse_human_date("+3日", today).is_err());
        assert!(parse_human_date("-日", today).is_err());
        assert!(parse_human_date("+99999999999d", today).is_err());
        assert!(parse_human_date("-99999999999w", today).is_err());
        assert!(parse_human_date("+9223372036854775807w", today).is_err());
        assert!(parse_human_date("tomorrow", NaiveDate::MAX).is_err());
        assert!(parse_human_date("yesterday", NaiveDate::MIN).is_err());
    }
}
