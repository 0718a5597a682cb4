//! Human-readable date phrases.
//!
//! Converts phrases such as `yesterday`, `3 days ago`, `last monday`, or
//! `november 5` into absolute UTC timestamps relative to a reference time.
//! Ambiguous phrases resolve to their most recent past occurrence.
//!
//! Named days and calendar dates resolve to midnight UTC; relative offsets
//! (`2 hours ago`, `last week`) keep the reference time of day.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use notabene_notes::date::parse_date;
//!
//! // A Wednesday
//! let now = Utc.with_ymd_and_hms(2024, 3, 13, 15, 30, 0).unwrap();
//!
//! assert_eq!(
//!     parse_date("last monday", now).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap()
//! );
//! assert_eq!(
//!     parse_date("december 25", now).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap()
//! );
//! assert!(parse_date("the day after never", now).is_err());
//! ```

use chrono::{
    DateTime, Datelike, Days, Duration, Month, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc,
    Weekday,
};
use notabene_core::{Error, Result};

/// How far back a month/day phrase without a year may reach (Feb 29).
const MAX_YEARS_BACK: i32 = 8;

/// Parse a date phrase relative to `reference`.
///
/// Fails with [`Error::DateParse`] naming the phrase when it is not
/// understood.
pub fn parse_date(phrase: &str, reference: DateTime<Utc>) -> Result<DateTime<Utc>> {
    parse_phrase(phrase, reference).ok_or_else(|| Error::date_parse(phrase.trim()))
}

fn parse_phrase(phrase: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let trimmed = phrase.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }

    let normalized = trimmed.to_lowercase().replace(',', " ");
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let today = reference.date_naive();

    match words.as_slice() {
        ["now"] => Some(reference),
        ["today"] => Some(midnight(today)),
        ["yesterday"] => today.checked_sub_days(Days::new(1)).map(midnight),
        ["tomorrow"] => today.checked_add_days(Days::new(1)).map(midnight),
        [count, unit, "ago"] => shift_back(reference, parse_count(count)?, unit),
        ["last" | "past", name] => match name.parse::<Weekday>() {
            Ok(weekday) => Some(midnight(previous_weekday(today, weekday, true)?)),
            Err(_) => shift_back(reference, 1, name),
        },
        [date, time] => parse_date_time(date, time).or_else(|| parse_calendar(&words, today)),
        [word] => parse_single(word, today),
        _ => parse_calendar(&words, today),
    }
}

/// Single words: weekday, ISO date, or bare year.
fn parse_single(word: &str, today: NaiveDate) -> Option<DateTime<Utc>> {
    if let Ok(weekday) = word.parse::<Weekday>() {
        return previous_weekday(today, weekday, false).map(midnight);
    }
    if let Ok(date) = NaiveDate::parse_from_str(word, "%Y-%m-%d") {
        return Some(midnight(date));
    }
    if word.len() == 4 && word.bytes().all(|b| b.is_ascii_digit()) {
        let year = word.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1).map(midnight);
    }
    None
}

/// `YYYY-MM-DD HH:MM[:SS]`.
fn parse_date_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;
    Some(NaiveDateTime::new(date, time).and_utc())
}

/// `<month> <day> [year]` or `<day> <month> [year]`.
fn parse_calendar(words: &[&str], today: NaiveDate) -> Option<DateTime<Utc>> {
    let (month, day, year) = match words {
        [first, second] | [first, second, _] => match first.parse::<Month>() {
            Ok(month) => (month, parse_day(second)?, words.get(2)),
            Err(_) => (second.parse::<Month>().ok()?, parse_day(first)?, words.get(2)),
        },
        _ => return None,
    };
    let month = month.number_from_month();

    if let Some(year) = year {
        let year = year.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(midnight);
    }

    (0..=MAX_YEARS_BACK)
        .filter_map(|back| NaiveDate::from_ymd_opt(today.year() - back, month, day))
        .find(|date| *date <= today)
        .map(midnight)
}

/// Day of month, allowing ordinal suffixes (`1st`, `22nd`, `5th`).
fn parse_day(word: &str) -> Option<u32> {
    let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn parse_count(word: &str) -> Option<u32> {
    match word {
        "a" | "an" | "one" => Some(1),
        _ => word.parse().ok(),
    }
}

fn shift_back(reference: DateTime<Utc>, count: u32, unit: &str) -> Option<DateTime<Utc>> {
    let unit = unit.strip_suffix('s').unwrap_or(unit);
    match unit {
        "min" | "minute" => reference.checked_sub_signed(Duration::minutes(count.into())),
        "hour" => reference.checked_sub_signed(Duration::hours(count.into())),
        "day" => reference.checked_sub_days(Days::new(count.into())),
        "week" => reference.checked_sub_days(Days::new(u64::from(count) * 7)),
        "month" => reference.checked_sub_months(Months::new(count)),
        "year" => reference.checked_sub_months(Months::new(count.checked_mul(12)?)),
        _ => None,
    }
}

/// Most recent `weekday` on or before `today` (strictly before if `strict`).
fn previous_weekday(today: NaiveDate, weekday: Weekday, strict: bool) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let mut back = (current + 7 - target) % 7;
    if back == 0 && strict {
        back = 7;
    }
    today.checked_sub_days(Days::new(back.into()))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

// ============================================================================
// Tests
// ============================================================================
