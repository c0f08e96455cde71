//! Subcommands and shared argument parsers.

pub mod contact;
pub mod device;
pub mod event;
pub mod lock_mode;
pub mod map;
pub mod preset;
pub mod safezone;
pub mod todo;
pub mod user;

use chrono::{NaiveDate, NaiveTime, Weekday};
use gabb::WeekDays;

/// Parse a time of day as `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM"))
}

/// Parse a date as `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Parse active days as seven 0/1 flags (`1111100`) or day names (`mon,wed,fri`).
pub fn parse_week_days(s: &str) -> Result<WeekDays, String> {
    let s = s.trim();

    if s.len() == 7 && s.chars().all(|c| c == '0' || c == '1') {
        let flags: Vec<bool> = s.chars().map(|c| c == '1').collect();
        return WeekDays::from_slice(&flags).map_err(|e| e.to_string());
    }

    s.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .try_fold(WeekDays::default(), |days, name| {
            name.parse::<Weekday>()
                .map(|day| days.with(day, true))
                .map_err(|_| format!("invalid day '{name}'"))
        })
}
