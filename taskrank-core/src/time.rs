//! Time utilities: due-date parsing and timezone-aware "today".

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date like "2026-02-20".
pub fn parse_due_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DUE_DATE_FORMAT)
        .map_err(|e| anyhow::anyhow!("invalid due date '{s}': {e}"))
}

/// The calendar date at `now` in an IANA tz like "America/Chicago".
pub fn today_in(tz: &str, now: DateTime<Utc>) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Whole days from `today` to `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Short human label for a due date relative to today.
pub fn relative_label(due: NaiveDate, today: NaiveDate) -> String {
    match days_until(due, today) {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("in {d} days"),
    }
}
