//! Calendar day ranges

use chrono::{Days, NaiveDate};

use crate::error::{Error, Result};

/// Days from `start` up to, but not including, `end`.
///
/// Empty when `end` is not after `start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let count = (end - start).num_days().max(0) as u64;
    (0..count).filter_map(move |n| start.checked_add_days(Days::new(n)))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", text, e)))
}
