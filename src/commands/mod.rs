pub mod day;
pub mod month;
pub mod new;

use anyhow::Result;
use chrono::NaiveDate;
use tunecal_core::TuneCalError;

/// Parse YYYY-MM-DD into a date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TuneCalError::InvalidDate(s.to_string()))?;
    Ok(date)
}
