//! Month grid geometry.
//!
//! A month view is a 7-column grid with a Monday-first week: `pad` blank
//! leading cells, then one cell per day of the month. All coordinates are
//! zero-based (row = week index, col = weekday column).

use chrono::{Datelike, NaiveDate};

use crate::error::{TuneCalError, TuneCalResult};

/// Geometry of one displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: u32,
    pad: u32,
}

impl MonthGrid {
    /// Build the grid for `month` (1-12) of `year`.
    pub fn new(year: i32, month: u32) -> TuneCalResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(TuneCalError::InvalidMonth { year, month })?;

        Ok(MonthGrid {
            year,
            month,
            days: days_in_month(year, month),
            pad: first.weekday().num_days_from_monday(),
        })
    }

    /// Grid for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // Always valid: the components come from an existing date.
        Self::new(date.year(), date.month()).unwrap()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month (28-31).
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Blank leading cells before day 1 (0 = month starts on Monday).
    pub fn pad(&self) -> u32 {
        self.pad
    }

    /// Total grid cells including leading blanks.
    pub fn total_cells(&self) -> u32 {
        self.pad + self.days
    }

    /// Number of week rows needed to show the month.
    pub fn rows(&self) -> u32 {
        self.total_cells().div_ceil(7)
    }

    /// Grid cell of a day of this month (`day` is 1-based).
    pub fn cell_of_day(&self, day: u32) -> (u32, u32) {
        let position = self.pad + day - 1;
        (position / 7, position % 7)
    }

    /// Date shown in a cell, or `None` for leading/trailing blanks.
    pub fn date_of_cell(&self, row: u32, col: u32) -> Option<NaiveDate> {
        let position = row * 7 + col;
        let day = (position + 1).checked_sub(self.pad)?;
        if day == 0 || day > self.days {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Whether `date` falls inside the displayed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Last day of the displayed month.
    pub fn last_date(&self) -> NaiveDate {
        // Valid by construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.days).unwrap()
    }
}

/// Days in `month` of `year`, leap-aware.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    // Day before the 1st of the next month; valid for any real month.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}
