//! NBA season windows.
//!
//! A season is identified by the calendar year in which it starts. Season `Y`
//! covers the half-open range `[Y-10-01, (Y+1)-07-01)`, which takes in the
//! regular season, play-in and playoffs while leaving out the summer league.

use chrono::NaiveDate;
use std::fmt;

use crate::error::{Result, StatsError};

const START_MONTH: u32 = 10;
const END_MONTH: u32 = 7;

/// A season identified by its starting year (2024 for 2024-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    start_year: i32,
    window: SeasonWindow,
}

/// Half-open date range `[start, end)` covered by one season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Season {
    /// Build a season, rejecting years whose window is not a valid calendar range
    pub fn new(start_year: i32) -> Result<Self> {
        let window = SeasonWindow::for_start_year(start_year).ok_or_else(|| {
            StatsError::invalid(format!("season {start_year} is out of range"))
        })?;
        Ok(Self { start_year, window })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Date window covered by this season
    pub fn window(&self) -> SeasonWindow {
        self.window
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

impl SeasonWindow {
    fn for_start_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, START_MONTH, 1)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, END_MONTH, 1)?;
        Some(Self { start, end })
    }

    /// Whether `date` falls inside the window (start inclusive, end exclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
