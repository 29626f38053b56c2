// ABOUTME: Month-grid calendar math on chrono NaiveDate

use chrono::{Datelike, Local, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One displayed month, anchored on its first day.
/// The grid is Monday-first, matching the weekday headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
}

impl MonthGrid {
    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        Self { first }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Blank cells before day 1 in a Monday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_monday()
    }

    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.first.month() == 12 {
            (self.first.year() + 1, 1)
        } else {
            (self.first.year(), self.first.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .map(|next_first| next_first.pred_opt().map_or(31, |last| last.day()))
            .unwrap_or(31)
    }

    /// The date for a 1-based day number, None when the day is out of range.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    pub fn prev_month(&self) -> Self {
        let (year, month) = if self.first.month() == 1 {
            (self.first.year() - 1, 12)
        } else {
            (self.first.year(), self.first.month() - 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).map_or(*self, |first| Self { first })
    }

    pub fn next_month(&self) -> Self {
        let (year, month) = if self.first.month() == 12 {
            (self.first.year() + 1, 1)
        } else {
            (self.first.year(), self.first.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).map_or(*self, |first| Self { first })
    }

    /// Heading like "September 2026".
    pub fn title(&self) -> String {
        let name = MONTH_NAMES[(self.month() - 1) as usize];
        format!("{} {}", name, self.year())
    }
}

/// Past dates cannot be booked. Today itself stays enabled.
pub fn is_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
