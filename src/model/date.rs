use std::fmt;

use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: u16 = 360;
pub const MONTHS_PER_YEAR: u16 = 12;
pub const DAYS_PER_MONTH: u16 = 30;

/// Simulation date: a historical year plus a day-of-year on the game's
/// 360-day calendar (12 months of 30 days).
///
/// Years are signed so pre-contact dates (and BC eras) order correctly.
/// Derived `Ord` is field-order lexicographic, which equals chronological
/// ordering because `year` comes first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "DateRepr", from = "DateRepr")]
pub struct SimDate {
    year: i32,
    day: u16,
}

#[derive(Serialize, Deserialize)]
struct DateRepr {
    year: i32,
    day: u16,
}

impl From<SimDate> for DateRepr {
    fn from(d: SimDate) -> Self {
        DateRepr {
            year: d.year,
            day: d.day,
        }
    }
}

impl From<DateRepr> for SimDate {
    fn from(repr: DateRepr) -> Self {
        SimDate::new(repr.year, repr.day)
    }
}

impl SimDate {
    /// Create a date from a year and day-of-year (1–360).
    pub fn new(year: i32, day: u16) -> Self {
        assert!(
            (1..=DAYS_PER_YEAR).contains(&day),
            "day out of range: {day}"
        );
        Self { year, day }
    }

    /// Start of a year (day 1, i.e. month 1, day 1).
    ///
    /// Record stamping uses this: the clock provider only supplies a year,
    /// so months and days collapse to the first of the first month.
    pub fn from_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn day(self) -> u16 {
        self.day
    }

    /// Month of year (1–12), derived from day.
    pub fn month(self) -> u16 {
        (self.day - 1) / DAYS_PER_MONTH + 1
    }

    /// Day within the month (1–30).
    pub fn day_of_month(self) -> u16 {
        (self.day - 1) % DAYS_PER_MONTH + 1
    }

    /// Same day-of-year, `years` later.
    pub fn plus_years(self, years: u32) -> Self {
        Self {
            year: self.year + years as i32,
            day: self.day,
        }
    }

    /// The following day, rolling over year boundaries.
    pub fn next_day(self) -> Self {
        if self.day == DAYS_PER_YEAR {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.day + 1)
        }
    }
}

impl Default for SimDate {
    fn default() -> Self {
        Self::from_year(0)
    }
}

impl fmt::Display for SimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}.D{}", self.year, self.day)
    }
}
