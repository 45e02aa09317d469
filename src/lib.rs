mod calendar;
mod consts;
mod format;
mod input;
mod locale;
mod prelude;
mod status;
mod types;

pub use calendar::{DayCell, Days, MonthGrid, MonthView, build_month_grid};
pub use consts::*;
pub use format::{format, parse, year_complete};
pub use input::{DateInput, DateInputProps};
pub use locale::{
    DEFAULT_RULE, FieldKind, FieldOrder, FieldOrderError, LocaleFormatRule, LocaleUnrecognized,
    Padding, lookup, resolve,
};
pub use status::{ExportOutcome, LastExport, StatusInputs, StatusLine, resolve_status};
pub use types::{Day, Month, Weekday, Year, day_of_week, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

/// A calendar-valid Gregorian date with no time-of-day or timezone.
///
/// Every value satisfies `1 <= month <= 12` and `1 <= day <= days_in_month`,
/// leap years included. Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Why a piece of date text or a date triple was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,
    #[error("Expected {expected} date fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(u32),
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u32 },
}

impl CalendarDate {
    /// Creates a date from raw numbers, rejecting anything that is not calendar-valid.
    ///
    /// # Errors
    /// Returns the first failing component check (year, then month, then day).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from an already validated year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, ParseError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Today's date on the local wall clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(Local::now().date_naive())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        day_of_week(self.year(), self.month(), self.day())
    }

    /// The same date as a `chrono::NaiveDate`.
    pub fn to_naive_date(self) -> NaiveDate {
        // chrono covers a far wider year range than MIN_YEAR..=MAX_YEAR
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
        .unwrap_or(NaiveDate::MIN)
    }

    /// Local wall-clock midnight at the start of this date.
    pub fn and_local_midnight(self) -> NaiveDateTime {
        self.to_naive_date().and_time(NaiveTime::MIN)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidYear(date.year().unsigned_abs()))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidMonth(date.month()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidDay {
            year,
            month,
            day: date.day(),
        })?;
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.to_naive_date()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the ISO `YYYY-MM-DD` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_ordered(s, FieldOrder::YMD, &[ISO_SEPARATOR])
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
