use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, MAX_MONTH, MIN_DAY};
use crate::locale::LocaleFormatRule;
use crate::types::{Month, Weekday, Year, day_of_week, days_in_month};
use crate::{CalendarDate, ParseError};

/// The month currently shown by the calendar popover.
///
/// Navigation wraps the month across December/January and carries into the
/// year. At the edges of the representable range (`0001-01`, `9999-12`) it
/// stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthView {
    year: Year,
    month: Month,
}

impl MonthView {
    /// # Errors
    /// Returns `ParseError` if the year or month is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// The month a date falls in.
    pub const fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year_typed(),
            month: date.month_typed(),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self.month.succ_wrapping() {
            (month, false) => Self { month, ..self },
            (month, true) => self
                .year
                .succ()
                .map_or(self, |year| Self { year, month }),
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self.month.pred_wrapping() {
            (month, false) => Self { month, ..self },
            (month, true) => self
                .year
                .pred()
                .map_or(self, |year| Self { year, month }),
        }
    }

    /// Moves by `delta` months, clamped to the representable range.
    #[must_use]
    pub fn shift(self, delta: i32) -> Self {
        let months_per_year = i64::from(MAX_MONTH);
        let index =
            i64::from(self.year.get()) * months_per_year + i64::from(self.month.get() - 1);
        let target = index + i64::from(delta);

        let Some(year) = u16::try_from(target.div_euclid(months_per_year))
            .ok()
            .and_then(|year| Year::new(year).ok())
        else {
            return if target < index {
                Self::from_parts(Year::MIN, Month::JANUARY)
            } else {
                Self::from_parts(Year::MAX, Month::DECEMBER)
            };
        };
        // rem_euclid of 12 plus one always fits a month
        let month = u8::try_from(target.rem_euclid(months_per_year) + 1)
            .ok()
            .and_then(|month| Month::new(month).ok())
            .unwrap_or(Month::JANUARY);
        Self { year, month }
    }

    /// Builds the date for `day` of this month, regardless of any typed text.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month has no such day.
    pub fn select(&self, day: u8) -> Result<CalendarDate, ParseError> {
        CalendarDate::from_parts(self.year, self.month, day)
    }

    pub fn grid(&self, rule: &LocaleFormatRule) -> MonthGrid {
        build_month_grid(self.year, self.month, rule)
    }
}

/// One day of a month grid with the weekday it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    pub day: u8,
    pub weekday: Weekday,
}

impl DayCell {
    /// Column of this day in a grid whose weeks start on `first_weekday`.
    pub const fn column(&self, first_weekday: Weekday) -> u8 {
        self.weekday.column_from(first_weekday)
    }
}

/// A month laid out for display: a localized header and its days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub header: String,
    pub year: Year,
    pub month: Month,
    /// Weekday of the leftmost grid column
    pub first_weekday: Weekday,
}

impl MonthGrid {
    /// Every day of the month in order. Each call starts a fresh sequence.
    pub fn days(&self) -> Days {
        Days::new(self.year, self.month)
    }

    pub const fn len(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Empty cells before day 1 in the first week row.
    pub const fn leading_blanks(&self) -> u8 {
        day_of_week(self.year.get(), self.month.get(), MIN_DAY).column_from(self.first_weekday)
    }

    /// Week rows needed to show the whole month.
    pub const fn week_rows(&self) -> u8 {
        (self.leading_blanks() + self.len()).div_ceil(DAYS_IN_WEEK)
    }
}

/// Builds the grid for a month using the locale's names and week start.
pub fn build_month_grid(year: Year, month: Month, rule: &LocaleFormatRule) -> MonthGrid {
    MonthGrid {
        header: rule.header(year, month),
        year,
        month,
        first_weekday: rule.first_weekday,
    }
}

/// Lazy, finite sequence of the days of one month.
#[derive(Debug, Clone)]
pub struct Days {
    first_weekday: Weekday,
    front: u8,
    back: u8,
}

impl Days {
    fn new(year: Year, month: Month) -> Self {
        Self {
            first_weekday: day_of_week(year.get(), month.get(), MIN_DAY),
            front: MIN_DAY,
            back: days_in_month(year.get(), month.get()),
        }
    }

    const fn cell(&self, day: u8) -> DayCell {
        DayCell {
            day,
            weekday: Weekday::from_index(
                self.first_weekday.index() + (day - MIN_DAY) % DAYS_IN_WEEK,
            ),
        }
    }
}

impl Iterator for Days {
    type Item = DayCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let cell = self.cell(self.front);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from((self.back + 1).saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let cell = self.cell(self.back);
        self.back -= 1;
        Some(cell)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
