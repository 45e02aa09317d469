use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU8, NonZeroU16};

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Earliest representable year
    pub const MIN: Self = Self(NonZeroU16::MIN);
    /// Latest representable year
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(year) => Self(year),
        None => panic!("MAX_YEAR is non-zero"),
    };

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(u32::from(value)));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(u32::from(value)))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` before `MIN_YEAR`
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get().checked_sub(1)?).ok()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = match NonZeroU8::new(DECEMBER) {
        Some(month) => Self(month),
        None => panic!("DECEMBER is non-zero"),
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(u32::from(value)));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(u32::from(value)))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index (January = 0), as used by month-name tables
    #[inline]
    pub const fn index0(self) -> usize {
        (self.get() - 1) as usize
    }

    /// Next month, wrapping December to January. The flag is set on wrap.
    pub fn succ_wrapping(self) -> (Self, bool) {
        if self.get() == DECEMBER {
            (Self::JANUARY, true)
        } else {
            (Self(self.0.saturating_add(1)), false)
        }
    }

    /// Previous month, wrapping January to December. The flag is set on wrap.
    pub fn pred_wrapping(self) -> (Self, bool) {
        match NonZeroU8::new(self.get() - 1) {
            Some(prev) => (Self(prev), false),
            None => (Self::DECEMBER, true),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day-of-month value. Only `Day::new` checks it against a concrete month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: u32::from(value),
        };
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    /// Context-free conversion: only rejects values no month can hold.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = || ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: u32::from(value),
        };
        if value > DAYS_IN_MONTH[JANUARY as usize] {
            return Err(invalid());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// Day of the week. `index()` is zero-based from Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday,
    #[display(fmt = "Mon")]
    Monday,
    #[display(fmt = "Tue")]
    Tuesday,
    #[display(fmt = "Wed")]
    Wednesday,
    #[display(fmt = "Thu")]
    Thursday,
    #[display(fmt = "Fri")]
    Friday,
    #[display(fmt = "Sat")]
    Saturday,
}

impl Weekday {
    const ALL: [Self; DAYS_IN_WEEK as usize] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Builds a weekday from any index, reduced modulo 7 (0 = Sunday)
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_IN_WEEK) as usize]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Grid column of this weekday in a week that starts on `first`.
    pub const fn column_from(self, first: Self) -> u8 {
        (self.index() + DAYS_IN_WEEK - first.index()) % DAYS_IN_WEEK
    }

    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday of a proleptic Gregorian date (Sakamoto's method).
/// Callers pass an already validated triple.
pub const fn day_of_week(year: u16, month: u8, day: u8) -> Weekday {
    const MONTH_OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = if month < 3 { year as u32 - 1 } else { year as u32 };
    let sum = y + y / 4 - y / 100 + y / 400 + MONTH_OFFSETS[(month - 1) as usize] + day as u32;
    Weekday::from_index((sum % DAYS_IN_WEEK as u32) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2023).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_succ_pred_stop_at_limits() {
        assert_eq!(year(2023).succ(), Some(year(2024)));
        assert_eq!(year(2023).pred(), Some(year(2022)));
        assert_eq!(year(9999).succ(), None);
        assert_eq!(Year::MIN.pred(), None);
    }

    #[test]
    fn test_year_serde() {
        let json = serde_json::to_string(&year(2024)).unwrap();
        assert_eq!(json, "2024");
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_wrapping() {
        assert_eq!(month(1).succ_wrapping(), (month(2), false));
        assert_eq!(month(12).succ_wrapping(), (month(1), true));
        assert_eq!(month(2).pred_wrapping(), (month(1), false));
        assert_eq!(month(1).pred_wrapping(), (month(12), true));
        assert_eq!(month(1).index0(), 0);
        assert_eq!(month(12).index0(), 11);
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, year(2024), month(1)).is_ok());
        assert!(Day::new(31, year(2024), month(1)).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, year(2023), month(2)).is_ok());
        assert!(Day::new(29, year(2023), month(2)).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, year(2024), month(2)).is_ok());
        assert!(Day::new(30, year(2024), month(2)).is_err());

        // April - 30 days
        assert!(Day::new(30, year(2024), month(4)).is_ok());
        assert!(Day::new(31, year(2024), month(4)).is_err());
    }

    #[test]
    fn test_day_new_invalid_reports_context() {
        let result = Day::new(32, year(2024), month(1));
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
        assert!(Day::new(0, year(2024), month(1)).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true, "divisible by 4"),
            (2024, true, "divisible by 4"),
            (2023, false, "not divisible by 4"),
            (1900, false, "century not divisible by 400"),
            (2100, false, "century not divisible by 400"),
            (2000, true, "divisible by 400"),
            (2400, true, "divisible by 400"),
        ];

        for (y, expected, description) in cases {
            assert_eq!(is_leap_year(y), expected, "Year {y} ({description})");
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for m in 1..=12 {
            assert_eq!(
                days_in_month(2023, m),
                expected[m as usize],
                "Month {m} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        assert_eq!(day_of_week(2023, 1, 1), Weekday::Sunday);
        assert_eq!(day_of_week(2023, 1, 15), Weekday::Sunday);
        assert_eq!(day_of_week(2023, 12, 31), Weekday::Sunday);
        assert_eq!(day_of_week(2024, 2, 29), Weekday::Thursday);
        assert_eq!(day_of_week(2000, 1, 1), Weekday::Saturday);
        assert_eq!(day_of_week(1970, 1, 1), Weekday::Thursday);
        assert_eq!(day_of_week(1, 1, 1), Weekday::Monday);
    }

    #[test]
    fn test_weekday_columns() {
        assert_eq!(Weekday::Sunday.column_from(Weekday::Sunday), 0);
        assert_eq!(Weekday::Sunday.column_from(Weekday::Monday), 6);
        assert_eq!(Weekday::Monday.column_from(Weekday::Monday), 0);
        assert_eq!(Weekday::Saturday.succ(), Weekday::Sunday);
        assert_eq!(Weekday::from_index(9), Weekday::Tuesday);
        assert_eq!(Weekday::Wednesday.to_string(), "Wed");
    }
}
