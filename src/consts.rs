/// Smallest representable year
pub const MIN_YEAR: u16 = 1;
/// Largest representable year (inclusive), keeps years at most four digits wide
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Columns in a month grid
pub const DAYS_IN_WEEK: u8 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// ISO 8601 date component separator, used by `CalendarDate`'s own text form
pub const ISO_SEPARATOR: char = '-';
/// Separator of the fallback locale rule
pub const DEFAULT_SEPARATOR: char = '/';
/// Separators accepted while parsing typed text, in addition to the locale's own
pub const ALTERNATE_SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Number of numeric fields in a short date
pub const FIELD_COUNT: usize = 3;

/// Width of a typed year before the input commits it while typing
pub const YEAR_DIGITS: usize = 4;
