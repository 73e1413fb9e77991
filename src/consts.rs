/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest day number any month can reach
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator in the canonical rendering (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Characters accepted between fields in raw input, along with any whitespace
pub const FIELD_SEPARATORS: [char; 3] = ['-', '/', ','];

/// Marks the start of an embedded clock time ("2023-01-19T02:36:52")
pub(crate) const TIME_DESIGNATOR: char = 'T';

/// Century added to two-digit years: "20" always reads as 2020.
/// A fixed base, not a sliding pivot window.
pub const SHORT_YEAR_BASE: u16 = 2000;

/// Digits in a four-digit year field
pub(crate) const FULL_YEAR_WIDTH: usize = 4;
/// Digits in a two-digit year field
pub(crate) const SHORT_YEAR_WIDTH: usize = 2;
/// Digits a month or day occupies inside a packed digit run
pub(crate) const PAIRED_FIELD_WIDTH: usize = 2;

/// Full English month names, lowercase, January first
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Three-letter month abbreviations, lowercase, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
