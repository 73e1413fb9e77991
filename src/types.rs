use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MAX_YEAR, MONTH_ABBREVIATIONS, MONTH_NAMES,
};
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU16, NonZeroU8};

/// A calendar year in `1..=9999`. Year zero is unrepresentable thanks to
/// the `NonZeroU16` backing, so a validated `Year` never needs re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// `ParseError::InvalidYear` for 0 or anything beyond `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(inner) if value <= MAX_YEAR => Ok(Self(inner)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
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

/// A month number in `1..=12`, `NonZeroU8` backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// `ParseError::InvalidMonth` for 0 or anything beyond `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(inner) if value <= MAX_MONTH => Ok(Self(inner)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Resolves a month name or three-letter abbreviation, case-insensitively,
    /// tolerating one trailing period ("Dec.", "december"). Whole-token match
    /// only: "Decimal" is not a month.
    pub fn from_name(token: &str) -> Option<Self> {
        let bare = token.strip_suffix('.').unwrap_or(token);
        if bare.is_empty() {
            return None;
        }
        let lowered = bare.to_ascii_lowercase();
        let position = MONTH_NAMES
            .iter()
            .zip(MONTH_ABBREVIATIONS)
            .position(|(name, abbreviation)| lowered == *name || lowered == abbreviation)?;
        let number = u8::try_from(position + 1).ok()?;
        Self::new(number).ok()
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
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

/// A day of the month, validated against the real length of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Validates `value` against the length of `month` in `year`, so a
    /// constructed `Day` is a real calendar day (Feb 29 only in leap years).
    ///
    /// # Errors
    /// `ParseError::InvalidDay` carrying the full (year, month, day) context.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let limit = days_in_month(year.get(), month.get());
        match NonZeroU8::new(value) {
            Some(inner) if value <= limit => Ok(Self(inner)),
            _ => Err(ParseError::InvalidDay {
                month: month.get(),
                day: value,
                year: year.get(),
            }),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    /// Context-free bound only (`1..=31`); month-aware validation needs
    /// [`Day::new`].
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match NonZeroU8::new(value) {
            Some(inner) if value <= MAX_DAY => Ok(Self(inner)),
            _ => Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// Proleptic Gregorian leap rule: every fourth year, except centuries,
/// except every fourth century.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` of `year`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
