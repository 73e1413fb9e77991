mod consts;
mod order;
mod prelude;
mod tokenize;
mod types;

pub use consts::*;
pub use order::{FieldOrder, OrderError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::order::Field;
use crate::prelude::*;
use crate::tokenize::Token;
use std::str::FromStr;

/// A fully resolved calendar date produced by the import normalizer.
/// Renders as zero-padded `YYYY-MM-DD`, the canonical form imported
/// records are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct ImportDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unrecognized month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl ImportDate {
    /// Assembles a date from already validated components.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from primitive components, applying calendar validation.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first invalid component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::new(year, month, day))
    }

    /// Parses a raw date string laid out in the given field order.
    ///
    /// Fields may be separated by `-`, `/`, `,`, or whitespace, packed into
    /// one digit run ("24122020", "2412 20"), or name the month ("Dec",
    /// "december."). Two-digit years are always 2000-based, and an embedded
    /// clock time ("2023-01-19T02:36:52") is ignored.
    ///
    /// # Errors
    /// Returns `ParseError` when the input does not resolve to a real
    /// calendar date under `order`.
    pub fn parse(input: &str, order: FieldOrder) -> Result<Self, ParseError> {
        let tokens = tokenize::scan(input)?;
        let (year, month, day) = map_tokens(input, &tokens, order)?;
        Self::from_ymd(year, month, day)
    }

    /// Returns the year component as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Splits into primitive components: (year, month, day)
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

/// Normalizes one raw date cell into the canonical `YYYY-MM-DD` string.
///
/// Anything that does not resolve to a real calendar date under `order` is
/// `None`: garbage text, wrong field widths, impossible dates, empty input.
/// Callers that need the failure reason use [`ImportDate::parse`] instead.
pub fn parse_date(input: &str, order: FieldOrder) -> Option<String> {
    ImportDate::parse(input, order)
        .ok()
        .map(|date| date.to_string())
}

/// [`parse_date`] for dynamically typed cells, as found in JSON import rows.
/// Only strings are eligible: nulls, numbers, booleans, arrays, and objects
/// all normalize to `None`.
pub fn parse_date_value(value: &serde_json::Value, order: FieldOrder) -> Option<String> {
    value.as_str().and_then(|text| parse_date(text, order))
}

// --- helpers for field mapping ---

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Intended integer components as assigned by the field mapper, before
/// calendar validation.
#[derive(Debug, Default, Clone, Copy)]
struct RawComponents {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
}

impl RawComponents {
    fn set(&mut self, field: Field, digits: &str) -> Result<(), ParseError> {
        match field {
            Field::Year { short: true } => {
                self.year = Some(SHORT_YEAR_BASE + u16::from(parse_u8(digits)?));
            }
            Field::Year { short: false } => self.year = Some(parse_u16(digits)?),
            Field::Month => self.month = Some(parse_u8(digits)?),
            Field::Day => self.day = Some(parse_u8(digits)?),
        }
        Ok(())
    }
}

/// Assigns scanned tokens to the order's fields, left to right. A digit run
/// satisfies one field when its length fits that field alone; otherwise it
/// must cover the next 2-3 fields exactly at their declared widths
/// ("2412 20" under `dd mm yy` covers day+month, then year). The walk is
/// deterministic and never backtracks.
fn map_tokens(
    input: &str,
    tokens: &[Token<'_>],
    order: FieldOrder,
) -> Result<(u16, u8, u8), ParseError> {
    let fields = order.fields();
    let mut components = RawComponents::default();
    let mut next = 0;

    for token in tokens {
        let remaining = &fields[next..];
        if remaining.is_empty() {
            // All three fields already filled, nothing may follow
            return Err(ParseError::InvalidFormat(input.trim().to_owned()));
        }
        match *token {
            Token::Name(month, _) => {
                if remaining[0] != Field::Month {
                    return Err(ParseError::InvalidFormat(input.trim().to_owned()));
                }
                components.month = Some(month.get());
                next += 1;
            }
            Token::Digits(digits) => {
                let span = covered_span(digits.len(), remaining)
                    .ok_or_else(|| ParseError::InvalidFormat(digits.to_owned()))?;
                let mut rest = digits;
                for field in &remaining[..span] {
                    let width = if span == 1 { rest.len() } else { field.width() };
                    let (chunk, tail) = rest.split_at(width);
                    components.set(*field, chunk)?;
                    rest = tail;
                }
                next += span;
            }
        }
    }

    match (components.year, components.month, components.day) {
        (Some(year), Some(month), Some(day)) => Ok((year, month, day)),
        _ => Err(ParseError::InvalidFormat(input.trim().to_owned())),
    }
}

/// Number of consecutive fields a digit run of `len` digits covers: one when
/// it fits the first field alone, otherwise however many concatenated
/// declared widths add up to `len` exactly.
fn covered_span(len: usize, remaining: &[Field]) -> Option<usize> {
    let first = *remaining.first()?;
    if fits_alone(len, first) {
        return Some(1);
    }
    let mut total = 0;
    for (index, field) in remaining.iter().enumerate() {
        total += field.width();
        if total == len {
            return Some(index + 1);
        }
    }
    None
}

/// Whether a lone digit run of `len` digits can fill `field`: years are
/// fixed-width, while a lone month or day may drop its leading zero.
fn fits_alone(len: usize, field: Field) -> bool {
    match field {
        Field::Year { .. } => len == field.width(),
        Field::Month | Field::Day => (1..=PAIRED_FIELD_WIDTH).contains(&len),
    }
}

impl FromStr for ImportDate {
    type Err = ParseError;

    /// Parses year-first input, so the canonical rendering always
    /// round-trips.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, FieldOrder::YearMonthDay)
    }
}

impl TryFrom<(u16, u8, u8)> for ImportDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl serde::Serialize for ImportDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ImportDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
