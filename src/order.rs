use std::str::FromStr;

use crate::consts::{FULL_YEAR_WIDTH, PAIRED_FIELD_WIDTH, SHORT_YEAR_WIDTH};
use crate::prelude::*;

/// Which date component one position of a field order holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Year { short: bool },
    Month,
    Day,
}

impl Field {
    /// Digits this field occupies inside a packed digit run.
    /// Years are fixed-width; months and days take two digits when packed.
    pub(crate) const fn width(self) -> usize {
        match self {
            Self::Year { short: false } => FULL_YEAR_WIDTH,
            Self::Year { short: true } => SHORT_YEAR_WIDTH,
            Self::Month | Self::Day => PAIRED_FIELD_WIDTH,
        }
    }
}

/// Positional field layout of a raw date, as declared by the import
/// configuration. The literal forms accepted by `FromStr` and emitted by
/// `Display` name the fields left to right: "dd mm yy" reads day, month,
/// two-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldOrder {
    /// `yyyy mm dd`
    #[display(fmt = "yyyy mm dd")]
    YearMonthDay,
    /// `yy mm dd`
    #[display(fmt = "yy mm dd")]
    ShortYearMonthDay,
    /// `mm dd yyyy`
    #[display(fmt = "mm dd yyyy")]
    MonthDayYear,
    /// `mm dd yy`
    #[display(fmt = "mm dd yy")]
    MonthDayShortYear,
    /// `dd mm yyyy`
    #[display(fmt = "dd mm yyyy")]
    DayMonthYear,
    /// `dd mm yy`
    #[display(fmt = "dd mm yy")]
    DayMonthShortYear,
}

impl FieldOrder {
    /// All six supported orders, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::YearMonthDay,
        Self::ShortYearMonthDay,
        Self::MonthDayYear,
        Self::MonthDayShortYear,
        Self::DayMonthYear,
        Self::DayMonthShortYear,
    ];

    /// The three fields of this order, left to right.
    pub(crate) const fn fields(self) -> [Field; 3] {
        match self {
            Self::YearMonthDay => [Field::Year { short: false }, Field::Month, Field::Day],
            Self::ShortYearMonthDay => [Field::Year { short: true }, Field::Month, Field::Day],
            Self::MonthDayYear => [Field::Month, Field::Day, Field::Year { short: false }],
            Self::MonthDayShortYear => [Field::Month, Field::Day, Field::Year { short: true }],
            Self::DayMonthYear => [Field::Day, Field::Month, Field::Year { short: false }],
            Self::DayMonthShortYear => [Field::Day, Field::Month, Field::Year { short: true }],
        }
    }

    /// Total digits of the fully packed rendering: 8 with a four-digit year
    /// ("20201224"), 6 with a two-digit year ("201224").
    pub const fn compact_width(self) -> usize {
        let fields = self.fields();
        fields[0].width() + fields[1].width() + fields[2].width()
    }
}

/// Error type for field-order configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// The literal does not name one of the supported orders.
    #[error("Unknown field order: {0:?}")]
    Unknown(String),
}

impl FromStr for FieldOrder {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yyyy mm dd" => Ok(Self::YearMonthDay),
            "yy mm dd" => Ok(Self::ShortYearMonthDay),
            "mm dd yyyy" => Ok(Self::MonthDayYear),
            "mm dd yy" => Ok(Self::MonthDayShortYear),
            "dd mm yyyy" => Ok(Self::DayMonthYear),
            "dd mm yy" => Ok(Self::DayMonthShortYear),
            other => Err(OrderError::Unknown(other.to_owned())),
        }
    }
}

impl serde::Serialize for FieldOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FieldOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
