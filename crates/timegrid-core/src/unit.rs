//! The canonical unit-letter vocabulary.
//!
//! Every consumer of frequency-code letters lives off this module: offset
//! parsing, sub-day duration resolution, and the grouping-unit mapper. The
//! tables sit side by side here so a new unit letter cannot land in one
//! consumer without the others seeing it.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::RangeError;
use crate::offset::OffsetKind;

/// Grouping granularity consumed by downstream calendar grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
}

impl CalendarUnit {
    pub const ALL: [Self; 10] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
    ];

    /// Maps a one-character unit code to its grouping granularity.
    pub fn from_code(code: char) -> Result<Self, RangeError> {
        match code {
            'n' => Ok(Self::Nanosecond),
            'u' => Ok(Self::Microsecond),
            'm' => Ok(Self::Millisecond),
            'S' => Ok(Self::Second),
            'T' => Ok(Self::Minute),
            'H' => Ok(Self::Hour),
            'D' => Ok(Self::Day),
            'W' => Ok(Self::Week),
            'M' => Ok(Self::Month),
            'Q' => Ok(Self::Quarter),
            other => Err(RangeError::UnsupportedFrequencyUnit {
                unit: other.to_string(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }
}

impl Display for CalendarUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar-offset letters. Case-sensitive, no whitespace.
pub(crate) fn offset_kind(unit: &str) -> Option<OffsetKind> {
    match unit {
        "D" => Some(OffsetKind::Day),
        "WS" => Some(OffsetKind::WeekStart),
        "W" => Some(OffsetKind::WeekEnd),
        "MS" => Some(OffsetKind::MonthStart),
        "M" => Some(OffsetKind::MonthEnd),
        "QS" => Some(OffsetKind::QuarterStart),
        "Q" => Some(OffsetKind::QuarterEnd),
        "YS" => Some(OffsetKind::YearStart),
        "Y" => Some(OffsetKind::YearEnd),
        _ => None,
    }
}

/// Sub-day letters, with the long spellings the grammar also accepts.
/// Disjoint from the calendar-offset letters above.
pub(crate) fn fixed_duration(unit: &str, multiplier: i64) -> Option<Duration> {
    match unit {
        "H" | "hrs" => Some(Duration::hours(multiplier)),
        "T" | "min" => Some(Duration::minutes(multiplier)),
        "S" => Some(Duration::seconds(multiplier)),
        "L" | "ms" => Some(Duration::milliseconds(multiplier)),
        "U" | "us" => Some(Duration::microseconds(multiplier)),
        "N" | "ns" => Some(Duration::nanoseconds(multiplier)),
        _ => None,
    }
}
