use std::fmt::{Display, Formatter};

use thiserror::Error;
use timegrid_arrays::ArrayError;

use crate::offset::OffsetKind;

/// Errors surfaced by the frequency grammar and range generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid frequency code '{code}'")]
    InvalidFrequency { code: String },

    #[error("frequency unit '{unit}' is not valid on this path")]
    UnsupportedFrequencyUnit { unit: String },

    #[error("offset '{kind}' cannot be iterated forward from a start date; group a daily range instead")]
    UnsupportedIteration { kind: OffsetKind },

    #[error("invalid range: {fault}")]
    InvalidRange { fault: RangeFault },

    #[error(transparent)]
    Array(#[from] ArrayError),
}

/// What exactly made a range request invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFault {
    StartNotBeforeEnd,
    NegativePeriods,
    NonPositivePeriods,
    QuarterUnaligned,
    MixedBounds,
    DateOutOfRange,
}

impl RangeFault {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartNotBeforeEnd => "start must be strictly before end",
            Self::NegativePeriods => "periods must be non-negative",
            Self::NonPositivePeriods => "periods must be positive for date-time ranges",
            Self::QuarterUnaligned => "start month must begin a quarter (1, 4, 7, 10)",
            Self::MixedBounds => "start and end must both be dates or both be date-times",
            Self::DateOutOfRange => "date arithmetic left the representable calendar range",
        }
    }
}

impl Display for RangeFault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
