use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A parsed frequency code: unit letters plus an optional leading multiplier.
///
/// The grammar is `[digits] unit-letters`, as in "3M", "QS", or "15T".
/// A missing digit run means a multiplier of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyCode {
    pub unit: String,
    pub multiplier: i64,
}

impl FrequencyCode {
    /// Splits a frequency string into its multiplier and unit parts.
    ///
    /// The unit is everything from the first alphabetic character onward and
    /// is not validated here; the offset and duration resolvers own the unit
    /// vocabularies.
    pub fn parse(code: &str) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidFrequency {
            code: code.to_owned(),
        };

        let split = code
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(code.len());
        let (digits, unit) = code.split_at(split);

        // Once the unit begins it is letters to the end; "M3" is malformed.
        if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let multiplier = if digits.is_empty() {
            1
        } else {
            if !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.parse::<i64>().map_err(|_| invalid())?
        };

        Ok(Self {
            unit: unit.to_owned(),
            multiplier,
        })
    }
}

impl FromStr for FrequencyCode {
    type Err = RangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for FrequencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.multiplier == 1 {
            f.write_str(&self.unit)
        } else {
            write!(f, "{}{}", self.multiplier, self.unit)
        }
    }
}
