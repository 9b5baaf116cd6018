use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ArrayError;

/// Column type identifiers. Declaration order is the promotion ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Null,
    Boolean,
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    UInt64,
    Int64,
    Float32,
    Float64,
    Timestamp,
    Utf8,
}

impl DataType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::UInt8 => "uint8",
            Self::Int8 => "int8",
            Self::UInt16 => "uint16",
            Self::Int16 => "int16",
            Self::UInt32 => "uint32",
            Self::Int32 => "int32",
            Self::UInt64 => "uint64",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Timestamp => "timestamp",
            Self::Utf8 => "utf8",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::UInt8
                | Self::Int8
                | Self::UInt16
                | Self::Int16
                | Self::UInt32
                | Self::Int32
                | Self::UInt64
                | Self::Int64
                | Self::Float32
                | Self::Float64
        )
    }

    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Timestamp)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Epoch-nanosecond timestamp column with an opaque timezone label.
///
/// Values are strictly increasing; the timezone is carried verbatim and never
/// interpreted (`None` means naive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampArray {
    values: Vec<i64>,
    timezone: Option<String>,
}

impl TimestampArray {
    /// Builds a timestamp column from ordered epoch nanoseconds.
    ///
    /// Empty input is accepted (the degenerate zero-period axis); unsorted or
    /// duplicate values are rejected.
    pub fn from_nanos(values: Vec<i64>, timezone: Option<String>) -> Result<Self, ArrayError> {
        for (index, pair) in values.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ArrayError::NotMonotonic { index: index + 1 });
            }
        }
        Ok(Self { values, timezone })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn data_type(&self) -> DataType {
        DataType::Timestamp
    }
}

/// Plain signed 64-bit integer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int64Array {
    values: Vec<i64>,
}

impl Int64Array {
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Builds the half-open sequence `[start, end)`.
    pub fn range(start: i64, end: i64) -> Result<Self, ArrayError> {
        if end < start {
            return Err(ArrayError::InvertedRange { start, end });
        }
        Ok(Self {
            values: (start..end).collect(),
        })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn data_type(&self) -> DataType {
        DataType::Int64
    }
}
