use serde::{Deserialize, Serialize};

use crate::array::DataType;
use crate::error::ArrayError;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    Timestamp(i64),
    Utf8(String),
}

impl Scalar {
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Boolean(_) => DataType::Boolean,
            Self::Int64(_) => DataType::Int64,
            Self::Float64(_) => DataType::Float64,
            Self::Timestamp(_) => DataType::Timestamp,
            Self::Utf8(_) => DataType::Utf8,
        }
    }
}

/// A column built from uniform scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayData {
    Empty,
    Boolean(Vec<bool>),
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Timestamp(Vec<i64>),
    Utf8(Vec<String>),
}

impl ArrayData {
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Boolean(values) => values.len(),
            Self::Int64(values) => values.len(),
            Self::Float64(values) => values.len(),
            Self::Timestamp(values) => values.len(),
            Self::Utf8(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Empty => DataType::Null,
            Self::Boolean(_) => DataType::Boolean,
            Self::Int64(_) => DataType::Int64,
            Self::Float64(_) => DataType::Float64,
            Self::Timestamp(_) => DataType::Timestamp,
            Self::Utf8(_) => DataType::Utf8,
        }
    }
}

/// Builds a column from scalars of one type.
///
/// The first scalar fixes the column type; a scalar of any other type fails
/// with `MixedTypes`.
pub fn scalar_array(scalars: &[Scalar]) -> Result<ArrayData, ArrayError> {
    let Some(first) = scalars.first() else {
        return Ok(ArrayData::Empty);
    };
    let expected = first.data_type();

    for (index, scalar) in scalars.iter().enumerate() {
        if scalar.data_type() != expected {
            return Err(ArrayError::MixedTypes {
                index,
                found: scalar.data_type(),
                expected,
            });
        }
    }

    let data = match expected {
        DataType::Boolean => ArrayData::Boolean(
            scalars
                .iter()
                .filter_map(|s| match s {
                    Scalar::Boolean(v) => Some(*v),
                    _ => None,
                })
                .collect(),
        ),
        DataType::Int64 => ArrayData::Int64(
            scalars
                .iter()
                .filter_map(|s| match s {
                    Scalar::Int64(v) => Some(*v),
                    _ => None,
                })
                .collect(),
        ),
        DataType::Float64 => ArrayData::Float64(
            scalars
                .iter()
                .filter_map(|s| match s {
                    Scalar::Float64(v) => Some(*v),
                    _ => None,
                })
                .collect(),
        ),
        DataType::Timestamp => ArrayData::Timestamp(
            scalars
                .iter()
                .filter_map(|s| match s {
                    Scalar::Timestamp(v) => Some(*v),
                    _ => None,
                })
                .collect(),
        ),
        _ => ArrayData::Utf8(
            scalars
                .iter()
                .filter_map(|s| match s {
                    Scalar::Utf8(v) => Some(v.clone()),
                    _ => None,
                })
                .collect(),
        ),
    };
    Ok(data)
}
