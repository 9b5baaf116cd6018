//! Columnar array backend for timegrid.
//!
//! This crate contains:
//! - Timestamp and integer column types with their builders
//! - Index concatenation and combination helpers
//! - The numeric type-promotion ladder
//! - Scalar-to-column building

pub mod array;
pub mod combine;
pub mod error;
pub mod promote;
pub mod scalar;

pub use array::{DataType, Int64Array, TimestampArray};
pub use combine::{combine_indexes, concat};
pub use error::ArrayError;
pub use promote::promote_types;
pub use scalar::{scalar_array, ArrayData, Scalar};
