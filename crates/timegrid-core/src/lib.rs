//! Calendar-offset and range-generation engine for timegrid.
//!
//! This crate contains:
//! - The frequency-code grammar (`[digits] unit-letters`) and its parser
//! - Calendar offsets with boundary-snapping step semantics
//! - Sub-day duration resolution for date-time ranges
//! - Stepping cursors and the range generator that materializes
//!   epoch-nanosecond timestamp axes

pub mod cursor;
pub mod duration;
pub mod error;
pub mod frequency;
pub mod offset;
pub mod range;
pub mod unit;

pub use cursor::{DayCursor, MonthCursor, TimeCursor, WeekCursor, YearCursor};
pub use duration::{resolve_duration, resolve_duration_code};
pub use error::{RangeError, RangeFault};
pub use frequency::FrequencyCode;
pub use offset::{DateOffset, OffsetKind};
pub use range::{
    date_range, date_range_periods, datetime_range, datetime_range_periods, generate, Bound,
    TimePoint,
};
pub use timegrid_arrays::{
    combine_indexes, promote_types, scalar_array, ArrayData, ArrayError, DataType, Int64Array,
    Scalar, TimestampArray,
};
pub use unit::CalendarUnit;
