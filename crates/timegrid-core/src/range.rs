//! Range generation: validation, cursor dispatch, and materialization.
//!
//! Calendar-date ranges step through the [`crate::cursor`] family selected
//! by the offset kind; date-time ranges always resolve a fixed sub-day
//! duration. Every output is normalized to epoch nanoseconds before it is
//! handed to the array backend.

use time::{Date, Duration, PrimitiveDateTime};
use timegrid_arrays::TimestampArray;

use crate::cursor::{DayCursor, MonthCursor, TimeCursor, WeekCursor, YearCursor};
use crate::duration::resolve_duration_code;
use crate::error::{RangeError, RangeFault};
use crate::offset::{DateOffset, OffsetKind};

/// A range start or end point: whole calendar date or full date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePoint {
    Date(Date),
    DateTime(PrimitiveDateTime),
}

/// How a range terminates: at an end point, or after a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Until(TimePoint),
    Periods(i64),
}

/// Generates a timestamp axis from a frequency code, dispatching on the
/// start point's representation.
///
/// A [`TimePoint::Date`] start resolves the code as a calendar offset; a
/// [`TimePoint::DateTime`] start resolves it as a fixed sub-day duration.
/// An end bound must use the same representation as the start.
pub fn generate(
    start: TimePoint,
    bound: Bound,
    freq: &str,
    timezone: Option<&str>,
) -> Result<TimestampArray, RangeError> {
    match (start, bound) {
        (TimePoint::Date(start), Bound::Until(TimePoint::Date(end))) => {
            date_range(start, end, freq.parse()?, timezone)
        }
        (TimePoint::Date(start), Bound::Periods(periods)) => {
            date_range_periods(start, periods, freq.parse()?, timezone)
        }
        (TimePoint::DateTime(start), Bound::Until(TimePoint::DateTime(end))) => {
            datetime_range(start, end, resolve_duration_code(freq)?, timezone)
        }
        (TimePoint::DateTime(start), Bound::Periods(periods)) => {
            datetime_range_periods(start, periods, resolve_duration_code(freq)?, timezone)
        }
        (TimePoint::Date(_), Bound::Until(TimePoint::DateTime(_)))
        | (TimePoint::DateTime(_), Bound::Until(TimePoint::Date(_))) => {
            Err(RangeError::InvalidRange {
                fault: RangeFault::MixedBounds,
            })
        }
    }
}

/// Calendar-date range bounded by an end date (inclusive when a step lands
/// exactly on it).
pub fn date_range(
    start: Date,
    end: Date,
    offset: DateOffset,
    timezone: Option<&str>,
) -> Result<TimestampArray, RangeError> {
    if start >= end {
        return Err(RangeError::InvalidRange {
            fault: RangeFault::StartNotBeforeEnd,
        });
    }

    let mut values = Vec::new();
    for date in date_cursor(start, offset)? {
        if date > end {
            break;
        }
        values.push(date_nanos(date)?);
    }
    finish(values, timezone)
}

/// Calendar-date range with exactly `periods` steps, start inclusive.
/// Zero periods yields an empty axis.
pub fn date_range_periods(
    start: Date,
    periods: i64,
    offset: DateOffset,
    timezone: Option<&str>,
) -> Result<TimestampArray, RangeError> {
    if periods < 0 {
        return Err(RangeError::InvalidRange {
            fault: RangeFault::NegativePeriods,
        });
    }

    let wanted = periods as usize;
    let mut cursor = date_cursor(start, offset)?;
    let mut values = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let date = cursor.next().ok_or(RangeError::InvalidRange {
            fault: RangeFault::DateOutOfRange,
        })?;
        values.push(date_nanos(date)?);
    }
    finish(values, timezone)
}

/// Date-time range bounded by an end point (inclusive when a step lands
/// exactly on it).
pub fn datetime_range(
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    step: Duration,
    timezone: Option<&str>,
) -> Result<TimestampArray, RangeError> {
    if start >= end {
        return Err(RangeError::InvalidRange {
            fault: RangeFault::StartNotBeforeEnd,
        });
    }
    check_step(step)?;

    let mut values = Vec::new();
    for position in TimeCursor::new(start, step) {
        if position > end {
            break;
        }
        values.push(datetime_nanos(position)?);
    }
    finish(values, timezone)
}

/// Date-time range with exactly `periods` steps, start inclusive.
///
/// Unlike the calendar path, zero periods is rejected here.
pub fn datetime_range_periods(
    start: PrimitiveDateTime,
    periods: i64,
    step: Duration,
    timezone: Option<&str>,
) -> Result<TimestampArray, RangeError> {
    if periods <= 0 {
        return Err(RangeError::InvalidRange {
            fault: RangeFault::NonPositivePeriods,
        });
    }
    check_step(step)?;

    let wanted = periods as usize;
    let mut cursor = TimeCursor::new(start, step);
    let mut values = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let position = cursor.next().ok_or(RangeError::InvalidRange {
            fault: RangeFault::DateOutOfRange,
        })?;
        values.push(datetime_nanos(position)?);
    }
    finish(values, timezone)
}

/// Selects the cursor for a calendar offset, refusing the end-snapped kinds.
///
/// Forward-stepping an end-of-period offset from an arbitrary start date is
/// ambiguous about whether the first value is the current or the next
/// period's end, so those axes must be produced by grouping a daily range
/// downstream instead.
fn date_cursor(
    start: Date,
    offset: DateOffset,
) -> Result<Box<dyn Iterator<Item = Date>>, RangeError> {
    let step = offset.multiplier();
    match offset.kind() {
        OffsetKind::Day => Ok(Box::new(DayCursor::new(start, step))),
        OffsetKind::WeekStart => Ok(Box::new(WeekCursor::new(start, step))),
        OffsetKind::MonthStart => Ok(Box::new(MonthCursor::new(start, step))),
        OffsetKind::QuarterStart => {
            // Silently realigning would change the caller's intended axis.
            if (u8::from(start.month()) - 1) % 3 != 0 {
                return Err(RangeError::InvalidRange {
                    fault: RangeFault::QuarterUnaligned,
                });
            }
            Ok(Box::new(MonthCursor::new(start, step * 3)))
        }
        OffsetKind::YearStart => Ok(Box::new(YearCursor::new(start, step))),
        kind @ (OffsetKind::WeekEnd
        | OffsetKind::MonthEnd
        | OffsetKind::QuarterEnd
        | OffsetKind::YearEnd) => Err(RangeError::UnsupportedIteration { kind }),
    }
}

fn check_step(step: Duration) -> Result<(), RangeError> {
    if step.is_zero() || step.is_negative() {
        return Err(RangeError::InvalidFrequency {
            code: step.to_string(),
        });
    }
    Ok(())
}

fn date_nanos(date: Date) -> Result<i64, RangeError> {
    datetime_nanos(date.midnight())
}

fn datetime_nanos(datetime: PrimitiveDateTime) -> Result<i64, RangeError> {
    i64::try_from(datetime.assume_utc().unix_timestamp_nanos()).map_err(|_| {
        RangeError::InvalidRange {
            fault: RangeFault::DateOutOfRange,
        }
    })
}

fn finish(values: Vec<i64>, timezone: Option<&str>) -> Result<TimestampArray, RangeError> {
    Ok(TimestampArray::from_nanos(
        values,
        timezone.map(str::to_owned),
    )?)
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    const DAY_NANOS: i64 = 86_400_000_000_000;

    fn offset(code: &str) -> DateOffset {
        code.parse().expect("must parse")
    }

    #[test]
    fn daily_range_includes_exact_end() {
        let array = date_range(
            date!(2021 - 01 - 01),
            date!(2021 - 01 - 10),
            offset("D"),
            None,
        )
        .expect("must generate");
        assert_eq!(array.len(), 10);
        let first = array.values()[0];
        let expected: Vec<i64> = (0..10).map(|d| first + d * DAY_NANOS).collect();
        assert_eq!(array.values(), expected.as_slice());
    }

    #[test]
    fn daily_range_is_strictly_increasing_within_bounds() {
        let array = date_range(
            date!(2021 - 01 - 01),
            date!(2021 - 02 - 01),
            offset("3D"),
            None,
        )
        .expect("must generate");
        let start = date_nanos(date!(2021 - 01 - 01)).expect("in range");
        let end = date_nanos(date!(2021 - 02 - 01)).expect("in range");
        assert_eq!(array.values()[0], start);
        for pair in array.values().windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[1] - pair[0], 3 * DAY_NANOS);
        }
        assert!(*array.values().last().expect("non-empty") <= end);
    }

    #[test]
    fn month_start_range_walks_first_days() {
        let array = date_range(
            date!(2021 - 01 - 01),
            date!(2021 - 04 - 01),
            offset("MS"),
            None,
        )
        .expect("must generate");
        let expected: Vec<i64> = [
            date!(2021 - 01 - 01),
            date!(2021 - 02 - 01),
            date!(2021 - 03 - 01),
            date!(2021 - 04 - 01),
        ]
        .iter()
        .map(|d| date_nanos(*d).expect("in range"))
        .collect();
        assert_eq!(array.values(), expected.as_slice());
    }

    #[test]
    fn rejects_end_before_start() {
        let err = date_range(
            date!(2021 - 01 - 10),
            date!(2021 - 01 - 01),
            offset("D"),
            None,
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                fault: RangeFault::StartNotBeforeEnd,
            }
        );
    }

    #[test]
    fn rejects_end_snapped_offsets_for_iteration() {
        for code in ["M", "Q", "W", "Y"] {
            let err = date_range(
                date!(2021 - 01 - 01),
                date!(2022 - 01 - 01),
                offset(code),
                None,
            )
            .expect_err("must fail");
            assert!(matches!(err, RangeError::UnsupportedIteration { .. }));
        }
    }

    #[test]
    fn rejects_unaligned_quarter_start() {
        let err = date_range(
            date!(2021 - 02 - 01),
            date!(2022 - 01 - 01),
            offset("QS"),
            None,
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                fault: RangeFault::QuarterUnaligned,
            }
        );
    }

    #[test]
    fn aligned_quarter_start_steps_three_months() {
        let array = date_range(
            date!(2021 - 04 - 01),
            date!(2022 - 04 - 01),
            offset("QS"),
            None,
        )
        .expect("must generate");
        let expected: Vec<i64> = [
            date!(2021 - 04 - 01),
            date!(2021 - 07 - 01),
            date!(2021 - 10 - 01),
            date!(2022 - 01 - 01),
            date!(2022 - 04 - 01),
        ]
        .iter()
        .map(|d| date_nanos(*d).expect("in range"))
        .collect();
        assert_eq!(array.values(), expected.as_slice());
    }

    #[test]
    fn counted_calendar_range_accepts_zero() {
        let array =
            date_range_periods(date!(2021 - 01 - 01), 0, offset("D"), None).expect("must generate");
        assert!(array.is_empty());
    }

    #[test]
    fn counted_calendar_range_rejects_negative() {
        let err = date_range_periods(date!(2021 - 01 - 01), -1, offset("D"), None)
            .expect_err("must fail");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                fault: RangeFault::NegativePeriods,
            }
        );
    }

    #[test]
    fn counted_calendar_range_has_exact_length() {
        let array = date_range_periods(date!(2021 - 01 - 01), 5, offset("2WS"), None)
            .expect("must generate");
        assert_eq!(array.len(), 5);
        assert_eq!(array.values()[0], date_nanos(date!(2021 - 01 - 01)).expect("in range"));
        assert_eq!(
            array.values()[4],
            date_nanos(date!(2021 - 02 - 26)).expect("in range")
        );
    }

    #[test]
    fn counted_yearly_range_walks_years() {
        let array = date_range_periods(date!(2020 - 06 - 15), 3, offset("YS"), None)
            .expect("must generate");
        let expected: Vec<i64> = [
            date!(2020 - 06 - 15),
            date!(2021 - 06 - 15),
            date!(2022 - 06 - 15),
        ]
        .iter()
        .map(|d| date_nanos(*d).expect("in range"))
        .collect();
        assert_eq!(array.values(), expected.as_slice());
    }

    #[test]
    fn quarter_hour_count_produces_four_slots() {
        let array = datetime_range_periods(
            datetime!(2021 - 01 - 01 00:00),
            4,
            Duration::minutes(15),
            None,
        )
        .expect("must generate");
        let expected: Vec<i64> = [
            datetime!(2021 - 01 - 01 00:00),
            datetime!(2021 - 01 - 01 00:15),
            datetime!(2021 - 01 - 01 00:30),
            datetime!(2021 - 01 - 01 00:45),
        ]
        .iter()
        .map(|t| datetime_nanos(*t).expect("in range"))
        .collect();
        assert_eq!(array.values(), expected.as_slice());
    }

    #[test]
    fn counted_datetime_range_rejects_zero() {
        let err = datetime_range_periods(
            datetime!(2021 - 01 - 01 00:00),
            0,
            Duration::minutes(15),
            None,
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                fault: RangeFault::NonPositivePeriods,
            }
        );
    }

    #[test]
    fn datetime_range_rejects_zero_step() {
        let err = datetime_range(
            datetime!(2021 - 01 - 01 00:00),
            datetime!(2021 - 01 - 01 01:00),
            Duration::ZERO,
            None,
        )
        .expect_err("must fail");
        assert!(matches!(err, RangeError::InvalidFrequency { .. }));
    }

    #[test]
    fn bounded_datetime_range_stays_within_end() {
        let array = datetime_range(
            datetime!(2021 - 01 - 01 00:00),
            datetime!(2021 - 01 - 01 01:00),
            Duration::minutes(25),
            None,
        )
        .expect("must generate");
        // 00:00, 00:25, 00:50; 01:15 overshoots.
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn generate_dispatches_on_time_point() {
        let array = generate(
            TimePoint::Date(date!(2021 - 01 - 01)),
            Bound::Periods(3),
            "MS",
            Some("UTC"),
        )
        .expect("must generate");
        assert_eq!(array.len(), 3);
        assert_eq!(array.timezone(), Some("UTC"));

        let array = generate(
            TimePoint::DateTime(datetime!(2021 - 01 - 01 00:00)),
            Bound::Periods(4),
            "15T",
            None,
        )
        .expect("must generate");
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn generate_rejects_calendar_code_on_datetime_path() {
        let err = generate(
            TimePoint::DateTime(datetime!(2021 - 01 - 01 00:00)),
            Bound::Periods(4),
            "MS",
            None,
        )
        .expect_err("must fail");
        assert!(matches!(err, RangeError::UnsupportedFrequencyUnit { .. }));
    }

    #[test]
    fn generate_rejects_mixed_bounds() {
        let err = generate(
            TimePoint::Date(date!(2021 - 01 - 01)),
            Bound::Until(TimePoint::DateTime(datetime!(2021 - 01 - 02 00:00))),
            "D",
            None,
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                fault: RangeFault::MixedBounds,
            }
        );
    }
}
