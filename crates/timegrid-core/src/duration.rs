//! Sub-day duration resolution for date-time ranges.
//!
//! Sub-day steps are fixed-length and never need calendar snapping, so they
//! resolve straight to a [`time::Duration`]. Calendar-scale codes are
//! refused here; those belong to [`crate::DateOffset`].

use time::Duration;

use crate::error::RangeError;
use crate::frequency::FrequencyCode;
use crate::unit;

/// Resolves a recognized sub-day unit to `multiplier × unit length`.
pub fn resolve_duration(unit: &str, multiplier: i64) -> Result<Duration, RangeError> {
    unit::fixed_duration(unit, multiplier).ok_or_else(|| RangeError::UnsupportedFrequencyUnit {
        unit: unit.to_owned(),
    })
}

/// Parses a full frequency code ("15T", "500ms") into a fixed duration.
pub fn resolve_duration_code(code: &str) -> Result<Duration, RangeError> {
    let parsed = FrequencyCode::parse(code)?;
    resolve_duration(&parsed.unit, parsed.multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_minutes_under_both_spellings() {
        assert_eq!(
            resolve_duration("T", 15).expect("must resolve"),
            Duration::minutes(15)
        );
        assert_eq!(
            resolve_duration("min", 15).expect("must resolve"),
            Duration::minutes(15)
        );
    }

    #[test]
    fn resolves_full_codes() {
        assert_eq!(
            resolve_duration_code("15T").expect("must resolve"),
            Duration::minutes(15)
        );
        assert_eq!(
            resolve_duration_code("2H").expect("must resolve"),
            Duration::hours(2)
        );
        assert_eq!(
            resolve_duration_code("500ms").expect("must resolve"),
            Duration::milliseconds(500)
        );
        assert_eq!(
            resolve_duration_code("N").expect("must resolve"),
            Duration::nanoseconds(1)
        );
    }

    #[test]
    fn rejects_calendar_units() {
        for unit in ["D", "W", "WS", "M", "MS", "Q", "QS", "Y", "YS"] {
            let err = resolve_duration(unit, 1).expect_err("must fail");
            assert!(matches!(err, RangeError::UnsupportedFrequencyUnit { .. }));
        }
    }

    #[test]
    fn rejects_malformed_code() {
        let err = resolve_duration_code("T15").expect_err("must fail");
        assert!(matches!(err, RangeError::InvalidFrequency { .. }));
    }
}
