//! Stepping cursors behind range generation.
//!
//! Each cursor yields its start position first and then advances one step
//! per call, forever increasing. Calendar overflow ends the iterator. The
//! month and year cursors step from a fixed base (`base + n × step`) instead
//! of adding repeatedly, so a day-31 base does not drift downward after
//! clamping through a short month.

use time::{Date, Duration, PrimitiveDateTime};

use crate::offset::add_months;

/// Walks calendar dates in whole-day steps.
#[derive(Debug, Clone)]
pub struct DayCursor {
    current: Option<Date>,
    step: i64,
}

impl DayCursor {
    pub fn new(start: Date, step: i64) -> Self {
        Self {
            current: Some(start),
            step,
        }
    }
}

impl Iterator for DayCursor {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.current?;
        self.current = current.checked_add(Duration::days(self.step));
        Some(current)
    }
}

/// Walks calendar dates in whole-week steps, keeping the weekday.
#[derive(Debug, Clone)]
pub struct WeekCursor {
    current: Option<Date>,
    step: i64,
}

impl WeekCursor {
    pub fn new(start: Date, step: i64) -> Self {
        Self {
            current: Some(start),
            step,
        }
    }
}

impl Iterator for WeekCursor {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.current?;
        self.current = current.checked_add(Duration::weeks(self.step));
        Some(current)
    }
}

/// Walks calendar dates in whole-month steps with exact month lengths.
#[derive(Debug, Clone)]
pub struct MonthCursor {
    base: Date,
    step: i64,
    taken: i64,
}

impl MonthCursor {
    pub fn new(start: Date, step: i64) -> Self {
        Self {
            base: start,
            step,
            taken: 0,
        }
    }
}

impl Iterator for MonthCursor {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let months = self.taken.checked_mul(self.step)?;
        let date = add_months(self.base, months)?;
        self.taken = self.taken.checked_add(1)?;
        Some(date)
    }
}

/// Walks calendar dates in whole-year steps.
#[derive(Debug, Clone)]
pub struct YearCursor {
    base: Date,
    step: i64,
    taken: i64,
}

impl YearCursor {
    pub fn new(start: Date, step: i64) -> Self {
        Self {
            base: start,
            step,
            taken: 0,
        }
    }
}

impl Iterator for YearCursor {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let months = self.taken.checked_mul(self.step)?.checked_mul(12)?;
        let date = add_months(self.base, months)?;
        self.taken = self.taken.checked_add(1)?;
        Some(date)
    }
}

/// Walks date-times in fixed sub-day steps.
#[derive(Debug, Clone)]
pub struct TimeCursor {
    current: Option<PrimitiveDateTime>,
    step: Duration,
}

impl TimeCursor {
    pub fn new(start: PrimitiveDateTime, step: Duration) -> Self {
        Self {
            current: Some(start),
            step,
        }
    }
}

impl Iterator for TimeCursor {
    type Item = PrimitiveDateTime;

    fn next(&mut self) -> Option<PrimitiveDateTime> {
        let current = self.current?;
        self.current = current.checked_add(self.step);
        Some(current)
    }
}
