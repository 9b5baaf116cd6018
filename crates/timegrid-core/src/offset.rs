use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::util::days_in_month;
use time::{Date, Duration, Month};

use crate::error::RangeError;
use crate::frequency::FrequencyCode;
use crate::unit;

/// Calendar unit of a [`DateOffset`], including its boundary-snap side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetKind {
    Day,
    WeekStart,
    WeekEnd,
    MonthStart,
    MonthEnd,
    QuarterStart,
    QuarterEnd,
    YearStart,
    YearEnd,
}

impl OffsetKind {
    pub const ALL: [Self; 9] = [
        Self::Day,
        Self::WeekStart,
        Self::WeekEnd,
        Self::MonthStart,
        Self::MonthEnd,
        Self::QuarterStart,
        Self::QuarterEnd,
        Self::YearStart,
        Self::YearEnd,
    ];

    /// The frequency-code letters for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::WeekStart => "WS",
            Self::WeekEnd => "W",
            Self::MonthStart => "MS",
            Self::MonthEnd => "M",
            Self::QuarterStart => "QS",
            Self::QuarterEnd => "Q",
            Self::YearStart => "YS",
            Self::YearEnd => "Y",
        }
    }

    /// Kinds that snap to the end of their period. These cannot be iterated
    /// forward from an arbitrary start date.
    pub const fn snaps_to_end(self) -> bool {
        matches!(
            self,
            Self::WeekEnd | Self::MonthEnd | Self::QuarterEnd | Self::YearEnd
        )
    }
}

impl Display for OffsetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar-unit step: kind plus a multiplier of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateOffset {
    kind: OffsetKind,
    multiplier: i64,
}

impl DateOffset {
    pub fn new(kind: OffsetKind, multiplier: i64) -> Result<Self, RangeError> {
        if multiplier < 1 {
            return Err(RangeError::InvalidFrequency {
                code: format!("{multiplier}{kind}"),
            });
        }
        Ok(Self { kind, multiplier })
    }

    pub const fn kind(self) -> OffsetKind {
        self.kind
    }

    pub const fn multiplier(self) -> i64 {
        self.multiplier
    }

    /// Advances a date by one offset and applies the boundary snap.
    ///
    /// Start-snapped kinds advance the full multiplier and snap back to the
    /// period's first day. End-snapped kinds roll: a date already on the
    /// boundary advances the full multiplier, any other date advances one
    /// period less and snaps forward, so the first step from mid-period
    /// lands on the current period's end.
    ///
    /// Returns `None` when the result leaves the representable calendar
    /// range.
    pub fn step(self, date: Date) -> Option<Date> {
        let n = self.multiplier;
        match self.kind {
            OffsetKind::Day => date.checked_add(Duration::days(n)),
            OffsetKind::WeekStart | OffsetKind::WeekEnd => {
                date.checked_add(Duration::weeks(n))
            }
            OffsetKind::MonthStart => {
                let moved = add_months(date, n)?;
                Date::from_calendar_date(moved.year(), moved.month(), 1).ok()
            }
            OffsetKind::MonthEnd => {
                let rolled = if date == month_end(date)? { n } else { n - 1 };
                month_end(add_months(date, rolled)?)
            }
            OffsetKind::QuarterStart => quarter_start(add_months(date, 3 * n)?),
            OffsetKind::QuarterEnd => {
                let rolled = if date == quarter_end(date)? { n } else { n - 1 };
                quarter_end(add_months(date, 3 * rolled)?)
            }
            OffsetKind::YearStart => {
                let moved = add_months(date, 12 * n)?;
                Date::from_calendar_date(moved.year(), Month::January, 1).ok()
            }
            OffsetKind::YearEnd => {
                let on_boundary = date.month() == Month::December && date.day() == 31;
                let rolled = if on_boundary { n } else { n - 1 };
                let moved = add_months(date, 12 * rolled)?;
                Date::from_calendar_date(moved.year(), Month::December, 31).ok()
            }
        }
    }
}

impl FromStr for DateOffset {
    type Err = RangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = FrequencyCode::parse(value)?;
        let kind = unit::offset_kind(&code.unit).ok_or_else(|| RangeError::InvalidFrequency {
            code: value.to_owned(),
        })?;
        Self::new(kind, code.multiplier)
    }
}

impl Display for DateOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.multiplier == 1 {
            f.write_str(self.kind.as_str())
        } else {
            write!(f, "{}{}", self.multiplier, self.kind)
        }
    }
}

/// Whole-month advance with the day-of-month clamped to the target month's
/// length, so leap years and 28/29/30/31-day months come out exact.
pub(crate) fn add_months(date: Date, months: i64) -> Option<Date> {
    let index = i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1;
    let moved = index.checked_add(months)?;
    let year = i32::try_from(moved.div_euclid(12)).ok()?;
    let month = Month::try_from(u8::try_from(moved.rem_euclid(12) + 1).ok()?).ok()?;
    let day = date.day().min(days_in_month(month, year));
    Date::from_calendar_date(year, month, day).ok()
}

fn month_end(date: Date) -> Option<Date> {
    Date::from_calendar_date(
        date.year(),
        date.month(),
        days_in_month(date.month(), date.year()),
    )
    .ok()
}

/// First day of the quarter containing `date`; quarter start month is
/// `((month - 1) / 3) * 3 + 1`.
fn quarter_start(date: Date) -> Option<Date> {
    let month = Month::try_from((u8::from(date.month()) - 1) / 3 * 3 + 1).ok()?;
    Date::from_calendar_date(date.year(), month, 1).ok()
}

/// Last day of the quarter containing `date`: the day before the next
/// quarter's first day.
fn quarter_end(date: Date) -> Option<Date> {
    let month = Month::try_from((u8::from(date.month()) - 1) / 3 * 3 + 3).ok()?;
    Date::from_calendar_date(date.year(), month, days_in_month(month, date.year())).ok()
}
