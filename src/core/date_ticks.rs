//! Calendar-aware tick placement for whole-date X axes.
//!
//! When every X value is a midnight-UTC date lined up on years, months or
//! weeks, the default continuous temporal ticks land between data points.
//! This module detects that structure and emits an explicit tick list that
//! steps by a whole number of periods and always ends on the latest date.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on the number of special-case ticks.
pub const MAX_SPECIAL_CASE_TICKS: usize = 8;

/// Regular spacing detected in a date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePeriod {
    Year,
    Month,
    Week,
}

impl DatePeriod {
    /// `utcFormat` pattern for tick labels: `2020`, `Jan 2020`, `Jan 3, 2020`.
    #[must_use]
    pub fn label_pattern(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::Month => "%b %Y",
            Self::Week => "%b %-d, %Y",
        }
    }

    /// Moves `date` by `periods` whole periods (negative moves backward).
    fn shift(self, date: NaiveDate, periods: i64) -> Option<NaiveDate> {
        match self {
            Self::Year => shift_months(date, periods.checked_mul(12)?),
            Self::Month => shift_months(date, periods),
            Self::Week => date.checked_add_signed(TimeDelta::try_weeks(periods)?),
        }
    }

    /// Number of whole periods between `min` and `max`.
    fn periods_between(self, min: NaiveDate, max: NaiveDate) -> i64 {
        match self {
            Self::Year => i64::from(max.year() - min.year()),
            Self::Month => month_index(max) - month_index(min),
            Self::Week => (max - min).num_days() / 7,
        }
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Explicit ticks for a calendar-aligned date axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTicks {
    pub period: DatePeriod,
    /// Ascending, evenly spaced; the last tick is the latest date in the data.
    pub ticks: Vec<NaiveDate>,
}

impl DateTicks {
    #[must_use]
    pub fn label_pattern(&self) -> &'static str {
        self.period.label_pattern()
    }

    /// First tick; may fall before the earliest data point.
    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.ticks.first().copied()
    }
}

/// Detects year, month or week alignment (first match wins).
///
/// Returns `None` when any value has a time-of-day component, when no
/// alignment applies, or when `values` is empty.
#[must_use]
pub fn detect_date_ticks(values: &[DateTime<Utc>], max_ticks: usize) -> Option<DateTicks> {
    if !values.iter().all(|value| is_midnight(*value)) {
        return None;
    }
    let dates: Vec<NaiveDate> = values.iter().map(DateTime::date_naive).collect();
    let min = dates.iter().min().copied()?;
    let max = dates.iter().max().copied()?;

    let period = if dates.iter().all(|d| d.month() == 1 && d.day() == 1) {
        DatePeriod::Year
    } else if dates.iter().all(|d| d.day() == 1) {
        DatePeriod::Month
    } else if dates.iter().all(|d| d.weekday() == min.weekday()) {
        DatePeriod::Week
    } else {
        return None;
    };

    let n_periods = period.periods_between(min, max);
    let ticks = nice_date_ticks(max, n_periods, period, max_ticks)?;
    debug!(?period, n_periods, tick_count = ticks.len(), "date axis special case");
    Some(DateTicks { period, ticks })
}

/// Lays out at most `max_ticks` ticks ending at `max_date`.
///
/// The spacing is the smallest whole number of periods that keeps the count
/// under the bound; the first tick is extrapolated backward from `max_date`.
/// Returns `None` for `max_ticks < 2`, a negative domain, or date overflow.
#[must_use]
pub fn nice_date_ticks(
    max_date: NaiveDate,
    n_periods_in_domain: i64,
    period: DatePeriod,
    max_ticks: usize,
) -> Option<Vec<NaiveDate>> {
    if max_ticks < 2 || n_periods_in_domain < 0 {
        return None;
    }
    let max_gaps = i64::try_from(max_ticks - 1).ok()?;
    let n_domain_values = n_periods_in_domain + 1;
    let n_periods_between_ticks = div_ceil(n_domain_values, max_gaps);
    let n_ticks = div_ceil(n_periods_in_domain, n_periods_between_ticks) + 1;

    let tick0 = period.shift(max_date, -(n_ticks - 1) * n_periods_between_ticks)?;
    (0..n_ticks)
        .map(|i| period.shift(tick0, i * n_periods_between_ticks))
        .collect()
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}

fn is_midnight(value: DateTime<Utc>) -> bool {
    value.hour() == 0 && value.minute() == 0 && value.second() == 0 && value.nanosecond() == 0
}
