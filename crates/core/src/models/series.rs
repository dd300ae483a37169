use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Value both tracked indices are normalized to at the start of the series.
/// Later values read directly as "cumulative % change + 100".
pub const BASELINE_VALUE: f64 = 100.0;

/// A single point of the paired performance series.
///
/// Both values are normalized indices (series start = 100.0), not currency
/// amounts, so the portfolio and the benchmark stay directly comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Trading date for this point (no time component — daily granularity)
    pub date: NaiveDate,

    /// Portfolio index value at this date
    pub portfolio_value: f64,

    /// Benchmark index value at this date
    pub benchmark_value: f64,
}

impl TimePoint {
    pub fn new(date: NaiveDate, portfolio_value: f64, benchmark_value: f64) -> Self {
        Self {
            date,
            portfolio_value,
            benchmark_value,
        }
    }
}

/// Validate the base-series invariants the downstream transforms rely on:
/// strictly increasing dates, business days only, and both values equal to
/// the 100.0 baseline at index 0.
///
/// An empty series is accepted — the pipeline handles it (the summary step
/// is the only place it becomes an error).
pub fn validate_series(series: &[TimePoint]) -> Result<(), CoreError> {
    if let Some(first) = series.first() {
        if first.portfolio_value != BASELINE_VALUE || first.benchmark_value != BASELINE_VALUE {
            return Err(CoreError::ValidationError(format!(
                "Series must start at the {BASELINE_VALUE} baseline, got ({}, {})",
                first.portfolio_value, first.benchmark_value
            )));
        }
    }

    for window in series.windows(2) {
        if window[1].date <= window[0].date {
            return Err(CoreError::ValidationError(format!(
                "Series dates must be strictly increasing: {} followed by {}",
                window[0].date, window[1].date
            )));
        }
    }

    for point in series {
        let weekday = point.date.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            return Err(CoreError::ValidationError(format!(
                "Series must contain business days only, found {} on {}",
                weekday, point.date
            )));
        }
    }

    Ok(())
}
