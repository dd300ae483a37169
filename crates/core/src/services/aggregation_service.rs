use chrono::{Datelike, Days, NaiveDate};

use crate::models::series::TimePoint;
use crate::models::window::Granularity;

/// Identifies the period bucket a point falls into.
///
/// Weeks are keyed by the Monday that starts them; months by (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodKey {
    Week(NaiveDate),
    Month(i32, u32),
}

/// Resamples a daily series to a coarser granularity using closing-value
/// semantics: one output point per period, carrying the values of the
/// chronologically last point in that period.
///
/// Pure business logic — no I/O, no state. Easy to test.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Resample `slice` to the requested granularity.
    ///
    /// Input points are already sorted ascending by date, so buckets are
    /// formed by detecting key changes in a single left-to-right pass; the
    /// last point seen in a bucket is also the chronologically last one.
    /// The emitted point keeps its real trading date (period close), not a
    /// synthetic bucket-start date, so displayed dates stay meaningful.
    ///
    /// Daily granularity is the identity transform. An empty slice yields
    /// an empty result; a single point yields a single point.
    pub fn aggregate(&self, slice: &[TimePoint], granularity: Granularity) -> Vec<TimePoint> {
        if granularity == Granularity::Daily {
            return slice.to_vec();
        }

        let mut aggregated = Vec::new();
        let mut current_key: Option<PeriodKey> = None;
        let mut period_close: Option<TimePoint> = None;

        for point in slice {
            let key = Self::period_key(point.date, granularity);

            if current_key.is_some() && current_key != Some(key) {
                if let Some(close) = period_close {
                    aggregated.push(close);
                }
            }

            current_key = Some(key);
            period_close = Some(*point);
        }

        // Flush the final in-progress bucket
        if let Some(close) = period_close {
            aggregated.push(close);
        }

        aggregated
    }

    fn period_key(date: NaiveDate, granularity: Granularity) -> PeriodKey {
        match granularity {
            Granularity::Weekly => PeriodKey::Week(Self::week_start(date)),
            Granularity::Monthly => PeriodKey::Month(date.year(), date.month()),
            // Daily never reaches here (identity short-circuit above)
            Granularity::Daily => PeriodKey::Week(date),
        }
    }

    /// The Monday starting `date`'s week. Sunday counts as the end of the
    /// prior week, i.e. it rolls back 6 days.
    fn week_start(date: NaiveDate) -> NaiveDate {
        let days_from_monday = date.weekday().num_days_from_monday() as u64;
        date.checked_sub_days(Days::new(days_from_monday))
            .unwrap_or(date)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
