use chrono::NaiveDate;

use crate::models::series::TimePoint;
use crate::models::window::{Granularity, ViewingWindow};

/// Maps a viewing window to a slice of the base series plus the granularity
/// it should be displayed at.
///
/// Pure business logic — no I/O, no state. Easy to test.
pub struct RangeService;

impl RangeService {
    pub fn new() -> Self {
        Self
    }

    /// Select the sub-range of `base` the window should display.
    ///
    /// The base series is sorted ascending by date, so the first point on or
    /// after the cutoff is found with a binary boundary search (O(log n)).
    ///
    /// If the cutoff lands after the last available date, the entire base
    /// series is returned unfiltered — showing all available data beats
    /// showing an empty chart.
    pub fn select_range(
        &self,
        base: &[TimePoint],
        window: ViewingWindow,
        now: NaiveDate,
    ) -> (Vec<TimePoint>, Granularity) {
        let granularity = window.granularity();
        let cutoff = window.cutoff(now);

        let start = base.partition_point(|p| p.date < cutoff);
        if start == base.len() && !base.is_empty() {
            return (base.to_vec(), granularity);
        }

        (base[start..].to_vec(), granularity)
    }
}

impl Default for RangeService {
    fn default() -> Self {
        Self::new()
    }
}
