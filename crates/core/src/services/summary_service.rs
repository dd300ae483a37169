use crate::errors::CoreError;
use crate::models::series::{TimePoint, BASELINE_VALUE};
use crate::models::summary::PerformanceSummary;

/// Derives the headline return percentages from an aggregated series.
///
/// Both tracked values are normalized to a 100.0 baseline at series start,
/// so the offset from the baseline at the last displayed point directly
/// reads as cumulative percentage return over the whole displayed window.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the last point of `aggregated`.
    ///
    /// An empty series is a precondition violation — callers must run the
    /// pipeline first — and fails with `EmptySeries` rather than producing
    /// placeholder numbers.
    pub fn summarize(&self, aggregated: &[TimePoint]) -> Result<PerformanceSummary, CoreError> {
        let last = aggregated.last().ok_or(CoreError::EmptySeries)?;

        let portfolio_return_pct = last.portfolio_value - BASELINE_VALUE;
        let benchmark_return_pct = last.benchmark_value - BASELINE_VALUE;

        Ok(PerformanceSummary {
            portfolio_return_pct,
            benchmark_return_pct,
            difference_pct: portfolio_return_pct - benchmark_return_pct,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
