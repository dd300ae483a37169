use serde::{Deserialize, Serialize};

/// Headline return figures for the currently displayed window.
///
/// All three are cumulative percentages over the displayed range — the
/// frontend only formats the sign and decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Portfolio return over the displayed window, in percent
    pub portfolio_return_pct: f64,

    /// Benchmark return over the displayed window, in percent
    pub benchmark_return_pct: f64,

    /// Portfolio minus benchmark (positive = outperforming)
    pub difference_pct: f64,
}

impl PerformanceSummary {
    /// `true` when the portfolio beat the benchmark over the window.
    #[must_use]
    pub fn is_outperforming(&self) -> bool {
        self.difference_pct >= 0.0
    }
}
