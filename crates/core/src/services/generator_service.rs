use chrono::{Datelike, Months, NaiveDate, Weekday};
use rand::Rng;

use crate::models::series::{TimePoint, BASELINE_VALUE};

/// How far back the generated history reaches, in months (5 years).
const LOOKBACK_MONTHS: u32 = 60;

/// Produces a mock base series: a business-day random walk of paired
/// (portfolio, benchmark) index values over a 5-year lookback, both
/// normalized to 100.0 at the first point.
///
/// This is the only place randomness lives — the range/aggregation/summary
/// transforms stay deterministic and run against fixed fixtures in tests.
/// Will be replaced by a real market-data feed later.
pub struct GeneratorService;

impl GeneratorService {
    pub fn new() -> Self {
        Self
    }

    /// Generate the mock series ending at `now`, using the thread-local RNG.
    #[must_use]
    pub fn generate(&self, now: NaiveDate) -> Vec<TimePoint> {
        self.generate_with_rng(now, &mut rand::thread_rng())
    }

    /// Generate the mock series ending at `now` with a caller-supplied RNG,
    /// so tests can seed a `StdRng` and get reproducible data.
    ///
    /// Walks day by day from `now - 5 years`, skipping Saturdays and
    /// Sundays. Both values start at exactly 100.0; each subsequent trading
    /// day applies a small random percentage change with a slight upward
    /// bias, the portfolio more volatile than the benchmark.
    pub fn generate_with_rng<R: Rng>(&self, now: NaiveDate, rng: &mut R) -> Vec<TimePoint> {
        let start = now
            .checked_sub_months(Months::new(LOOKBACK_MONTHS))
            .unwrap_or(NaiveDate::MIN);

        let mut series = Vec::new();
        let mut portfolio_value = BASELINE_VALUE;
        let mut benchmark_value = BASELINE_VALUE;

        let mut current_date = start;
        while current_date <= now {
            let weekday = current_date.weekday();
            if weekday != Weekday::Sat && weekday != Weekday::Sun {
                series.push(TimePoint::new(
                    current_date,
                    portfolio_value,
                    benchmark_value,
                ));

                // Simulated daily returns, applied from the next trading day
                let portfolio_change = (rng.gen::<f64>() - 0.48) * 2.0;
                let benchmark_change = (rng.gen::<f64>() - 0.49) * 1.5;
                portfolio_value *= 1.0 + portfolio_change / 100.0;
                benchmark_value *= 1.0 + benchmark_change / 100.0;
            }

            current_date = match current_date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        series
    }
}

impl Default for GeneratorService {
    fn default() -> Self {
        Self::new()
    }
}
