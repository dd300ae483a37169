pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    holding::Holding,
    series::{validate_series, TimePoint},
    summary::PerformanceSummary,
    window::{Granularity, ViewingWindow},
};
use services::{
    aggregation_service::AggregationService, generator_service::GeneratorService,
    range_service::RangeService, summary_service::SummaryService,
};

use errors::CoreError;

/// Main entry point for the Stock Dashboard core library.
///
/// Owns the immutable base series and the holdings list, and wires the
/// range → aggregation → summary pipeline that runs on every window change.
/// The base series is read-only after construction; every pipeline call
/// returns freshly built data, so repeated calls need no coordination.
#[must_use]
pub struct StockDashboard {
    base_series: Vec<TimePoint>,
    holdings: Vec<Holding>,
    range_service: RangeService,
    aggregation_service: AggregationService,
    summary_service: SummaryService,
}

impl std::fmt::Debug for StockDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockDashboard")
            .field("series_points", &self.base_series.len())
            .field("holdings", &self.holdings.len())
            .finish()
    }
}

impl StockDashboard {
    /// Create a dashboard from an externally produced base series.
    ///
    /// Validates the series invariants the pipeline relies on (strictly
    /// increasing dates, business days only, 100.0 baseline at index 0).
    pub fn from_series(series: Vec<TimePoint>) -> Result<Self, CoreError> {
        validate_series(&series)?;
        Ok(Self::build(series))
    }

    /// Create a dashboard backed by generated mock data: a 5-year random
    /// walk ending at `now`, plus the sample holdings the dashboard ships
    /// with until a real data feed is connected.
    pub fn with_mock_data(now: NaiveDate) -> Self {
        let series = GeneratorService::new().generate(now);
        let mut dashboard = Self::build(series);
        dashboard.holdings = Self::sample_holdings();
        dashboard
    }

    // ── Chart Pipeline ──────────────────────────────────────────────

    /// Produce the chart-ready series for a window: slice the base series
    /// to the window's range, then resample at the window's granularity.
    #[must_use]
    pub fn chart_data(&self, window: ViewingWindow, now: NaiveDate) -> Vec<TimePoint> {
        let (slice, granularity) = self
            .range_service
            .select_range(&self.base_series, window, now);
        self.aggregation_service.aggregate(&slice, granularity)
    }

    /// Same as `chart_data`, but takes the raw UI control label ("1M",
    /// "3M", "6M", "1Y", "5Y", "ALL"). Unknown labels fail with
    /// `InvalidWindow`.
    pub fn chart_data_for_label(
        &self,
        label: &str,
        now: NaiveDate,
    ) -> Result<Vec<TimePoint>, CoreError> {
        let window: ViewingWindow = label.parse()?;
        Ok(self.chart_data(window, now))
    }

    /// The granularity a window's chart will be rendered at.
    #[must_use]
    pub fn granularity_for(&self, window: ViewingWindow) -> Granularity {
        window.granularity()
    }

    /// Headline return percentages for a window, computed from the last
    /// point of the aggregated series. Fails with `EmptySeries` when the
    /// dashboard holds no data at all; the frontend should keep its prior
    /// displayed values in that case.
    pub fn performance_summary(
        &self,
        window: ViewingWindow,
        now: NaiveDate,
    ) -> Result<PerformanceSummary, CoreError> {
        let aggregated = self.chart_data(window, now);
        self.summary_service.summarize(&aggregated)
    }

    /// Read-only view of the full base series.
    #[must_use]
    pub fn base_series(&self) -> &[TimePoint] {
        &self.base_series
    }

    /// Replace the base series after a data refresh. Validates the new
    /// series; on failure the previous series is kept untouched.
    pub fn refresh_series(&mut self, series: Vec<TimePoint>) -> Result<(), CoreError> {
        validate_series(&series)?;
        self.base_series = series;
        Ok(())
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Add a position to the holdings table.
    pub fn add_holding(
        &mut self,
        ticker: impl Into<String>,
        date_added: NaiveDate,
        amount_invested: f64,
        purchase_price: f64,
        shares: f64,
        current_price: f64,
    ) -> Result<uuid::Uuid, CoreError> {
        let holding = Holding::new(
            ticker,
            date_added,
            amount_invested,
            purchase_price,
            shares,
            current_price,
        );
        Self::validate_holding(&holding)?;
        let id = holding.id;
        self.holdings.push(holding);
        Ok(id)
    }

    /// Remove a position by its ID.
    pub fn remove_holding(&mut self, holding_id: uuid::Uuid) -> Result<(), CoreError> {
        let idx = self
            .holdings
            .iter()
            .position(|h| h.id == holding_id)
            .ok_or_else(|| CoreError::HoldingNotFound(holding_id.to_string()))?;
        self.holdings.remove(idx);
        Ok(())
    }

    /// Update the current market price of a position.
    pub fn set_holding_price(
        &mut self,
        holding_id: uuid::Uuid,
        current_price: f64,
    ) -> Result<(), CoreError> {
        if current_price < 0.0 {
            return Err(CoreError::ValidationError(
                "Current price must not be negative".into(),
            ));
        }
        let holding = self
            .holdings
            .iter_mut()
            .find(|h| h.id == holding_id)
            .ok_or_else(|| CoreError::HoldingNotFound(holding_id.to_string()))?;
        holding.current_price = current_price;
        Ok(())
    }

    /// Get a single holding by its ID.
    #[must_use]
    pub fn get_holding(&self, holding_id: uuid::Uuid) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == holding_id)
    }

    /// All holdings, oldest position first (table display order).
    #[must_use]
    pub fn get_holdings(&self) -> Vec<&Holding> {
        let mut holdings: Vec<&Holding> = self.holdings.iter().collect();
        holdings.sort_by(|a, b| a.date_added.cmp(&b.date_added));
        holdings
    }

    /// Number of positions without materializing a sorted vector.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export a window's chart-ready series as a JSON string.
    pub fn export_chart_to_json(
        &self,
        window: ViewingWindow,
        now: NaiveDate,
    ) -> Result<String, CoreError> {
        let aggregated = self.chart_data(window, now);
        serde_json::to_string_pretty(&aggregated)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart data: {e}")))
    }

    /// Export all holdings as a JSON string.
    pub fn export_holdings_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.holdings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize holdings: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(base_series: Vec<TimePoint>) -> Self {
        Self {
            base_series,
            holdings: Vec::new(),
            range_service: RangeService::new(),
            aggregation_service: AggregationService::new(),
            summary_service: SummaryService::new(),
        }
    }

    /// Validate a holding before adding it to the table.
    ///
    /// Rules: non-empty ticker; invested amount, purchase price and share
    /// count must be positive; current price must not be negative.
    fn validate_holding(holding: &Holding) -> Result<(), CoreError> {
        if holding.ticker.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Ticker must not be empty".into(),
            ));
        }
        if holding.amount_invested <= 0.0 {
            return Err(CoreError::ValidationError(
                "Amount invested must be positive".into(),
            ));
        }
        if holding.purchase_price <= 0.0 {
            return Err(CoreError::ValidationError(
                "Purchase price must be positive".into(),
            ));
        }
        if holding.shares <= 0.0 {
            return Err(CoreError::ValidationError(
                "Share count must be positive".into(),
            ));
        }
        if holding.current_price < 0.0 {
            return Err(CoreError::ValidationError(
                "Current price must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Placeholder positions shown until a real market feed is connected.
    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding::new(
                "NVDA",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or(NaiveDate::MIN),
                1000.0,
                495.22,
                2.019,
                875.28,
            ),
            Holding::new(
                "TSLA",
                NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or(NaiveDate::MIN),
                1500.0,
                175.50,
                8.547,
                242.84,
            ),
            Holding::new(
                "PLTR",
                NaiveDate::from_ymd_opt(2024, 6, 10).unwrap_or(NaiveDate::MIN),
                800.0,
                23.45,
                34.117,
                38.76,
            ),
        ]
    }
}
