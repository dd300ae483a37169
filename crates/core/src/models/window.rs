use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Resampling resolution of a displayed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// One point per trading day
    Daily,
    /// One point per calendar week (closing value)
    Weekly,
    /// One point per calendar month (closing value)
    Monthly,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Weekly => write!(f, "weekly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

/// A user-selectable named range: how far back to look, and at what
/// granularity to display. The granularity pairing is a fixed policy
/// (coarser windows get coarser sampling to bound rendered points),
/// not a configurable knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewingWindow {
    /// Last month, daily points
    OneMonth,
    /// Last 3 months, daily points
    ThreeMonths,
    /// Last 6 months, weekly points
    SixMonths,
    /// Last year, weekly points
    OneYear,
    /// Last 5 years, monthly points
    FiveYears,
    /// Everything available, monthly points
    All,
}

impl ViewingWindow {
    /// All windows in display order (matches the dashboard's button row).
    pub const ALL_WINDOWS: [ViewingWindow; 6] = [
        ViewingWindow::OneMonth,
        ViewingWindow::ThreeMonths,
        ViewingWindow::SixMonths,
        ViewingWindow::OneYear,
        ViewingWindow::FiveYears,
        ViewingWindow::All,
    ];

    /// The fixed window → granularity policy.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        match self {
            ViewingWindow::OneMonth | ViewingWindow::ThreeMonths => Granularity::Daily,
            ViewingWindow::SixMonths | ViewingWindow::OneYear => Granularity::Weekly,
            ViewingWindow::FiveYears | ViewingWindow::All => Granularity::Monthly,
        }
    }

    /// Earliest date the window should display, counted back from `now`.
    ///
    /// `All` uses the same 5-year offset as `FiveYears`; combined with the
    /// range selector's fallback policy it always shows the whole base
    /// series. Month subtraction clamps to the end of shorter months
    /// (Mar 31 − 1 month = Feb 28/29); calendar underflow saturates.
    #[must_use]
    pub fn cutoff(&self, now: NaiveDate) -> NaiveDate {
        let months = match self {
            ViewingWindow::OneMonth => 1,
            ViewingWindow::ThreeMonths => 3,
            ViewingWindow::SixMonths => 6,
            ViewingWindow::OneYear => 12,
            ViewingWindow::FiveYears | ViewingWindow::All => 60,
        };
        now.checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for ViewingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ViewingWindow::OneMonth => "1M",
            ViewingWindow::ThreeMonths => "3M",
            ViewingWindow::SixMonths => "6M",
            ViewingWindow::OneYear => "1Y",
            ViewingWindow::FiveYears => "5Y",
            ViewingWindow::All => "ALL",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for ViewingWindow {
    type Err = CoreError;

    /// Parse the UI control labels the dashboard buttons carry ("1M", "3M",
    /// "6M", "1Y", "5Y", "ALL"). Anything else is `InvalidWindow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1M" => Ok(ViewingWindow::OneMonth),
            "3M" => Ok(ViewingWindow::ThreeMonths),
            "6M" => Ok(ViewingWindow::SixMonths),
            "1Y" => Ok(ViewingWindow::OneYear),
            "5Y" => Ok(ViewingWindow::FiveYears),
            "ALL" => Ok(ViewingWindow::All),
            other => Err(CoreError::InvalidWindow(other.to_string())),
        }
    }
}
