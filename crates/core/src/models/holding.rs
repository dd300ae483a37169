use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single position in the holdings table.
///
/// Stores what the user entered (investment, purchase price) plus the most
/// recently known market price; value, gain/loss and return are derived on
/// the fly so they can never drift out of sync with the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol (e.g., "NVDA"), stored uppercase
    pub ticker: String,

    /// Date the position was opened
    pub date_added: NaiveDate,

    /// Cash invested at purchase, in the display currency
    pub amount_invested: f64,

    /// Price per share at purchase
    pub purchase_price: f64,

    /// Number of shares held (fractional shares allowed)
    pub shares: f64,

    /// Most recently known price per share
    pub current_price: f64,
}

impl Holding {
    pub fn new(
        ticker: impl Into<String>,
        date_added: NaiveDate,
        amount_invested: f64,
        purchase_price: f64,
        shares: f64,
        current_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticker: ticker.into().to_uppercase(),
            date_added,
            amount_invested,
            purchase_price,
            shares,
            current_price,
        }
    }

    /// Current market value of the position.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Absolute gain or loss since purchase.
    #[must_use]
    pub fn gain_loss(&self) -> f64 {
        self.current_value() - self.amount_invested
    }

    /// Percentage return since purchase. Zero for a zero-cost position.
    #[must_use]
    pub fn return_pct(&self) -> f64 {
        if self.amount_invested > 0.0 {
            (self.gain_loss() / self.amount_invested) * 100.0
        } else {
            0.0
        }
    }
}
