use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline portfolio metrics shown on the four summary cards.
///
/// Every field is drawn independently; no relationship between them holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Total portfolio balance, 2 fractional digits
    pub total_balance: Decimal,

    /// Number of trades made
    pub total_trades: u32,

    /// Percentage change, 2 fractional digits (may be negative)
    pub portfolio_change: Decimal,

    /// Number of open positions
    pub active_positions: u32,
}

impl PortfolioSummary {
    /// `true` when the change is zero or positive.
    pub fn is_change_positive(&self) -> bool {
        !self.portfolio_change.is_sign_negative() || self.portfolio_change.is_zero()
    }
}
