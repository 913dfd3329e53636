use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::CryptoAsset;

/// Side of a mock trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Buying an asset
    Buy,
    /// Selling an asset
    Sell,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Buy, TransactionType::Sell];

    /// Lowercase wire name ("buy" / "sell").
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single generated trade shown in the "Recent Transactions" list.
///
/// `total` is drawn on its own and is NOT `amount × price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique within one generated set
    pub id: Uuid,

    /// Buy or Sell
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub asset: CryptoAsset,

    /// Units of the asset, 6 fractional digits
    pub amount: Decimal,

    /// Unit price, 2 fractional digits
    pub price: Decimal,

    /// When the trade happened (within the lookback window)
    pub timestamp: DateTime<Utc>,

    /// Trade value, 2 fractional digits
    pub total: Decimal,
}
