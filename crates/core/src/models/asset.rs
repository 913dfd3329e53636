use serde::{Deserialize, Serialize};

/// The crypto assets a mock transaction can involve.
///
/// Serialized as the uppercase ticker symbol (e.g. `"BTC"`, `"MATIC"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CryptoAsset {
    Btc,
    Eth,
    Ada,
    Sol,
    Matic,
    Link,
    Dot,
}

impl CryptoAsset {
    /// Every supported asset, in display order.
    pub const ALL: [CryptoAsset; 7] = [
        CryptoAsset::Btc,
        CryptoAsset::Eth,
        CryptoAsset::Ada,
        CryptoAsset::Sol,
        CryptoAsset::Matic,
        CryptoAsset::Link,
        CryptoAsset::Dot,
    ];

    /// Ticker symbol, uppercased (e.g., "BTC", "ETH").
    pub fn symbol(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Eth => "ETH",
            CryptoAsset::Ada => "ADA",
            CryptoAsset::Sol => "SOL",
            CryptoAsset::Matic => "MATIC",
            CryptoAsset::Link => "LINK",
            CryptoAsset::Dot => "DOT",
        }
    }

    /// Human-readable name (e.g., "Bitcoin").
    pub fn name(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "Bitcoin",
            CryptoAsset::Eth => "Ethereum",
            CryptoAsset::Ada => "Cardano",
            CryptoAsset::Sol => "Solana",
            CryptoAsset::Matic => "Polygon",
            CryptoAsset::Link => "Chainlink",
            CryptoAsset::Dot => "Polkadot",
        }
    }

    /// Look up an asset by ticker symbol (case-insensitive).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let upper = symbol.to_uppercase();
        Self::ALL.into_iter().find(|a| a.symbol() == upper)
    }
}

impl std::fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
