use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Upper bound for `lookback_days` (100 years).
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// User-configurable dashboard settings.
///
/// Every field has a default, so a partial JSON file (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// How many transactions each render produces.
    pub transaction_count: usize,

    /// Transactions are timestamped within this many days before "now".
    pub lookback_days: u32,

    /// Prefix used when formatting money (e.g., "$").
    pub currency_symbol: String,

    /// Fixed seed for reproducible renders. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            transaction_count: 10,
            lookback_days: 30,
            currency_symbol: "$".to_string(),
            seed: None,
        }
    }
}

impl DashboardSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.lookback_days == 0 || self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(CoreError::InvalidSettings(format!(
                "lookback_days must be between 1 and {MAX_LOOKBACK_DAYS}"
            )));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "currency_symbol must not be empty".into(),
            ));
        }
        Ok(())
    }
}
