use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chart::ChartPoint;
use super::summary::PortfolioSummary;
use super::transaction::Transaction;

/// Everything one dashboard render needs: the three generated bundles plus
/// the instant they were generated at.
///
/// Snapshots are never mutated; each render produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// "Now" as seen by the generator (transaction timestamps are relative to it)
    pub generated_at: DateTime<Utc>,

    pub summary: PortfolioSummary,

    /// Exactly six monthly points, Jan → Jun
    pub chart: Vec<ChartPoint>,

    /// In generation order, not sorted
    pub transactions: Vec<Transaction>,
}
