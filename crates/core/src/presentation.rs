//! Display-ready view models for the dashboard page.
//!
//! The generator produces plain records; these functions decide how they are
//! shown (titles, signs, trend colours, badges, localized strings). Nothing
//! here draws random numbers or holds state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::chart::ChartPoint;
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::{Transaction, TransactionType};

/// Direction indicator for a card (arrow icon and colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Visual style of a transaction badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Buy
    Default,
    /// Sell
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub month: String,
    pub value: Decimal,
    pub tooltip_label: String,
    pub tooltip_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub key: String,
    pub badge: String,
    pub badge_variant: BadgeVariant,
    pub asset: String,
    pub detail: String,
    pub total: String,
    pub date: String,
}

/// Money and date formatting used by every view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    currency_symbol: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl Formatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Currency symbol followed by the value with en-US thousands grouping,
    /// keeping whatever fractional digits the value carries.
    pub fn currency(&self, value: Decimal) -> String {
        format!("{}{}", self.currency_symbol, group_thousands(value))
    }

    /// Currency symbol followed by the value exactly as stored (no grouping).
    pub fn currency_plain(&self, value: Decimal) -> String {
        format!("{}{}", self.currency_symbol, value)
    }

    /// en-US short date (`M/D/YYYY`).
    pub fn short_date(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.format("%-m/%-d/%Y").to_string()
    }

    /// `+` for zero or positive values, nothing otherwise (the minus sign is
    /// part of the number).
    pub fn signed_percent(&self, value: Decimal) -> String {
        let sign = if is_non_negative(value) { "+" } else { "" };
        format!("{sign}{value}%")
    }

    // ── View models ─────────────────────────────────────────────────

    /// The four summary cards, in page order.
    pub fn summary_cards(&self, summary: &PortfolioSummary) -> Vec<SummaryCard> {
        let change_trend = if summary.is_change_positive() {
            Trend::Up
        } else {
            Trend::Down
        };
        let change = self.signed_percent(summary.portfolio_change);

        vec![
            SummaryCard {
                title: "Total Portfolio".into(),
                value: self.currency_plain(summary.total_balance),
                caption: format!("{change} from last month"),
                trend: change_trend,
            },
            SummaryCard {
                title: "Total Trades".into(),
                value: summary.total_trades.to_string(),
                caption: "+12% from last month".into(),
                trend: Trend::Neutral,
            },
            SummaryCard {
                title: "Active Positions".into(),
                value: summary.active_positions.to_string(),
                caption: "Across 8 cryptocurrencies".into(),
                trend: Trend::Neutral,
            },
            SummaryCard {
                title: "24h Change".into(),
                value: change,
                caption: "Portfolio performance".into(),
                trend: change_trend,
            },
        ]
    }

    /// One bar per chart point, with the tooltip text.
    pub fn chart_bars(&self, chart: &[ChartPoint]) -> Vec<ChartBar> {
        chart
            .iter()
            .map(|point| ChartBar {
                month: point.month.clone(),
                value: point.value,
                tooltip_label: "Portfolio Value".into(),
                tooltip_value: self.currency(point.value),
            })
            .collect()
    }

    /// One row per transaction, in the order given.
    pub fn transaction_rows(&self, transactions: &[Transaction]) -> Vec<TransactionRow> {
        transactions
            .iter()
            .map(|tx| TransactionRow {
                key: tx.id.to_string(),
                badge: tx.transaction_type.as_str().to_uppercase(),
                badge_variant: match tx.transaction_type {
                    TransactionType::Buy => BadgeVariant::Default,
                    TransactionType::Sell => BadgeVariant::Destructive,
                },
                asset: tx.asset.symbol().to_string(),
                detail: format!(
                    "{} {} @ {}",
                    tx.amount,
                    tx.asset,
                    self.currency_plain(tx.price)
                ),
                total: self.currency_plain(tx.total),
                date: self.short_date(tx.timestamp),
            })
            .collect()
    }
}

fn is_non_negative(value: Decimal) -> bool {
    value.is_zero() || value.is_sign_positive()
}

/// en-US digit grouping: `1234567.5` → `1,234,567.5`.
pub fn group_thousands(value: Decimal) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
