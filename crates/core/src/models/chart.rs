use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Months covered by the performance chart, in display order.
pub const CHART_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Three-letter English abbreviation ("Jan", "Feb", ...).
pub fn month_abbreviation(month: Month) -> &'static str {
    &month.name()[..3]
}

/// A single bar of the monthly portfolio performance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Month label, e.g. "Jan"
    pub month: String,

    /// Portfolio value for the month (whole number)
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}
