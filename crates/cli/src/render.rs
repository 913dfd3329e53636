use crypto_dashboard_core::models::snapshot::DashboardSnapshot;
use crypto_dashboard_core::presentation::{BadgeVariant, Formatter, Trend};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Plain-text rendering of the dashboard page: header, cards, chart, transactions.
pub fn render_text(formatter: &Formatter, snapshot: &DashboardSnapshot) -> String {
    let mut out = String::from("Crypto Dashboard\n");
    out.push_str("Track your cryptocurrency portfolio and recent transactions\n\n");

    for card in formatter.summary_cards(&snapshot.summary) {
        let arrow = match card.trend {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => " ",
        };
        out.push_str(&format!(
            "{arrow} {:<18} {:>14}  {}\n",
            card.title, card.value, card.caption
        ));
    }

    out.push_str("\nPortfolio Performance\n");
    out.push_str("Monthly portfolio value over the last 6 months\n");
    for bar in formatter.chart_bars(&snapshot.chart) {
        out.push_str(&format!(
            "  {:<4} {:>10}  {}\n",
            bar.month,
            bar.tooltip_value,
            bar_glyphs(&bar.value)
        ));
    }

    out.push_str("\nRecent Transactions\n");
    out.push_str("Your latest cryptocurrency trades\n");
    for row in formatter.transaction_rows(&snapshot.transactions) {
        let badge = match row.badge_variant {
            BadgeVariant::Default => format!("[{}]", row.badge),
            BadgeVariant::Destructive => format!("<{}>", row.badge),
        };
        out.push_str(&format!(
            "  {:<7} {:<6} {:<36} {:>12}  {}\n",
            badge, row.asset, row.detail, row.total, row.date
        ));
    }

    out
}

/// One block per 1 000 of value.
fn bar_glyphs(value: &Decimal) -> String {
    let blocks = (*value / Decimal::ONE_THOUSAND)
        .trunc()
        .to_usize()
        .unwrap_or(0)
        .min(50);
    "█".repeat(blocks)
}
