// ═══════════════════════════════════════════════════════════════════
// Presentation Tests — summary cards, chart bars, transaction rows,
// currency/date formatting
// ═══════════════════════════════════════════════════════════════════

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crypto_dashboard_core::models::asset::CryptoAsset;
use crypto_dashboard_core::models::chart::ChartPoint;
use crypto_dashboard_core::models::summary::PortfolioSummary;
use crypto_dashboard_core::models::transaction::{Transaction, TransactionType};
use crypto_dashboard_core::presentation::{group_thousands, BadgeVariant, Formatter, Trend};

fn summary(change_units: i64) -> PortfolioSummary {
    PortfolioSummary {
        total_balance: Decimal::new(4_567_890, 2),
        total_trades: 321,
        portfolio_change: Decimal::new(change_units, 2),
        active_positions: 9,
    }
}

fn tx(transaction_type: TransactionType) -> Transaction {
    Transaction {
        id: Uuid::from_u128(0x1234),
        transaction_type,
        asset: CryptoAsset::Eth,
        amount: Decimal::new(2_500_000, 6),
        price: Decimal::new(315_075, 2),
        timestamp: Utc.with_ymd_and_hms(2025, 3, 7, 23, 59, 0).unwrap(),
        total: Decimal::new(123_456, 2),
    }
}

// ── Number formatting ───────────────────────────────────────────────

mod formatting {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(Decimal::new(12_345, 0)), "12,345");
        assert_eq!(group_thousands(Decimal::new(1_234_567, 0)), "1,234,567");
        assert_eq!(group_thousands(Decimal::new(100_000, 0)), "100,000");
    }

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(group_thousands(Decimal::new(999, 0)), "999");
        assert_eq!(group_thousands(Decimal::ZERO), "0");
    }

    #[test]
    fn keeps_fraction_and_sign() {
        assert_eq!(group_thousands(Decimal::new(123_456_789, 2)), "1,234,567.89");
        assert_eq!(group_thousands(Decimal::new(-1_500_050, 2)), "-15,000.50");
    }

    #[test]
    fn currency_uses_symbol() {
        assert_eq!(Formatter::default().currency(Decimal::new(9_876, 0)), "$9,876");
        assert_eq!(Formatter::new("€").currency(Decimal::new(1_000, 0)), "€1,000");
    }

    #[test]
    fn currency_plain_keeps_raw_digits() {
        assert_eq!(
            Formatter::default().currency_plain(Decimal::new(4_567_890, 2)),
            "$45678.90"
        );
    }

    #[test]
    fn signed_percent() {
        let f = Formatter::default();
        assert_eq!(f.signed_percent(Decimal::new(1_234, 2)), "+12.34%");
        assert_eq!(f.signed_percent(Decimal::new(0, 2)), "+0.00%");
        assert_eq!(f.signed_percent(Decimal::new(-505, 2)), "-5.05%");
    }

    #[test]
    fn short_date_is_us_style_without_padding() {
        let f = Formatter::default();
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 0, 0, 0).unwrap();
        assert_eq!(f.short_date(ts), "3/7/2025");
        let ts = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(f.short_date(ts), "12/25/2024");
    }
}

// ── Summary cards ───────────────────────────────────────────────────

mod cards {
    use super::*;

    #[test]
    fn four_cards_in_page_order() {
        let cards = Formatter::default().summary_cards(&summary(1_000));
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Total Portfolio", "Total Trades", "Active Positions", "24h Change"]);
    }

    #[test]
    fn positive_change_card_contents() {
        let cards = Formatter::default().summary_cards(&summary(1_000));
        assert_eq!(cards[0].value, "$45678.90");
        assert_eq!(cards[0].caption, "+10.00% from last month");
        assert_eq!(cards[0].trend, Trend::Up);
        assert_eq!(cards[1].value, "321");
        assert_eq!(cards[1].caption, "+12% from last month");
        assert_eq!(cards[2].value, "9");
        assert_eq!(cards[2].caption, "Across 8 cryptocurrencies");
        assert_eq!(cards[3].value, "+10.00%");
        assert_eq!(cards[3].caption, "Portfolio performance");
        assert_eq!(cards[3].trend, Trend::Up);
    }

    #[test]
    fn negative_change_turns_trend_down() {
        let cards = Formatter::default().summary_cards(&summary(-725));
        assert_eq!(cards[0].caption, "-7.25% from last month");
        assert_eq!(cards[0].trend, Trend::Down);
        assert_eq!(cards[3].value, "-7.25%");
        assert_eq!(cards[3].trend, Trend::Down);
    }

    #[test]
    fn zero_change_is_up() {
        let cards = Formatter::default().summary_cards(&summary(0));
        assert_eq!(cards[3].value, "+0.00%");
        assert_eq!(cards[3].trend, Trend::Up);
    }

    #[test]
    fn static_cards_are_neutral() {
        let cards = Formatter::default().summary_cards(&summary(-100));
        assert_eq!(cards[1].trend, Trend::Neutral);
        assert_eq!(cards[2].trend, Trend::Neutral);
    }
}

// ── Chart bars ──────────────────────────────────────────────────────

mod chart {
    use super::*;

    #[test]
    fn tooltip_is_localized_currency() {
        let points = vec![
            ChartPoint { month: "Jan".into(), value: Decimal::new(12_345, 0) },
            ChartPoint { month: "Feb".into(), value: Decimal::new(5_000, 0) },
        ];
        let bars = Formatter::default().chart_bars(&points);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].month, "Jan");
        assert_eq!(bars[0].value, Decimal::new(12_345, 0));
        assert_eq!(bars[0].tooltip_label, "Portfolio Value");
        assert_eq!(bars[0].tooltip_value, "$12,345");
        assert_eq!(bars[1].tooltip_value, "$5,000");
    }

    #[test]
    fn empty_chart() {
        assert!(Formatter::default().chart_bars(&[]).is_empty());
    }
}

// ── Transaction rows ────────────────────────────────────────────────

mod rows {
    use super::*;

    #[test]
    fn buy_row() {
        let rows = Formatter::default().transaction_rows(&[tx(TransactionType::Buy)]);
        let row = &rows[0];
        assert_eq!(row.key, Uuid::from_u128(0x1234).to_string());
        assert_eq!(row.badge, "BUY");
        assert_eq!(row.badge_variant, BadgeVariant::Default);
        assert_eq!(row.asset, "ETH");
        assert_eq!(row.detail, "2.500000 ETH @ $3150.75");
        assert_eq!(row.total, "$1234.56");
        assert_eq!(row.date, "3/7/2025");
    }

    #[test]
    fn sell_row_is_destructive() {
        let rows = Formatter::default().transaction_rows(&[tx(TransactionType::Sell)]);
        assert_eq!(rows[0].badge, "SELL");
        assert_eq!(rows[0].badge_variant, BadgeVariant::Destructive);
    }

    #[test]
    fn preserves_order() {
        let txs = vec![
            tx(TransactionType::Sell),
            tx(TransactionType::Buy),
            tx(TransactionType::Sell),
        ];
        let badges: Vec<_> = Formatter::default()
            .transaction_rows(&txs)
            .into_iter()
            .map(|r| r.badge)
            .collect();
        assert_eq!(badges, ["SELL", "BUY", "SELL"]);
    }
}
