use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::models::asset::CryptoAsset;
use crate::models::chart::{month_abbreviation, ChartPoint, CHART_MONTHS};
use crate::models::range::{CountRange, DecimalRange};
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::{Transaction, TransactionType};

/// Bounds for every generated field.
///
/// `Default` gives the ranges the dashboard ships with. Tests and callers can
/// tighten them, but generation semantics stay the same: each field is an
/// independent uniform draw from its closed range.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorProfile {
    /// [10 000.00, 100 000.00]
    pub total_balance: DecimalRange,
    /// [50, 500]
    pub total_trades: CountRange,
    /// [-15.00, 25.00] percent
    pub portfolio_change: DecimalRange,
    /// [5, 15]
    pub active_positions: CountRange,

    /// [0.001000, 10.000000]
    pub amount: DecimalRange,
    /// [100.00, 50 000.00]
    pub price: DecimalRange,
    /// [50.00, 5 000.00]
    pub total: DecimalRange,
    /// Assets a transaction may pick from
    pub assets: Vec<CryptoAsset>,
    /// How far back transaction timestamps may go
    pub lookback_days: u32,

    /// [5 000, 15 000], whole numbers
    pub chart_value: DecimalRange,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self {
            total_balance: DecimalRange::from_units(1_000_000, 10_000_000, 2),
            total_trades: CountRange::new(50, 500),
            portfolio_change: DecimalRange::from_units(-1_500, 2_500, 2),
            active_positions: CountRange::new(5, 15),
            amount: DecimalRange::from_units(1_000, 10_000_000, 6),
            price: DecimalRange::from_units(10_000, 5_000_000, 2),
            total: DecimalRange::from_units(5_000, 500_000, 2),
            assets: CryptoAsset::ALL.to_vec(),
            lookback_days: 30,
            chart_value: DecimalRange::from_units(5_000, 15_000, 0),
        }
    }
}

impl GeneratorProfile {
    /// Default ranges with a custom timestamp window.
    pub fn with_lookback_days(lookback_days: u32) -> Self {
        Self {
            lookback_days,
            ..Self::default()
        }
    }
}

/// Produces the three mock data bundles: summary metrics, transactions and
/// the monthly chart series.
///
/// The service holds only its profile; randomness is always passed in, so a
/// seeded RNG gives reproducible output and nothing carries over between calls.
pub struct GeneratorService {
    profile: GeneratorProfile,
}

impl GeneratorService {
    pub fn new() -> Self {
        Self::with_profile(GeneratorProfile::default())
    }

    pub fn with_profile(profile: GeneratorProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }

    /// Generate the four headline metrics.
    pub fn generate_summary<R: Rng + ?Sized>(&self, rng: &mut R) -> PortfolioSummary {
        let summary = PortfolioSummary {
            total_balance: self.profile.total_balance.sample(rng),
            total_trades: self.profile.total_trades.sample(rng),
            portfolio_change: self.profile.portfolio_change.sample(rng),
            active_positions: self.profile.active_positions.sample(rng),
        };
        debug!(
            total_balance = %summary.total_balance,
            portfolio_change = %summary.portfolio_change,
            "Generated portfolio summary"
        );
        summary
    }

    /// Generate `count` transactions timestamped within the lookback window
    /// ending at `now`.
    ///
    /// Returned in generation order. Ids are unique within the returned set.
    pub fn generate_transactions<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        now: DateTime<Utc>,
    ) -> Vec<Transaction> {
        let mut seen_ids = HashSet::with_capacity(count);
        let mut transactions = Vec::with_capacity(count);

        for _ in 0..count {
            // A taken id is stepped to the next free value instead of redrawn,
            // so a constant RNG still terminates.
            let mut id = random_uuid(rng);
            while !seen_ids.insert(id) {
                id = Uuid::from_u128(id.as_u128().wrapping_add(1));
            }

            transactions.push(Transaction {
                id,
                transaction_type: TransactionType::ALL[pick_index(rng, TransactionType::ALL.len())],
                asset: self.pick_asset(rng),
                amount: self.profile.amount.sample(rng),
                price: self.profile.price.sample(rng),
                timestamp: self.recent_timestamp(rng, now),
                total: self.profile.total.sample(rng),
            });
        }

        debug!(count = transactions.len(), "Generated transactions");
        transactions
    }

    /// Generate one point per chart month, Jan → Jun.
    pub fn generate_chart_series<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ChartPoint> {
        let series: Vec<ChartPoint> = CHART_MONTHS
            .iter()
            .map(|month| ChartPoint {
                month: month_abbreviation(*month).to_string(),
                value: self.profile.chart_value.sample(rng),
            })
            .collect();
        debug!(points = series.len(), "Generated chart series");
        series
    }

    // ── Internal ────────────────────────────────────────────────────

    fn pick_asset<R: Rng + ?Sized>(&self, rng: &mut R) -> CryptoAsset {
        // An empty asset list falls back to the full set.
        let assets: &[CryptoAsset] = if self.profile.assets.is_empty() {
            &CryptoAsset::ALL
        } else {
            &self.profile.assets
        };
        assets[pick_index(rng, assets.len())]
    }

    /// Uniform instant in `[now - lookback_days, now]`, millisecond resolution.
    /// Clamped to the earliest representable instant.
    fn recent_timestamp<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
        let window_ms = Duration::days(i64::from(self.profile.lookback_days)).num_milliseconds();
        let back_ms = Uniform::new_inclusive(0, window_ms).sample(rng);
        now.checked_sub_signed(Duration::milliseconds(back_ms))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for GeneratorService {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform index into a non-empty slice of length `len`.
fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    Uniform::new_inclusive(0, len - 1).sample(rng)
}

/// Random (version 4) UUID drawn from the injected RNG rather than the OS.
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
