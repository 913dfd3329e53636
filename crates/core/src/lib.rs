pub mod errors;
pub mod models;
pub mod presentation;
pub mod services;

use chrono::{DateTime, Utc};
use models::{settings::DashboardSettings, snapshot::DashboardSnapshot};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use services::generator_service::{GeneratorProfile, GeneratorService};
use tracing::{info, instrument};

use errors::CoreError;

/// Main entry point for the Crypto Dashboard core library.
/// Owns the random source and settings; every `render` produces a fresh,
/// independent snapshot.
#[must_use]
pub struct Dashboard {
    settings: DashboardSettings,
    generator: GeneratorService,
    rng: Box<dyn RngCore + Send>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("settings", &self.settings)
            .field("profile", self.generator.profile())
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Create a dashboard with default settings, seeded from OS entropy.
    pub fn create_new() -> Self {
        Self::build(DashboardSettings::default())
    }

    /// Create a dashboard from settings. Uses `settings.seed` when present,
    /// OS entropy otherwise.
    pub fn new(settings: DashboardSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    /// Create a dashboard that draws from the given random source
    /// (`settings.seed` is ignored).
    pub fn with_rng(
        settings: DashboardSettings,
        rng: impl RngCore + Send + 'static,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let generator = GeneratorService::with_profile(GeneratorProfile::with_lookback_days(
            settings.lookback_days,
        ));
        Ok(Self {
            settings,
            generator,
            rng: Box::new(rng),
        })
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Generate a fresh snapshot as of now.
    pub fn render(&mut self) -> DashboardSnapshot {
        self.render_at(Utc::now())
    }

    /// Generate a fresh snapshot treating `now` as the current instant.
    #[instrument(skip(self), fields(transactions = self.settings.transaction_count))]
    pub fn render_at(&mut self, now: DateTime<Utc>) -> DashboardSnapshot {
        let summary = self.generator.generate_summary(&mut self.rng);
        let transactions = self.generator.generate_transactions(
            &mut self.rng,
            self.settings.transaction_count,
            now,
        );
        let chart = self.generator.generate_chart_series(&mut self.rng);

        info!(generated_at = %now, "Rendered dashboard snapshot");
        DashboardSnapshot {
            generated_at: now,
            summary,
            chart,
            transactions,
        }
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Change how many transactions subsequent renders produce.
    pub fn set_transaction_count(&mut self, count: usize) {
        self.settings.transaction_count = count;
    }

    /// Formatter configured with this dashboard's currency symbol.
    #[must_use]
    pub fn formatter(&self) -> presentation::Formatter {
        presentation::Formatter::new(self.settings.currency_symbol.clone())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export a snapshot as a pretty JSON string.
    pub fn export_snapshot_to_json(snapshot: &DashboardSnapshot) -> Result<String, CoreError> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot to JSON: {e}")))
    }

    /// Export a snapshot's transactions as a CSV string.
    /// Columns: id, type, asset, amount, price, total, timestamp
    #[must_use]
    pub fn export_transactions_to_csv(snapshot: &DashboardSnapshot) -> String {
        let mut csv = String::from("id,type,asset,amount,price,total,timestamp\n");
        for tx in &snapshot.transactions {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                tx.id,
                tx.transaction_type,
                tx.asset,
                tx.amount,
                tx.price,
                tx.total,
                tx.timestamp.to_rfc3339(),
            ));
        }
        csv
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: DashboardSettings) -> Self {
        let generator = GeneratorService::with_profile(GeneratorProfile::with_lookback_days(
            settings.lookback_days,
        ));
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            settings,
            generator,
            rng: Box::new(rng),
        }
    }
}
