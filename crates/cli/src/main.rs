use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crypto_dashboard_core::models::settings::DashboardSettings;
use crypto_dashboard_core::Dashboard;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// Full snapshot as pretty JSON
    Json,
    /// Transactions only, as CSV
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "crypto-dashboard")]
#[command(about = "Render one crypto dashboard filled with generated mock data")]
#[command(version)]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    settings: Option<String>,

    /// Seed for reproducible output
    #[arg(long, env = "DASHBOARD_SEED")]
    seed: Option<u64>,

    /// Number of transactions to generate
    #[arg(short, long, env = "DASHBOARD_TRANSACTIONS")]
    transactions: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn resolve_settings(&self) -> Result<DashboardSettings> {
        let mut settings = match &self.settings {
            Some(path) => DashboardSettings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {path}"))?,
            None => DashboardSettings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(count) = self.transactions {
            settings.transaction_count = count;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.resolve_settings()?;
    info!(?settings, "Starting dashboard render");

    let mut dashboard = Dashboard::new(settings)?;
    let snapshot = dashboard.render();

    let output = match cli.format {
        OutputFormat::Text => render::render_text(&dashboard.formatter(), &snapshot),
        OutputFormat::Json => Dashboard::export_snapshot_to_json(&snapshot)?,
        OutputFormat::Csv => Dashboard::export_transactions_to_csv(&snapshot),
    };
    print!("{output}");
    Ok(())
}
