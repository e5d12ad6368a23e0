//! hrms - HR records report
//!
//! Opens the file-backed record store (seeding it on first run) and prints
//! today's dashboard and the current month's payroll sheet as JSON.

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrms::config::LogFormat;
use hrms::domain::Clock;
use hrms::domain::SystemClock;
use hrms::store::FileStorage;
use hrms::{Config, HrService, HrStore, LoadOutcome};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hrms=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    tracing::info!(
        "Opening HR records in {} (environment: {})",
        config.data_dir.display(),
        config.environment
    );

    let storage = FileStorage::new(&config.data_dir)?;
    let (store, outcome) = HrStore::open(storage, &config.storage_key, SystemClock.today())?;

    match &outcome {
        LoadOutcome::Loaded => {}
        LoadOutcome::Seeded => tracing::info!("Initialized store with seed data"),
        LoadOutcome::Recovered { error, backup_key } => tracing::warn!(
            "Stored data was unreadable ({}); seed data installed, previous value kept under {:?}",
            error,
            backup_key
        ),
    }

    let service = HrService::new(store).with_policy(config.policy);

    let report = json!({
        "dashboard": service.dashboard(),
        "departments": service.department_roster(),
        "payroll": service.current_payroll_sheet(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
