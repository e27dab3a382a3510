//! SplitLedger settlement report.
//!
//! Reads a ledger snapshot (participants, expenses, payments) from a JSON file
//! and prints every balance plus the suggested transfers.
//!
//! Usage: settle [--format text|json] [--strict] <snapshot.json>

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use splitledger_core::LedgerSnapshot;
use splitledger_shared::config::{LogConfig, OutputFormat};
use splitledger_shared::{AppConfig, AppError, AppResult};

/// Print balances and a settlement plan for a shared-expense snapshot.
#[derive(Parser, Debug)]
#[command(name = "settle", version, about)]
struct Cli {
    /// Path to the ledger snapshot JSON file.
    snapshot: PathBuf,

    /// Output format, overriding `settle.format`.
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Fail when the snapshot does not pass ledger validation.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.log);

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Installs the global subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.level.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!log.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    let snapshot = load_snapshot(&cli.snapshot)?;
    info!(
        path = %cli.snapshot.display(),
        participants = snapshot.participants.len(),
        expenses = snapshot.expenses.len(),
        payments = snapshot.payments.len(),
        "Loaded ledger snapshot"
    );

    if let Err(err) = snapshot.validate() {
        if cli.strict || config.settle.strict {
            return Err(AppError::from(err).into());
        }
        warn!(code = err.error_code(), "{err}");
    }

    let format = cli.format.unwrap_or(config.settle.format);
    let report = render::Report::build(&snapshot);
    match format {
        OutputFormat::Text => Ok(render::text(&report, &snapshot.participants)),
        OutputFormat::Json => Ok(render::json(&report)?),
    }
}

fn load_snapshot(path: &Path) -> AppResult<LedgerSnapshot> {
    let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Snapshot(format!("{}: {err}", path.display())),
    })?;

    serde_json::from_str(&raw)
        .map_err(|err| AppError::Snapshot(format!("{}: {err}", path.display())))
}
