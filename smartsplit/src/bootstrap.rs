use crate::{
    cli::Cli,
    commands::{self, CommandOutcome},
};
use anyhow::{Context, bail};
use clap::Parser;
use smartsplit_application::LedgerService;
use smartsplit_domain::{DisplayContext, RoundingMode};
use smartsplit_infrastructure::JsonFileLedgerStore;
use std::{env, io, path::PathBuf, process::ExitCode};
use tracing::Level;

const DEFAULT_DATA_FILE: &str = "smartsplit.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub display: DisplayContext,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_file = lookup("SMARTSPLIT_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let scale = match lookup("SMARTSPLIT_DISPLAY_SCALE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("SMARTSPLIT_DISPLAY_SCALE must be a number, got '{raw}'"))?,
            None => 0,
        };

        let rounding_mode = match lookup("SMARTSPLIT_ROUNDING").as_deref().map(str::trim) {
            None | Some("half-up") => RoundingMode::HalfUp,
            Some("half-away-from-zero") => RoundingMode::HalfAwayFromZero,
            Some("half-even") => RoundingMode::HalfEven,
            Some(other) => bail!(
                "SMARTSPLIT_ROUNDING must be 'half-up', 'half-away-from-zero' or 'half-even', got '{other}'"
            ),
        };

        Ok(Self {
            data_file,
            display: DisplayContext {
                scale,
                rounding_mode,
            },
        })
    }
}

/// Initialize logging and tracing
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Parse arguments, run one command against the ledger file, print the result.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::from_env()?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    tracing::debug!(config = ?config, "Configuration loaded");

    let store = JsonFileLedgerStore::new(&config.data_file);
    let mut service = LedgerService::open(store).with_context(|| {
        format!(
            "failed to load ledger from '{}'",
            config.data_file.display()
        )
    })?;

    match commands::execute(cli.command, &mut service, &config)? {
        CommandOutcome::Done(output) => {
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        CommandOutcome::Rejected(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}
