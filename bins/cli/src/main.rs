//! Divvy command-line tool
//!
//! Reads recorded expenses from a JSON file and lists them, or reports
//! balances, the payments that settle them, the people involved, or a
//! per-person category summary. Results are printed as JSON on stdout; logs go to stderr.

mod ledger;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use divvy_core::expense::newest_first;
use divvy_core::summary::{category_summary, people};
use divvy_core::{calculate_balances, SettlementSimplifier};
use divvy_shared::types::PersonId;
use divvy_shared::{AppConfig, AppError};

#[derive(Parser, Debug)]
#[command(name = "divvy")]
#[command(about = "Work out who owes whom for a group's shared expenses")]
struct Cli {
    /// Expense file (JSON array). Defaults to `ledger.path` from configuration.
    #[arg(long, short, env = "DIVVY_FILE")]
    file: Option<PathBuf>,

    /// Refuse to settle balances that do not sum to zero.
    #[arg(long)]
    strict: bool,

    /// Skip expense validation.
    #[arg(long)]
    no_validate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Recorded expenses, newest first.
    Expenses,
    /// Net balance per person.
    Balances,
    /// Payments that settle every balance.
    Settle,
    /// Everyone who paid for or shares an expense.
    People,
    /// Category breakdown of what a person paid for and shares.
    Summary {
        /// The person to summarise.
        person: String,
    },
    /// Validate the expense file without computing anything.
    Validate,
}

/// Effective settings after merging configuration with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    path: PathBuf,
    validate: bool,
    strict: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        Self {
            path: cli
                .file
                .clone()
                .unwrap_or_else(|| config.ledger.path.clone()),
            validate: config.ledger.validate && !cli.no_validate,
            strict: config.settlement.strict || cli.strict,
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    // Initialize tracing; RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::resolve(&cli, &config);
    match run(&cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "divvy failed");
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(command: &Command, settings: &Settings) -> anyhow::Result<()> {
    let expenses = ledger::load_expenses(&settings.path, settings.validate)
        .with_context(|| format!("loading {}", settings.path.display()))?;

    match command {
        Command::Expenses => print_json(&newest_first(&expenses)),
        Command::Balances => print_json(&calculate_balances(&expenses)),
        Command::Settle => {
            let balances = calculate_balances(&expenses);
            let payments = SettlementSimplifier::new(settings.strict)
                .simplify(&balances)
                .map_err(AppError::from)?;
            info!(
                people = balances.outstanding(),
                payments = payments.len(),
                "Settlement computed"
            );
            print_json(&payments)
        }
        Command::People => print_json(&people(&expenses)),
        Command::Summary { person } => {
            let person = PersonId::from(person.as_str());
            let summary = category_summary(&expenses, &person);
            if summary.is_empty() {
                return Err(AppError::NotFound(format!("person {person}")).into());
            }
            print_json(&summary)
        }
        Command::Validate => {
            info!(expenses = expenses.len(), "All expenses are valid");
            print_json(&serde_json::json!({ "valid": expenses.len() }))
        }
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Exit code for a failed run: the application error's code if there is one.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map_or(1, AppError::exit_code)
}
