//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where expenses are read from.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Settlement behaviour.
    #[serde(default)]
    pub settlement: SettlementConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Expense ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Path of the JSON file holding the recorded expenses.
    #[serde(default = "default_ledger_path")]
    pub path: PathBuf,
    /// Whether every expense is validated before the engine sees it.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: default_ledger_path(),
            validate: default_validate(),
        }
    }
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("expenses.json")
}

fn default_validate() -> bool {
    true
}

/// Settlement configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettlementConfig {
    /// Refuse to settle balances that do not sum to exactly zero.
    #[serde(default)]
    pub strict: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "divvy=info,divvy_core=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DIVVY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
