//! Report settings

use data_validator::ValidationConfig;
use inventory_query::InventoryFilter;
use serde::{Deserialize, Serialize};
use stats_engine::StatsConfig;
use std::path::{Path, PathBuf};
use vehicle_model::current_year;

/// Settings file looked up in the working directory (any format the
/// `config` crate understands, e.g. `dealer-report.toml`)
pub const DEFAULT_SETTINGS_FILE: &str = "dealer-report";

/// Prefix of environment overrides (`DEALER_SEED`, `DEALER_STATS__PRICE_BINS`)
pub const ENV_PREFIX: &str = "DEALER";

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Maximum log level (`trace` .. `error`)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Seed of the demo inventory
    pub seed: u64,
    /// Size of the demo inventory
    pub sample_count: usize,
    /// JSON inventory to read instead of generating demo data
    pub input: Option<PathBuf>,
    /// Year vehicles are aged against; the current year when unset
    pub reference_year: Option<i32>,
    pub format: OutputFormat,
    /// Include top brands, status shares, and depreciation in text output
    pub detailed: bool,
    pub stats: StatsConfig,
    /// Applied before any statistics are computed
    pub filter: InventoryFilter,
    /// Checks applied to records read from `input`
    pub validation: ValidationConfig,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            seed: 42,
            sample_count: 50,
            input: None,
            reference_year: None,
            format: OutputFormat::Text,
            detailed: true,
            stats: StatsConfig::default(),
            filter: InventoryFilter::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl ReportSettings {
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(current_year)
    }
}

/// Load settings from `file` (or the optional default file), then the
/// environment, over built-in defaults
pub fn load_settings(file: Option<&Path>) -> Result<ReportSettings, config::ConfigError> {
    let file_source = match file {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_SETTINGS_FILE).required(false),
    };

    config::Config::builder()
        .add_source(file_source)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<ReportSettings>()
}
