//! Dealer Report
//!
//! Usage: `dealer-report [SETTINGS_FILE]`

use anyhow::{Context, Result};
use dealer_report::{init_logging, load_settings, run};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let settings_file = std::env::args().nth(1).map(PathBuf::from);
    let settings =
        load_settings(settings_file.as_deref()).context("Failed to load settings")?;

    init_logging(&settings.log_level, settings.log_json)?;
    info!("Dealer report v{}", env!("CARGO_PKG_VERSION"));

    let report = run(&settings)?;
    println!("{}", report);
    Ok(())
}
