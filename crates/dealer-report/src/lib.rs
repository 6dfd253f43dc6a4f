//! Dealer Report
//!
//! Reporting pipeline over the inventory crates. The inventory is read from
//! a JSON file or generated from a seed, filtered, and rendered as a text
//! summary or a JSON statistics export.

pub mod pipeline;
pub mod settings;

pub use pipeline::{build_report, load_inventory, run};
pub use settings::{load_settings, OutputFormat, ReportSettings};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber, logging to stderr
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let level: Level = level
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown log level: {}", level))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
