//! Load, filter, and report

use crate::settings::{OutputFormat, ReportSettings};
use anyhow::{Context, Result};
use data_validator::Validator;
use price_engine::{format_amount, PriceCalculator};
use sample_data::SampleGenerator;
use stats_engine::{render_summary_report, StatisticsEngine};
use std::fmt::Write;
use tracing::{info, warn};
use vehicle_model::VehicleRecord;

/// Read the configured input file, or generate the demo inventory
///
/// Stored records that fail validation are logged and left out.
pub fn load_inventory(settings: &ReportSettings) -> Result<Vec<VehicleRecord>> {
    match &settings.input {
        Some(path) => {
            let validator = Validator::new(settings.validation.clone())
                .with_reference_year(settings.reference_year());
            let outcome = storage::import_json_checked(path, &validator)
                .with_context(|| format!("Failed to read inventory from {}", path.display()))?;
            if !outcome.rejected.is_empty() {
                warn!(
                    "Skipped {} invalid vehicles in {}",
                    outcome.rejected.len(),
                    path.display()
                );
            }
            info!(
                "Loaded {} vehicles from {}",
                outcome.accepted.len(),
                path.display()
            );
            Ok(outcome.accepted)
        }
        None => {
            let records = SampleGenerator::with_reference_year(
                settings.seed,
                settings.reference_year(),
            )
            .realistic(settings.sample_count);
            info!(
                "Generated {} demo vehicles (seed {})",
                records.len(),
                settings.seed
            );
            Ok(records)
        }
    }
}

/// First available vehicle the calculator accepts
fn first_priceable(
    records: &[VehicleRecord],
    reference_year: i32,
) -> Option<(&VehicleRecord, PriceCalculator)> {
    records
        .iter()
        .filter(|record| record.is_available())
        .find_map(|record| match PriceCalculator::for_record(record, reference_year) {
            Ok(calculator) => Some((record, calculator)),
            Err(e) => {
                warn!("Cannot price {}: {}", record.full_name(), e);
                None
            }
        })
}

fn append_pricing(
    out: &mut String,
    record: &VehicleRecord,
    calculator: &PriceCalculator,
) -> std::fmt::Result {
    let estimate = calculator.estimate();
    let recommendation = calculator.recommendation();

    writeln!(out)?;
    writeln!(out, "Pricing: {}", record.full_name())?;
    writeln!(out, "  Listed:          {}", format_amount(estimate.base_price))?;
    writeln!(out, "  Market:          {}", format_amount(estimate.market_price))?;
    writeln!(
        out,
        "  Range:           {} - {}",
        format_amount(estimate.min_price),
        format_amount(estimate.max_price)
    )?;
    writeln!(
        out,
        "  Recommendation:  {} ({})",
        recommendation.action.label(),
        recommendation.reason
    )
}

/// Filter `records` and render the report in the configured format
pub fn build_report(settings: &ReportSettings, records: &[VehicleRecord]) -> Result<String> {
    let reference_year = settings.reference_year();
    let selected = settings
        .filter
        .apply_at(records, reference_year)
        .context("Invalid inventory filter")?;
    if selected.len() < records.len() {
        info!("Filter kept {} of {} vehicles", selected.len(), records.len());
    }

    let engine = StatisticsEngine::with_reference_year(&selected, reference_year)
        .context("No vehicles to report on")?
        .with_config(settings.stats.clone());

    match settings.format {
        OutputFormat::Json => {
            let export = engine.export()?;
            Ok(serde_json::to_string_pretty(&export)?)
        }
        OutputFormat::Text => {
            let mut out = render_summary_report(&engine, settings.detailed);
            match first_priceable(&selected, reference_year) {
                Some((record, calculator)) => append_pricing(&mut out, record, &calculator)?,
                None => warn!("No available vehicle to price"),
            }
            Ok(out)
        }
    }
}

/// Full pipeline: load the inventory and build its report
pub fn run(settings: &ReportSettings) -> Result<String> {
    let records = load_inventory(settings)?;
    build_report(settings, &records)
}
