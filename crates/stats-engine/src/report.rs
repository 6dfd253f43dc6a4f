//! Plain-text summary report

use crate::engine::StatisticsEngine;
use price_engine::format_amount;
use std::fmt;

const RULE_WIDTH: usize = 60;

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

/// Inventory summary rendered through `Display`.
///
/// The short form carries the overview and price analysis; `detailed` adds
/// top brands, status shares, and the depreciation analysis.
pub struct SummaryText<'e, 'a> {
    engine: &'e StatisticsEngine<'a>,
    detailed: bool,
}

impl<'e, 'a> SummaryText<'e, 'a> {
    pub fn new(engine: &'e StatisticsEngine<'a>, detailed: bool) -> Self {
        Self { engine, detailed }
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>, total: usize) -> fmt::Result {
        let engine = self.engine;
        let brands = engine.top_brands(engine.config().top_brands);
        if !brands.is_empty() {
            section(f, "Top brands")?;
            for (rank, brand) in brands.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {:<16} {:>4} vehicles, avg {}",
                    rank + 1,
                    brand.brand,
                    brand.count,
                    format_amount(brand.avg_price)
                )?;
            }
        }

        section(f, "Status")?;
        for bucket in engine.status_distribution().buckets() {
            let share = bucket.count as f64 / total as f64 * 100.0;
            writeln!(f, "  {:<16} {:>4} ({:.1}%)", bucket.label, bucket.count, share)?;
        }

        if let Some(depreciation) = engine.depreciation_analysis() {
            section(f, "Depreciation")?;
            writeln!(
                f,
                "  Model years:     {}-{}",
                depreciation.first_year, depreciation.last_year
            )?;
            writeln!(
                f,
                "  Annual average:  {:.1}%",
                depreciation.avg_annual_depreciation
            )?;
            writeln!(f, "  Total:           {:.1}%", depreciation.total_depreciation)?;
        }
        Ok(())
    }
}

impl fmt::Display for SummaryText<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.engine.summary();
        let overview = &summary.overview;

        heading(f, "INVENTORY STATISTICS REPORT")?;

        section(f, "Overview")?;
        writeln!(f, "  Total vehicles:  {}", overview.total_vehicles)?;
        writeln!(
            f,
            "  Available:       {} ({:.1}%)",
            overview.available, overview.available_percent
        )?;
        writeln!(f, "  Sold:            {}", overview.sold)?;
        writeln!(f, "  Brands:          {}", overview.unique_brands)?;
        writeln!(f, "  Total value:     {}", format_amount(overview.total_value))?;

        if let Some(prices) = &summary.prices {
            section(f, "Prices")?;
            writeln!(f, "  Average:         {}", format_amount(prices.mean))?;
            writeln!(f, "  Median:          {}", format_amount(prices.median))?;
            writeln!(f, "  Minimum:         {}", format_amount(prices.min))?;
            writeln!(f, "  Maximum:         {}", format_amount(prices.max))?;
            writeln!(f, "  Std deviation:   {}", format_amount(prices.std_dev))?;
        }

        if let Some(age) = &summary.age {
            writeln!(f, "  Average age:     {:.1} years", age.mean)?;
        }
        if let Some(mileage) = &summary.mileage {
            writeln!(f, "  Average mileage: {} km", format_amount(mileage.mean))?;
        }

        if self.detailed {
            self.write_details(f, overview.total_vehicles)?;
        }

        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Render the inventory summary as text
pub fn render_summary_report(engine: &StatisticsEngine<'_>, detailed: bool) -> String {
    SummaryText::new(engine, detailed).to_string()
}
