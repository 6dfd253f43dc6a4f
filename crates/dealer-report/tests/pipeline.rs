use dealer_report::{build_report, load_inventory, load_settings, run, OutputFormat, ReportSettings};
use inventory_query::InventoryFilter;
use std::fs;
use vehicle_model::{VehicleRecord, VehicleStatus};

fn demo_settings() -> ReportSettings {
    ReportSettings {
        seed: 7,
        sample_count: 30,
        reference_year: Some(2024),
        ..ReportSettings::default()
    }
}

fn lot() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord::new("Toyota", "Camry", 2020, 1_500_000.0)
            .with_mileage(60_000.0)
            .with_status(VehicleStatus::Sold),
        VehicleRecord::new("Toyota", "Corolla", 2021, 1_200_000.0).with_mileage(30_000.0),
        VehicleRecord::new("Kia", "Rio", 2019, 800_000.0).with_mileage(90_000.0),
    ]
}

#[test]
fn test_demo_inventory_is_reproducible() {
    let settings = demo_settings();
    let a = load_inventory(&settings).unwrap();
    let b = load_inventory(&settings).unwrap();
    assert_eq!(a.len(), 30);
    assert_eq!(a, b);
}

#[test]
fn test_text_report_from_demo_inventory() {
    let report = run(&demo_settings()).unwrap();
    assert!(report.contains("INVENTORY STATISTICS REPORT"));
    assert!(report.contains("Total vehicles:  30"));
    assert!(report.contains("Top brands"));
}

#[test]
fn test_json_report_parses() {
    let settings = ReportSettings {
        format: OutputFormat::Json,
        ..demo_settings()
    };
    let report = run(&settings).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["summary"]["overview"]["total_vehicles"], 30);
    assert_eq!(value["price_distribution"].as_array().unwrap().len(), 10);
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_filter_and_pricing_section() {
    let settings = ReportSettings {
        reference_year: Some(2024),
        filter: InventoryFilter::new().brand("toyota"),
        ..ReportSettings::default()
    };
    let report = build_report(&settings, &lot()).unwrap();
    assert!(report.contains("Total vehicles:  2"));
    // the sold Camry is skipped
    assert!(report.contains("Pricing: Toyota Corolla (2021)"));
    assert!(report.contains("Listed:          1,200,000"));
}

#[test]
fn test_empty_selection_and_bad_filter_fail() {
    let nothing = ReportSettings {
        reference_year: Some(2024),
        filter: InventoryFilter::new().brand("Ferrari"),
        ..ReportSettings::default()
    };
    assert!(build_report(&nothing, &lot()).is_err());

    let inverted = ReportSettings {
        reference_year: Some(2024),
        filter: InventoryFilter::new().price_between(Some(2_000_000.0), Some(1_000_000.0)),
        ..ReportSettings::default()
    };
    assert!(build_report(&inverted, &lot()).is_err());
}

#[test]
fn test_inventory_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let records = lot();
    storage::export_json(&records, &path).unwrap();

    let settings = ReportSettings {
        input: Some(path),
        reference_year: Some(2024),
        ..ReportSettings::default()
    };
    assert_eq!(load_inventory(&settings).unwrap(), records);
    assert!(run(&settings).unwrap().contains("Total vehicles:  3"));

    let missing = ReportSettings {
        input: Some(dir.path().join("absent.json")),
        ..settings
    };
    assert!(run(&missing).is_err());
}

#[test]
fn test_invalid_stored_records_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let records = vec![
        VehicleRecord::new("Toyota", "Camry", 2020, 0.0),
        VehicleRecord::new("Kia", "Rio", 2019, 800_000.0).with_mileage(90_000.0),
    ];
    storage::export_json(&records, &path).unwrap();

    let settings = ReportSettings {
        input: Some(path),
        reference_year: Some(2024),
        ..ReportSettings::default()
    };
    assert_eq!(load_inventory(&settings).unwrap(), &records[1..]);
    let report = run(&settings).unwrap();
    assert!(report.contains("Total vehicles:  1"));
    assert!(report.contains("Pricing: Kia Rio (2019)"));
}

#[test]
fn test_pricing_passes_over_unpriceable_vehicles() {
    let settings = ReportSettings {
        reference_year: Some(2024),
        ..ReportSettings::default()
    };
    let records = vec![
        VehicleRecord::new("Toyota", "Camry", 2020, 0.0),
        VehicleRecord::new("Kia", "Rio", 2019, 800_000.0).with_mileage(90_000.0),
    ];
    let report = build_report(&settings, &records).unwrap();
    assert!(report.contains("Total vehicles:  2"));
    assert!(report.contains("Pricing: Kia Rio (2019)"));
    assert!(!report.contains("Pricing: Toyota Camry"));
}

#[test]
fn test_settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.toml");
    fs::write(
        &path,
        r#"
seed = 9
sample_count = 12
reference_year = 2024
format = "json"
detailed = false

[stats]
price_bins = 4

[filter]
brands = ["Toyota", "Kia"]
max_price = 2000000.0
"#,
    )
    .unwrap();

    let settings = load_settings(Some(path.as_path())).unwrap();
    assert_eq!(settings.seed, 9);
    assert_eq!(settings.sample_count, 12);
    assert_eq!(settings.reference_year(), 2024);
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(!settings.detailed);
    assert_eq!(settings.stats.price_bins, 4);
    assert_eq!(settings.stats.top_brands, 5);
    assert_eq!(settings.filter.brands, vec!["Toyota", "Kia"]);
    assert_eq!(settings.filter.max_price, Some(2_000_000.0));
    assert_eq!(settings.log_level, "info");
    assert!(settings.input.is_none());
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_settings(Some(dir.path().join("absent.toml").as_path())).is_err());
}
