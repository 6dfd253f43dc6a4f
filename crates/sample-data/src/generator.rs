//! Seeded inventory generator

use crate::catalog::{models_of, Tier, BRANDS, BRAND_WEIGHTS, COLORS, OFF_ROAD_MODELS};
use crate::vin::{generate_vin, random_vin};
use chrono::{DateTime, Duration, TimeZone, Utc};
use price_engine::round_to_thousand;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;
use vehicle_model::{
    current_year, Condition, Drive, EngineType, Transmission, VehicleRecord, VehicleStatus,
};

/// Oldest model year of the realistic generator
const REALISTIC_MIN_YEAR: i32 = 2000;
/// Oldest model year of the uniform generator
const RANDOM_MIN_YEAR: i32 = 1990;
/// Listing dates fall within this many days after January 1st
const LISTING_WINDOW_DAYS: i64 = 180;

/// Pick from `(item, weight)` pairs proportionally to weight; the default
/// value when nothing carries weight
fn weighted<T: Copy + Default, R: Rng>(rng: &mut R, items: &[(T, u32)]) -> T {
    items
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(item, _)| *item)
        .unwrap_or_default()
}

fn pick<T: Copy + Default, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items.choose(rng).copied().unwrap_or_default()
}

/// Demo inventory generator over a seeded `StdRng`
pub struct SampleGenerator {
    rng: StdRng,
    reference_year: i32,
    next_index: usize,
}

impl SampleGenerator {
    /// Generator aged against the current calendar year
    pub fn new(seed: u64) -> Self {
        Self::with_reference_year(seed, current_year())
    }

    pub fn with_reference_year(seed: u64, reference_year: i32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reference_year,
            next_index: 0,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    fn listing_date(&mut self) -> DateTime<Utc> {
        let start = Utc
            .with_ymd_and_hms(self.reference_year, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_default();
        start + Duration::days(self.rng.gen_range(0..LISTING_WINDOW_DAYS))
    }

    fn take_index(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Vehicles with market-like brand shares, prices, and mileage
    pub fn realistic(&mut self, count: usize) -> Vec<VehicleRecord> {
        let vehicles: Vec<VehicleRecord> = (0..count).map(|_| self.realistic_vehicle()).collect();
        debug!("Generated {} realistic vehicles", vehicles.len());
        vehicles
    }

    /// Vehicles with every attribute drawn uniformly
    pub fn random(&mut self, count: usize) -> Vec<VehicleRecord> {
        let vehicles: Vec<VehicleRecord> = (0..count).map(|_| self.random_vehicle()).collect();
        debug!("Generated {} random vehicles", vehicles.len());
        vehicles
    }

    fn realistic_year(&mut self) -> i32 {
        // the ten newest years weigh 10, 9, ..., 1; older years weigh 1
        let years: Vec<(i32, u32)> = (REALISTIC_MIN_YEAR..=self.reference_year.max(REALISTIC_MIN_YEAR))
            .map(|year| {
                let age = self.reference_year - year;
                (year, if age < 10 { (10 - age) as u32 } else { 1 })
            })
            .collect();
        weighted(&mut self.rng, &years)
    }

    fn realistic_mileage(&mut self, age: i32) -> f64 {
        let (low, high) = match age {
            i32::MIN..=1 => (0, 15_000),
            2..=3 => (10_000, 60_000),
            4..=5 => (40_000, 100_000),
            6..=10 => (80_000, 180_000),
            _ => (150_000, 300_000),
        };
        self.rng.gen_range(low..=high) as f64
    }

    fn realistic_vehicle(&mut self) -> VehicleRecord {
        let index = self.take_index();
        let rng = &mut self.rng;

        let brand = weighted(rng, &BRAND_WEIGHTS);
        let model = match models_of(brand) {
            Some(models) => pick(rng, models).to_string(),
            None => format!("Model-{}", rng.gen_range(1..=10)),
        };

        let year = self.realistic_year();
        let age = self.reference_year - year;
        let rng = &mut self.rng;

        let (low, high) = Tier::of(brand).base_price_range();
        let base_price = rng.gen_range(low..=high) as f64;
        let age_factor = (1.0 - age as f64 * 0.03).max(0.5);
        let price = round_to_thousand(base_price * age_factor);

        let mileage = self.realistic_mileage(age);
        let rng = &mut self.rng;
        let vin = generate_vin(rng, brand, year, index);
        let color = pick(rng, &COLORS);

        let engine_type = if model == "Prius" {
            EngineType::Hybrid
        } else if year > 2015 && rng.gen::<f64>() > 0.7 {
            pick(rng, &[EngineType::Petrol, EngineType::Diesel, EngineType::Hybrid])
        } else {
            pick(rng, &[EngineType::Petrol, EngineType::Diesel])
        };

        let transmission = if year > 2010 {
            weighted(
                rng,
                &[
                    (Transmission::Automatic, 60),
                    (Transmission::Manual, 20),
                    (Transmission::Robotic, 10),
                    (Transmission::Cvt, 10),
                ],
            )
        } else {
            weighted(rng, &[(Transmission::Manual, 40), (Transmission::Automatic, 60)])
        };

        let drive = if OFF_ROAD_MODELS.contains(&model.as_str()) {
            weighted(rng, &[(Drive::All, 80), (Drive::Front, 20)])
        } else {
            weighted(rng, &[(Drive::Front, 60), (Drive::Rear, 20), (Drive::All, 20)])
        };

        let condition = if age <= 3 && mileage < 50_000.0 {
            weighted(rng, &[(Condition::Excellent, 60), (Condition::Good, 40)])
        } else if age <= 7 && mileage < 120_000.0 {
            weighted(rng, &[(Condition::Good, 70), (Condition::Average, 30)])
        } else if age <= 12 {
            weighted(rng, &[(Condition::Average, 60), (Condition::Poor, 40)])
        } else {
            weighted(rng, &[(Condition::Poor, 70), (Condition::Damaged, 30)])
        };

        let status = if price > 3_000_000.0 {
            weighted(
                rng,
                &[
                    (VehicleStatus::Available, 30),
                    (VehicleStatus::Reserved, 40),
                    (VehicleStatus::Sold, 30),
                ],
            )
        } else if price < 500_000.0 {
            weighted(rng, &[(VehicleStatus::Available, 20), (VehicleStatus::Sold, 80)])
        } else {
            weighted(
                rng,
                &[
                    (VehicleStatus::Available, 50),
                    (VehicleStatus::Sold, 30),
                    (VehicleStatus::Reserved, 20),
                ],
            )
        };

        let created_at = self.listing_date();

        VehicleRecord::new(brand, model, year, price)
            .with_vin(vin)
            .with_mileage(mileage)
            .with_color(color)
            .with_engine_type(engine_type)
            .with_transmission(transmission)
            .with_drive(drive)
            .with_condition(condition)
            .with_status(status)
            .with_created_at(created_at)
    }

    fn random_vehicle(&mut self) -> VehicleRecord {
        let reference_year = self.reference_year.max(RANDOM_MIN_YEAR);
        let rng = &mut self.rng;

        let brand = pick(rng, &BRANDS);
        let model = format!("Model-{}", rng.gen_range(1..=999));
        let year = rng.gen_range(RANDOM_MIN_YEAR..=reference_year);
        let price = rng.gen_range(100_000..=5_000_000) as f64;
        let mileage = rng.gen_range(0..=300_000) as f64;
        let vin = random_vin(rng);
        let color = pick(rng, &COLORS);
        let engine_type = pick(rng, &EngineType::ALL);
        let transmission = pick(rng, &Transmission::ALL);
        let drive = pick(rng, &Drive::ALL);
        let condition = pick(rng, &Condition::ALL);
        let status = pick(
            rng,
            &[
                VehicleStatus::Available,
                VehicleStatus::Sold,
                VehicleStatus::Reserved,
                VehicleStatus::InTransit,
            ],
        );
        self.take_index();
        let created_at = self.listing_date();

        VehicleRecord::new(brand, model, year, price)
            .with_vin(vin)
            .with_mileage(mileage)
            .with_color(color)
            .with_engine_type(engine_type)
            .with_transmission(transmission)
            .with_drive(drive)
            .with_condition(condition)
            .with_status(status)
            .with_created_at(created_at)
    }
}
