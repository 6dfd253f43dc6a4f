//! Demo Inventory Generation
//!
//! Reproducible sample inventories for demos, benchmarks, and tests. All
//! randomness comes from a caller-seeded `StdRng`; the same seed and
//! reference year always produce the same vehicles.

mod catalog;
mod generator;
mod vin;

pub use catalog::{BRANDS, COLORS};
pub use generator::SampleGenerator;
pub use vin::{generate_vin, VIN_ALPHABET};
