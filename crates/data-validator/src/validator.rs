//! Field Validator for Vehicle Drafts

use crate::error::ValidationError;
use crate::report::ValidationReport;
use crate::sanitize::{required_fields_missing, sanitize, REQUIRED_FIELDS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};
use vehicle_model::{
    current_year, Condition, Drive, EngineType, Transmission, VehicleDraft, VehicleRecord,
    VehicleStatus,
};

/// Latin or Cyrillic letters, digits, whitespace, hyphens
static BRAND_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-Я0-9\s\-]+$").expect("brand pattern"));
/// Brand characters plus dots
static MODEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-Я0-9\s\-.]+$").expect("model pattern"));
/// 17 characters, no I, O, or Q
static VIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("vin pattern"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

/// Colors accepted without a warning (lowercase)
pub const KNOWN_COLORS: [&str; 14] = [
    "white", "black", "gray", "grey", "silver", "red", "blue", "green", "yellow", "brown",
    "beige", "orange", "purple", "gold",
];

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Oldest accepted model year
    pub min_year: i32,
    /// Model years accepted past the reference year
    pub years_ahead: i32,
    /// Price must be positive and at most this
    pub max_price: f64,
    /// Mileage valid range (km)
    pub mileage_range: (f64, f64),
    /// Brand length in characters after trimming
    pub brand_length: (usize, usize),
    /// Model length in characters after trimming
    pub model_length: (usize, usize),
    /// Digit count of a phone number
    pub phone_digits: (usize, usize),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year: 1900,
            years_ahead: 1,
            max_price: 100_000_000.0,
            mileage_range: (0.0, 1_000_000.0),
            brand_length: (2, 50),
            model_length: (1, 50),
            phone_digits: (10, 15),
        }
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::format(
            field,
            format!("length {} is outside {}..={}", len, min, max),
        ));
    }
    Ok(())
}

fn parse_key<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

/// Keep the value, or record the error and continue
fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

/// Validator for raw vehicle input
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
    reference_year: i32,
}

impl Validator {
    /// Create a new validator with given config, checking years against
    /// the current calendar year
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            reference_year: current_year(),
        }
    }

    /// Check model years against `reference_year` instead of the clock
    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Trimmed brand: Latin or Cyrillic letters, digits, spaces, and hyphens
    pub fn validate_brand(&self, brand: &str) -> Result<String, ValidationError> {
        let brand = brand.trim();
        if brand.is_empty() {
            return Err(ValidationError::MissingField("brand"));
        }
        check_length("brand", brand, self.config.brand_length)?;
        if !BRAND_PATTERN.is_match(brand) {
            return Err(ValidationError::format(
                "brand",
                "only letters, digits, spaces, and hyphens are allowed",
            ));
        }
        Ok(brand.to_string())
    }

    /// Trimmed model: brand characters plus dots
    pub fn validate_model(&self, model: &str) -> Result<String, ValidationError> {
        let model = model.trim();
        if model.is_empty() {
            return Err(ValidationError::MissingField("model"));
        }
        check_length("model", model, self.config.model_length)?;
        if !MODEL_PATTERN.is_match(model) {
            return Err(ValidationError::format(
                "model",
                "only letters, digits, spaces, hyphens, and dots are allowed",
            ));
        }
        Ok(model.to_string())
    }

    pub fn validate_year(&self, year: i32) -> Result<(), ValidationError> {
        let max_year = self.reference_year + self.config.years_ahead;
        if year < self.config.min_year || year > max_year {
            return Err(ValidationError::OutOfRange {
                field: "year",
                value: year as f64,
                min: self.config.min_year as f64,
                max: max_year as f64,
            });
        }
        Ok(())
    }

    /// Price must be finite, positive, and at most `max_price`
    pub fn validate_price(&self, price: f64) -> Result<(), ValidationError> {
        if !price.is_finite() || price <= 0.0 || price > self.config.max_price {
            return Err(ValidationError::OutOfRange {
                field: "price",
                value: price,
                min: 0.0,
                max: self.config.max_price,
            });
        }
        Ok(())
    }

    pub fn validate_mileage(&self, mileage: f64) -> Result<(), ValidationError> {
        let (min, max) = self.config.mileage_range;
        if !mileage.is_finite() || mileage < min || mileage > max {
            return Err(ValidationError::OutOfRange {
                field: "mileage",
                value: mileage,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Uppercased VIN; blank input means no VIN
    pub fn validate_vin(&self, vin: &str) -> Result<Option<String>, ValidationError> {
        let vin = vin.trim().to_uppercase();
        if vin.is_empty() {
            return Ok(None);
        }
        if vin.chars().count() != 17 {
            return Err(ValidationError::format("vin", "must be exactly 17 characters"));
        }
        if !VIN_PATTERN.is_match(&vin) {
            return Err(ValidationError::format(
                "vin",
                "only digits and letters other than I, O, Q are allowed",
            ));
        }
        Ok(Some(vin))
    }

    pub fn validate_engine_type(&self, engine_type: &str) -> Result<EngineType, ValidationError> {
        parse_key("engine_type", engine_type)
    }

    pub fn validate_transmission(
        &self,
        transmission: &str,
    ) -> Result<Transmission, ValidationError> {
        parse_key("transmission", transmission)
    }

    pub fn validate_drive(&self, drive: &str) -> Result<Drive, ValidationError> {
        parse_key("drive", drive)
    }

    pub fn validate_condition(&self, condition: &str) -> Result<Condition, ValidationError> {
        parse_key("condition", condition)
    }

    pub fn validate_status(&self, status: &str) -> Result<VehicleStatus, ValidationError> {
        parse_key("status", status)
    }

    /// Warning text for a color outside `KNOWN_COLORS`; never an error
    pub fn validate_color(&self, color: &str) -> Option<String> {
        let lower = color.trim().to_lowercase();
        if lower.is_empty() || KNOWN_COLORS.contains(&lower.as_str()) {
            None
        } else {
            Some(format!("unknown color {:?}", color.trim()))
        }
    }

    /// Phone number with 10-15 digits; other characters are ignored
    pub fn validate_phone(&self, phone: &str) -> Result<String, ValidationError> {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        let (min, max) = self.config.phone_digits;
        if digits < min || digits > max {
            return Err(ValidationError::format(
                "phone",
                format!("{} digits, expected {}-{}", digits, min, max),
            ));
        }
        Ok(phone.trim().to_string())
    }

    /// Simple `local@domain.tld` check
    pub fn validate_email(&self, email: &str) -> Result<String, ValidationError> {
        let email = email.trim();
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::format("email", "expected local@domain.tld"));
        }
        Ok(email.to_string())
    }

    /// Run every check and collect all errors and warnings.
    ///
    /// The draft is sanitized first; the built record is attached only when
    /// no error was found.
    pub fn validate_all(&self, draft: &VehicleDraft) -> ValidationReport {
        let draft = sanitize(draft.clone());
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for field in required_fields_missing(&draft) {
            errors.push(ValidationError::MissingField(field));
        }

        let brand = draft
            .brand
            .as_deref()
            .and_then(|b| collect(&mut errors, self.validate_brand(b)));
        let model = draft
            .model
            .as_deref()
            .and_then(|m| collect(&mut errors, self.validate_model(m)));
        if let Some(year) = draft.year {
            collect(&mut errors, self.validate_year(year));
        }
        if let Some(price) = draft.price {
            collect(&mut errors, self.validate_price(price));
        }
        if let Some(mileage) = draft.mileage {
            collect(&mut errors, self.validate_mileage(mileage));
        }

        let fields = RecordFields {
            vin: draft
                .vin
                .as_deref()
                .and_then(|v| collect(&mut errors, self.validate_vin(v)))
                .flatten(),
            engine_type: draft
                .engine_type
                .as_deref()
                .and_then(|e| collect(&mut errors, self.validate_engine_type(e))),
            transmission: draft
                .transmission
                .as_deref()
                .and_then(|t| collect(&mut errors, self.validate_transmission(t))),
            drive: draft
                .drive
                .as_deref()
                .and_then(|d| collect(&mut errors, self.validate_drive(d))),
            condition: draft
                .condition
                .as_deref()
                .and_then(|c| collect(&mut errors, self.validate_condition(c))),
            status: draft
                .status
                .as_deref()
                .and_then(|s| collect(&mut errors, self.validate_status(s))),
            phone: draft
                .phone
                .as_deref()
                .and_then(|p| collect(&mut errors, self.validate_phone(p))),
            email: draft
                .email
                .as_deref()
                .and_then(|e| collect(&mut errors, self.validate_email(e))),
        };

        if let Some(warning) = draft.color.as_deref().and_then(|c| self.validate_color(c)) {
            warnings.push(warning);
        }

        let record = match (brand, model, draft.year, draft.price) {
            (Some(brand), Some(model), Some(year), Some(price)) if errors.is_empty() => {
                Some(fields.build(brand, model, year, price, &draft))
            }
            _ => None,
        };

        debug!(
            "Validated draft: {} error(s), {} warning(s)",
            errors.len(),
            warnings.len()
        );

        ValidationReport {
            errors,
            warnings,
            record,
        }
    }

    /// Validate and build a record, failing on the first error
    pub fn validate_strict(&self, draft: &VehicleDraft) -> Result<VehicleRecord, ValidationError> {
        let report = self.validate_all(draft);
        if let Some(error) = report.errors.into_iter().next() {
            warn!("Rejected vehicle draft: {}", error);
            return Err(error);
        }
        // Required fields present and no errors means a record was built
        report
            .record
            .ok_or(ValidationError::MissingField(REQUIRED_FIELDS[0]))
    }

    pub fn is_valid(&self, draft: &VehicleDraft) -> bool {
        self.validate_all(draft).is_valid()
    }

    /// Strict batch validation; the first failing draft aborts the batch
    pub fn validate_batch_strict(
        &self,
        drafts: &[VehicleDraft],
    ) -> Result<Vec<VehicleRecord>, ValidationError> {
        drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                self.validate_strict(draft).map_err(|e| {
                    warn!("Batch validation stopped at draft {}", index);
                    e
                })
            })
            .collect()
    }

    /// One report per draft, in input order
    pub fn validate_batch_all(&self, drafts: &[VehicleDraft]) -> Vec<ValidationReport> {
        drafts.iter().map(|d| self.validate_all(d)).collect()
    }

    /// Every field problem of an already-built record, such as one read
    /// back from an export
    pub fn validate_record(&self, record: &VehicleRecord) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        collect(&mut errors, self.validate_brand(&record.brand));
        collect(&mut errors, self.validate_model(&record.model));
        collect(&mut errors, self.validate_year(record.year));
        collect(&mut errors, self.validate_price(record.price));
        collect(&mut errors, self.validate_mileage(record.mileage));
        collect(&mut errors, self.validate_vin(&record.vin));
        if let Some(phone) = &record.owner_phone {
            collect(&mut errors, self.validate_phone(phone));
        }
        if let Some(email) = &record.owner_email {
            collect(&mut errors, self.validate_email(email));
        }
        if !errors.is_empty() {
            debug!(
                "Record {} failed {} check(s)",
                record.full_name(),
                errors.len()
            );
        }
        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

/// Optional fields that passed validation
struct RecordFields {
    vin: Option<String>,
    engine_type: Option<EngineType>,
    transmission: Option<Transmission>,
    drive: Option<Drive>,
    condition: Option<Condition>,
    status: Option<VehicleStatus>,
    phone: Option<String>,
    email: Option<String>,
}

impl RecordFields {
    fn build(
        self,
        brand: String,
        model: String,
        year: i32,
        price: f64,
        draft: &VehicleDraft,
    ) -> VehicleRecord {
        let mut record = VehicleRecord::new(brand, model, year, price)
            .with_mileage(draft.mileage.unwrap_or(0.0))
            .with_engine_type(self.engine_type.unwrap_or_default())
            .with_transmission(self.transmission.unwrap_or_default())
            .with_drive(self.drive.unwrap_or_default())
            .with_condition(self.condition.unwrap_or_default())
            .with_status(self.status.unwrap_or_default());
        if let Some(vin) = self.vin {
            record = record.with_vin(vin);
        }
        if let Some(color) = &draft.color {
            record = record.with_color(color.as_str());
        }
        if let Some(description) = &draft.description {
            record = record.with_description(description.as_str());
        }
        record.owner_phone = self.phone;
        record.owner_email = self.email;
        record
    }
}
