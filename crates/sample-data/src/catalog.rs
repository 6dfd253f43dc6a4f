//! Static catalog of brands, models, and colors

/// Every brand the uniform generator draws from
pub const BRANDS: [&str; 38] = [
    "Toyota", "Honda", "Nissan", "Mazda", "Mitsubishi", "Subaru", "Suzuki", "BMW",
    "Mercedes-Benz", "Audi", "Volkswagen", "Porsche", "Opel", "Ford", "Chevrolet", "Cadillac",
    "Jeep", "Dodge", "Hyundai", "Kia", "Daewoo", "SsangYong", "Volvo", "Saab", "Scania", "Fiat",
    "Alfa Romeo", "Lamborghini", "Ferrari", "Maserati", "Renault", "Peugeot", "Citroen",
    "Bugatti", "Lada", "GAZ", "UAZ", "ZAZ",
];

/// Relative market share used by the realistic generator
pub(crate) const BRAND_WEIGHTS: [(&str, u32); 15] = [
    ("Toyota", 15),
    ("Honda", 12),
    ("Nissan", 10),
    ("Mazda", 8),
    ("BMW", 10),
    ("Mercedes-Benz", 8),
    ("Audi", 7),
    ("Volkswagen", 10),
    ("Ford", 8),
    ("Hyundai", 12),
    ("Kia", 10),
    ("Lada", 15),
    ("Renault", 8),
    ("Mitsubishi", 5),
    ("Subaru", 3),
];

const MODELS: [(&str, &[&str]); 12] = [
    ("Toyota", &["Camry", "Corolla", "RAV4", "Land Cruiser", "Prius", "Yaris", "Highlander", "C-HR"]),
    ("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Fit", "HR-V", "Odyssey"]),
    ("BMW", &["X5", "X3", "X1", "3 Series", "5 Series", "7 Series", "M3", "M5"]),
    ("Mercedes-Benz", &["E-Class", "C-Class", "S-Class", "GLC", "GLE", "G-Class", "A-Class"]),
    ("Audi", &["A4", "A6", "A8", "Q5", "Q7", "TT", "R8"]),
    ("Volkswagen", &["Golf", "Passat", "Tiguan", "Polo", "Jetta", "Touareg"]),
    ("Ford", &["Focus", "Fusion", "Mustang", "Explorer", "F-150", "Kuga"]),
    ("Hyundai", &["Solaris", "Creta", "Tucson", "Santa Fe", "Elantra", "Sonata"]),
    ("Kia", &["Rio", "Sportage", "Sorento", "Optima", "Ceed", "Stinger"]),
    ("Lada", &["Granta", "Vesta", "Largus", "Niva", "X-Ray", "Kalina"]),
    ("Renault", &["Logan", "Sandero", "Duster", "Kaptur", "Megane", "Arkana"]),
    ("Nissan", &["Qashqai", "X-Trail", "Juke", "Almera", "Terrano", "Patrol"]),
];

/// Models built for off-road use; they favour all-wheel drive
pub(crate) const OFF_ROAD_MODELS: [&str; 7] = [
    "Land Cruiser",
    "G-Class",
    "Niva",
    "Patrol",
    "Touareg",
    "Explorer",
    "Pilot",
];

pub const COLORS: [&str; 15] = [
    "White", "Black", "Gray", "Silver", "Red", "Blue", "Light Blue", "Green", "Yellow", "Orange",
    "Brown", "Beige", "Purple", "Gold", "Burgundy",
];

/// Known models of `brand`, if the catalog has any
pub(crate) fn models_of(brand: &str) -> Option<&'static [&'static str]> {
    MODELS
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, models)| *models)
}

/// Price tier of a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    Luxury,
    Premium,
    Budget,
    Mass,
}

impl Tier {
    pub(crate) fn of(brand: &str) -> Self {
        match brand {
            "Ferrari" | "Lamborghini" | "Maserati" | "Bugatti" => Tier::Luxury,
            "BMW" | "Mercedes-Benz" | "Audi" | "Porsche" | "Lexus" | "Infiniti" => Tier::Premium,
            "Lada" | "Daewoo" | "ZAZ" | "Datsun" => Tier::Budget,
            _ => Tier::Mass,
        }
    }

    /// Inclusive base price range for a new vehicle
    pub(crate) fn base_price_range(&self) -> (u32, u32) {
        match self {
            Tier::Luxury => (5_000_000, 20_000_000),
            Tier::Premium => (2_000_000, 8_000_000),
            Tier::Budget => (300_000, 1_500_000),
            Tier::Mass => (500_000, 3_000_000),
        }
    }
}

/// Two-character manufacturer prefix used in generated VINs
pub(crate) fn wmi(brand: &str) -> &'static str {
    match brand {
        "Toyota" => "JT",
        "Honda" => "JH",
        "Nissan" => "JN",
        "Mazda" => "JM",
        "BMW" => "WB",
        "Mercedes-Benz" => "WD",
        "Audi" => "WA",
        "Volkswagen" => "WV",
        "Ford" => "1F",
        "Chevrolet" => "1G",
        "Hyundai" => "KM",
        "Kia" => "KN",
        "Lada" => "X7",
        "Renault" | "Peugeot" => "VF",
        _ => "XX",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_brands_are_catalogued() {
        for (brand, _) in BRAND_WEIGHTS {
            assert!(BRANDS.contains(&brand), "{} missing", brand);
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Tier::of("Ferrari"), Tier::Luxury);
        assert_eq!(Tier::of("Audi"), Tier::Premium);
        assert_eq!(Tier::of("Lada"), Tier::Budget);
        assert_eq!(Tier::of("Kia"), Tier::Mass);
        assert!(models_of("Toyota").is_some());
        assert!(models_of("Subaru").is_none());
    }
}
