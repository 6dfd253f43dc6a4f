//! Synthetic VIN generation

use crate::catalog::wmi;
use rand::Rng;

/// Characters allowed in a VIN (no I, O, Q)
pub const VIN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

const YEAR_CODES: &[u8] = b"ABCDEFGHJKLMNPRSTVWXY123456789";

/// 17-character VIN: manufacturer prefix, seven digits, model-year code,
/// plant letter, and a six-digit serial derived from `index`.
pub fn generate_vin<R: Rng>(rng: &mut R, brand: &str, year: i32, index: usize) -> String {
    let descriptor: u32 = rng.gen_range(1_000_000..=9_999_999);
    let year_code = YEAR_CODES[(year - 1980).rem_euclid(YEAR_CODES.len() as i32) as usize] as char;
    // letters only: the first 23 alphabet entries
    let plant = VIN_ALPHABET[rng.gen_range(0..23)] as char;
    format!(
        "{}{}{}{}{:06}",
        wmi(brand),
        descriptor,
        year_code,
        plant,
        index % 1_000_000
    )
}

/// 17 characters drawn uniformly from `VIN_ALPHABET`
pub(crate) fn random_vin<R: Rng>(rng: &mut R) -> String {
    (0..17)
        .map(|_| VIN_ALPHABET[rng.gen_range(0..VIN_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_valid(vin: &str) -> bool {
        vin.len() == 17 && vin.bytes().all(|b| VIN_ALPHABET.contains(&b))
    }

    #[test]
    fn test_generated_vins_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for (i, brand) in ["Toyota", "Unknown", "Lada"].iter().enumerate() {
            let vin = generate_vin(&mut rng, brand, 2015 + i as i32, i);
            assert!(is_valid(&vin), "{}", vin);
        }
        assert!(generate_vin(&mut rng, "BMW", 2020, 42).starts_with("WB"));
        assert!(generate_vin(&mut rng, "BMW", 2020, 42).ends_with("000042"));
        assert!(is_valid(&random_vin(&mut rng)));
    }
}
