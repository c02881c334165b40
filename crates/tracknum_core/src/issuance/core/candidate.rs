//! Tracking number candidate construction.
//!
//! A candidate is built from four fixed-width parts:
//!
//! ```text
//! {origin:2}{destination:2}{weight_units:4}{entropy:8}
//! ```
//!
//! two uppercased country-code characters each, four decimal digits encoding
//! the weight, and eight uppercase hex characters drawn from a fresh random
//! 128-bit identifier. The concatenation is exactly
//! [`TRACKING_NUMBER_MAX_LEN`] characters; the final truncation is a
//! defensive cap only. Given validated inputs the result always matches
//! `^[A-Z0-9]{1,16}$` — uniqueness is the issuer's problem, not this
//! module's.

use uuid::Uuid;

/// Hard cap on tracking number length.
pub const TRACKING_NUMBER_MAX_LEN: usize = 16;

/// Width of the weight field in the candidate, in decimal digits.
const WEIGHT_FIELD_WIDTH: usize = 4;

/// Weight units wrap at this modulus to stay within [`WEIGHT_FIELD_WIDTH`]
/// digits. Weights of 10 kg and over therefore keep only the low four
/// digits of their milli-unit value; the historical format fixes the field
/// width and this behavior is preserved as-is.
const WEIGHT_UNIT_MODULUS: u64 = 10_000;

/// Number of hex characters taken from the random identifier.
const ENTROPY_SUFFIX_LEN: usize = 8;

/// Encodes a weight in kilograms as its 4-digit unit field.
///
/// `round(weight * 1000)`, wrapped at [`WEIGHT_UNIT_MODULUS`].
pub fn weight_units(weight: f64) -> u64 {
    ((weight * 1000.0).round() as u64) % WEIGHT_UNIT_MODULUS
}

/// Builds a fresh candidate tracking number.
///
/// Each call draws new randomness; calling twice with identical shipment
/// parameters yields different candidates.
pub fn generate(origin_country_id: &str, destination_country_id: &str, weight: f64) -> String {
    let entropy = Uuid::new_v4().simple().to_string();
    let mut candidate = format!(
        "{}{}{:0width$}{}",
        country_prefix(origin_country_id),
        country_prefix(destination_country_id),
        weight_units(weight),
        entropy[..ENTROPY_SUFFIX_LEN].to_ascii_uppercase(),
        width = WEIGHT_FIELD_WIDTH,
    );
    candidate.truncate(TRACKING_NUMBER_MAX_LEN);
    candidate
}

/// First two characters of a country code, uppercased.
///
/// Validated input is always exactly two ASCII letters; the truncation
/// covers the raw-input path only.
fn country_prefix(country_id: &str) -> String {
    country_id.chars().take(2).collect::<String>().to_ascii_uppercase()
}

/// Whether a string satisfies the tracking number format `^[A-Z0-9]{1,16}$`.
pub fn is_well_formed(tracking_number: &str) -> bool {
    !tracking_number.is_empty()
        && tracking_number.len() <= TRACKING_NUMBER_MAX_LEN
        && tracking_number.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
