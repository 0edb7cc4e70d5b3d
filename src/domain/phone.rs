//! City-aware phone validation
//!
//! The studio takes leads from Indian metros and Dubai. Indian numbers have
//! a strict shape (10 digits, 6-9 lead) and attract well-known junk fills;
//! everything else gets the permissive international rules. Dispatch is by
//! city membership, never by digit count: the same digits can be a valid
//! international number in one locale and nonsense in another.

use serde::Serialize;

const ERR_REQUIRED: &str = "Phone number is required.";
const ERR_INDIA_LENGTH: &str = "Enter a valid 10-digit mobile number.";
const ERR_INDIA_PREFIX: &str = "Enter a valid Indian mobile number (starts with 6\u{2013}9).";
const ERR_INDIA_JUNK: &str = "Please enter a real phone number.";
const ERR_GENERIC: &str = "Enter a valid phone number (8\u{2013}15 digits).";

/// Cities whose numbers are validated with the India mobile rules.
const INDIA_CITIES: &[&str] = &["hyderabad", "delhi", "mumbai", "bengaluru", "goa"];

const GENERIC_MIN_DIGITS: usize = 8;
const GENERIC_MAX_DIGITS: usize = 15;

/// Outcome of validating a phone field. The normalized digit string is
/// returned even on failure so the form can redisplay it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub normalized_digits: String,
}

fn is_india_city(city: Option<&str>) -> bool {
    city.map(|c| INDIA_CITIES.contains(&c.trim().to_lowercase().as_str())).unwrap_or(false)
}

/// Strip everything but digits; for Indian cities also drop a leading `91`
/// country code (when more than 10 digits remain) and any leading zeros.
pub fn normalize(raw: &str, city: Option<&str>) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if is_india_city(city) {
        if digits.len() > 10 && digits.starts_with("91") {
            digits.drain(..2);
        }
        let zeros = digits.chars().take_while(|c| *c == '0').count();
        digits.drain(..zeros);
    }

    digits
}

fn is_all_identical(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

fn is_all_zeros(digits: &str) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c == '0')
}

fn digit_values(digits: &str) -> Vec<u8> {
    digits.chars().filter_map(|c| c.to_digit(10)).map(|d| d as u8).collect()
}

/// Strictly ascending with wrap-around arithmetic mod 10 (0123456789,
/// 8901234567). Short strings are left alone.
fn is_ascending_sequence(digits: &str) -> bool {
    if digits.len() < GENERIC_MIN_DIGITS {
        return false;
    }
    digit_values(digits).windows(2).all(|pair| pair[1] == (pair[0] + 1) % 10)
}

/// Strictly descending mod 10 (9876543210, 1098765432).
fn is_descending_sequence(digits: &str) -> bool {
    if digits.len() < GENERIC_MIN_DIGITS {
        return false;
    }
    digit_values(digits).windows(2).all(|pair| pair[0] == (pair[1] + 1) % 10)
}

/// A 2-digit pair repeated across the whole string, tolerating one trailing
/// digit on odd lengths (1212121212, 909090909).
fn is_repeated_pair(digits: &str) -> bool {
    if digits.len() < 6 {
        return false;
    }
    let chars: Vec<char> = digits.chars().collect();
    let pair = [chars[0], chars[1]];
    chars.iter().enumerate().all(|(i, c)| *c == pair[i % 2])
}

fn validate_india(digits: &str) -> Result<(), &'static str> {
    if digits.len() != 10 {
        return Err(ERR_INDIA_LENGTH);
    }

    if !matches!(digits.as_bytes()[0], b'6'..=b'9') {
        return Err(ERR_INDIA_PREFIX);
    }

    if is_all_identical(digits)
        || is_all_zeros(digits)
        || is_ascending_sequence(digits)
        || is_descending_sequence(digits)
        || is_repeated_pair(digits)
    {
        return Err(ERR_INDIA_JUNK);
    }

    Ok(())
}

fn validate_generic(digits: &str) -> Result<(), &'static str> {
    if digits.len() < GENERIC_MIN_DIGITS || digits.len() > GENERIC_MAX_DIGITS {
        return Err(ERR_GENERIC);
    }

    if is_all_identical(digits)
        || is_all_zeros(digits)
        || is_ascending_sequence(digits)
        || is_descending_sequence(digits)
    {
        return Err(ERR_GENERIC);
    }

    Ok(())
}

/// Validate a phone number against the rules for the visitor's city.
/// Unrecognized cities (and Dubai) use the generic international rules.
pub fn validate(raw: &str, city: Option<&str>) -> PhoneValidation {
    if raw.trim().is_empty() {
        return PhoneValidation {
            valid: false,
            error: Some(ERR_REQUIRED.into()),
            normalized_digits: String::new(),
        };
    }

    let digits = normalize(raw, city);

    let outcome = if is_india_city(city) {
        validate_india(&digits)
    } else {
        validate_generic(&digits)
    };

    match outcome {
        Ok(()) => PhoneValidation { valid: true, error: None, normalized_digits: digits },
        Err(message) => PhoneValidation {
            valid: false,
            error: Some(message.into()),
            normalized_digits: digits,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn india_number_with_country_code_and_spaces() {
        let result = validate("+91 98765 43220", Some("hyderabad"));
        assert!(result.valid, "{:?}", result.error);
        assert_eq!(result.normalized_digits, "9876543220");
    }

    #[test]
    fn india_number_with_leading_zero() {
        let result = validate("09876543220", Some("mumbai"));
        assert!(result.valid);
        assert_eq!(result.normalized_digits, "9876543220");
    }

    #[test]
    fn city_casing_does_not_matter() {
        let result = validate("9876543220", Some("Bengaluru"));
        assert!(result.valid);
    }

    #[test]
    fn empty_input_is_required_error() {
        let result = validate("  ", Some("delhi"));
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(ERR_REQUIRED));
        assert_eq!(result.normalized_digits, "");
    }

    #[test]
    fn india_rejects_wrong_length() {
        let result = validate("98765", Some("delhi"));
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(ERR_INDIA_LENGTH));
        assert_eq!(result.normalized_digits, "98765");
    }

    #[test]
    fn india_rejects_landline_prefix() {
        let result = validate("5876543210", Some("goa"));
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(ERR_INDIA_PREFIX));
    }

    #[test]
    fn india_rejects_junk_patterns() {
        for raw in ["9999999999", "9876543210", "6789012345", "9090909090"] {
            let result = validate(raw, Some("hyderabad"));
            assert!(!result.valid, "{raw} should fail");
            assert_eq!(result.error.as_deref(), Some(ERR_INDIA_JUNK));
        }
    }

    #[test]
    fn india_all_zeros_is_a_length_error_after_stripping() {
        // Leading zeros are stripped for Indian cities, so the junk check
        // never sees them; the visitor gets the length message instead
        let result = validate("0000000000", Some("hyderabad"));
        assert!(!result.valid);
        assert_eq!(result.normalized_digits, "");
        assert_eq!(result.error.as_deref(), Some(ERR_INDIA_LENGTH));
    }

    #[test]
    fn dubai_accepts_eight_to_fifteen_digits() {
        assert!(validate("0501234567", Some("dubai")).valid);
        assert!(validate("97150123456", Some("dubai")).valid);
    }

    #[test]
    fn dubai_rejects_ascending_sequence() {
        let result = validate("12345678", Some("dubai"));
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(ERR_GENERIC));
    }

    #[test]
    fn dubai_rejects_identical_and_zero_fills() {
        for raw in ["88888888", "000000000"] {
            let result = validate(raw, Some("dubai"));
            assert!(!result.valid, "{raw} should fail");
        }
    }

    #[test]
    fn dubai_rejects_out_of_range_lengths() {
        assert!(!validate("1234567", Some("dubai")).valid);
        assert!(!validate("1234567890123456", Some("dubai")).valid);
    }

    #[test]
    fn unknown_city_uses_generic_rules() {
        // 10 digits starting with 1 would fail the India rules
        let result = validate("1112223334", Some("singapore"));
        assert!(result.valid);

        let result = validate("1112223334", None);
        assert!(result.valid);
    }

    #[test]
    fn wraparound_sequences_are_junk() {
        let result = validate("8901234567", Some("dubai"));
        assert!(!result.valid);
        let result = validate("1098765432", Some("dubai"));
        assert!(!result.valid);
    }

    #[test]
    fn repeated_pair_with_trailing_digit() {
        let result = validate("909090909", Some("hyderabad"));
        // 9 digits, India locale: length check fires first
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(ERR_INDIA_LENGTH));
        assert!(is_repeated_pair("909090909"));
    }
}
