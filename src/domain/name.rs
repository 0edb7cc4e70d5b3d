//! Full-name lead-quality validation
//!
//! Filters the obvious junk a public form attracts: digits and symbol noise,
//! dictionary fillers ("test", "john doe"), keyboard mashes and short
//! repeated blocks. The dictionaries and thresholds are heuristics, kept as
//! module constants so they stay adjustable.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use crate::domain::validation::{ValidationResult, Warning};

const ERR_REQUIRED: &str = "Please enter your full name.";
const ERR_LETTERS_ONLY: &str = "Use letters only (spaces, hyphen, apostrophe are okay).";
const ERR_REAL_NAME: &str = "Please enter a real name so we can reach you.";
const ERR_FIRST_AND_LAST: &str = "Please enter your first and last name.";
const WARN_FULL_NAME: &str = "Please enter your full name (first + last) for a faster callback.";

// Single-token fillers, matched case-insensitively against the whole input
const JUNK_TOKENS: &[&str] = &[
    "test",
    "testing",
    "asdf",
    "qwerty",
    "admin",
    "demo",
    "na",
    "n/a",
    "none",
    "unknown",
    "user",
    "sample",
    "abc",
    "xyz",
    "123",
    "guest",
    "anonymous",
];

// Run-style fillers that need a pattern rather than an exact token
static JUNK_RUNS: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new([r"(?i)^xx+$", r"(?i)^aaa+$", r"(?i)^bbb+$", r"^111+$"]).unwrap());

// Two-word throwaways, compared after lowercasing and whitespace collapse
const JUNK_PAIRS: &[&str] = &[
    "asdf asdf",
    "test test",
    "abc abc",
    "xyz xyz",
    "demo demo",
    "user user",
    "name name",
    "first last",
    "john doe",
    "jane doe",
];

static HAS_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

static EXCESSIVE_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*()+=\[\]{}|\\:;"<>,?/~`]"#).unwrap());

// Unicode letters, spaces, hyphen, apostrophe, period
static VALID_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s\-'.]+$").unwrap());

/// Share of a single character above which the input counts as a mash.
const MASH_THRESHOLD: f64 = 0.7;

/// Repeated-block detection looks for patterns of these lengths.
const REPEAT_BLOCK_LENGTHS: std::ops::RangeInclusive<usize> = 2..=3;

/// Minimum character count for a single-token name to pass (with a warning).
const SINGLE_TOKEN_MIN_CHARS: usize = 6;

/// Trim and collapse internal whitespace runs; casing is preserved.
fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when one character accounts for `MASH_THRESHOLD` or more of the
/// input (spaces ignored, case folded). Inputs shorter than 4 chars are
/// exempt so initials do not trip it.
fn is_keyboard_mash(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.len() < 4 {
        return false;
    }

    let mut counts = std::collections::HashMap::new();
    for c in &cleaned {
        *counts.entry(*c).or_insert(0usize) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    max as f64 / cleaned.len() as f64 >= MASH_THRESHOLD
}

/// True for strings that are a 2-3 char block repeated to fill the length,
/// like "ababab" or "abcabc".
fn is_repeated_block(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() < 4 {
        return false;
    }

    for block_len in REPEAT_BLOCK_LENGTHS {
        if chars.len() % block_len == 0 {
            let block = &chars[..block_len];
            if chars.chunks(block_len).all(|chunk| chunk == block) {
                return true;
            }
        }
    }
    false
}

/// Validate a visitor's full name.
pub fn validate(raw: &str) -> ValidationResult {
    let normalized = normalize(raw);

    if normalized.is_empty() {
        return ValidationResult::invalid(normalized, ERR_REQUIRED);
    }

    if HAS_DIGITS.is_match(&normalized)
        || EXCESSIVE_SYMBOLS.is_match(&normalized)
        || !VALID_NAME.is_match(&normalized)
    {
        return ValidationResult::invalid(normalized, ERR_LETTERS_ONLY);
    }

    let lowered = normalized.to_lowercase();
    if JUNK_TOKENS.contains(&lowered.as_str())
        || JUNK_RUNS.is_match(&normalized)
        || JUNK_PAIRS.contains(&lowered.as_str())
        || is_keyboard_mash(&normalized)
        || is_repeated_block(&normalized)
    {
        return ValidationResult::invalid(normalized, ERR_REAL_NAME);
    }

    let word_count = normalized.split_whitespace().count();
    if word_count < 2 {
        // Single names exist; accept longer ones but nudge for a last name
        if normalized.chars().count() < SINGLE_TOKEN_MIN_CHARS {
            return ValidationResult::invalid(normalized, ERR_FIRST_AND_LAST);
        }
        return ValidationResult::valid_with_warning(
            normalized,
            Warning { message: WARN_FULL_NAME.into(), suggested_value: None },
        );
    }

    ValidationResult::valid(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        for name in ["Robert Smith", "Priya Nair", "Jean-Luc Picard", "O'Brien Murphy"] {
            let result = validate(name);
            assert!(result.is_valid, "{name} should pass");
            assert!(result.warning.is_none(), "{name} should not warn");
        }
    }

    #[test]
    fn normalizes_whitespace_but_keeps_casing() {
        let result = validate("  Anita   Rao  ");
        assert!(result.is_valid);
        assert_eq!(result.normalized_value, "Anita Rao");
    }

    #[test]
    fn rejects_empty() {
        let result = validate("   ");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some(ERR_REQUIRED));
        assert_eq!(result.normalized_value, "");
    }

    #[test]
    fn rejects_digits_and_symbols() {
        for name in ["John 2nd", "mail@me", "Who?", "semi;colon"] {
            let result = validate(name);
            assert!(!result.is_valid, "{name} should fail");
            assert_eq!(result.error.as_deref(), Some(ERR_LETTERS_ONLY));
        }
    }

    #[test]
    fn rejects_junk_dictionary_entries() {
        for name in ["test", "TEST", "Admin", "n/a", "guest", "xxxx", "aaaa"] {
            let result = validate(name);
            assert!(!result.is_valid, "{name} should fail");
        }
    }

    #[test]
    fn rejects_two_word_junk_pairs() {
        for name in ["Test Test", "john doe", "First Last", "asdf  asdf"] {
            let result = validate(name);
            assert!(!result.is_valid, "{name} should fail");
            assert_eq!(result.error.as_deref(), Some(ERR_REAL_NAME));
        }
    }

    #[test]
    fn rejects_keyboard_mash() {
        // 7 of 8 chars identical, well past the 70% threshold
        let result = validate("aaaabaaa");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some(ERR_REAL_NAME));
    }

    #[test]
    fn rejects_repeated_blocks() {
        for name in ["ababab", "abcabc", "xyxyxyxy"] {
            let result = validate(name);
            assert!(!result.is_valid, "{name} should fail");
        }
    }

    #[test]
    fn short_single_token_is_blocked() {
        let result = validate("Raj");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some(ERR_FIRST_AND_LAST));
    }

    #[test]
    fn long_single_token_passes_with_warning() {
        let result = validate("Xavier");
        assert!(result.is_valid);
        let warning = result.warning.expect("should warn");
        assert_eq!(warning.message, WARN_FULL_NAME);
        assert!(warning.suggested_value.is_none());
    }

    #[test]
    fn unicode_names_are_letters() {
        let result = validate("José García");
        assert!(result.is_valid);
    }
}
