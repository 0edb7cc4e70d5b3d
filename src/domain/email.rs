//! Email lead-quality validation
//!
//! Email is an optional field: an empty input is valid. Non-empty input gets
//! structural checks, a known-junk blocklist, and a typo-correction table
//! for the common free-mail domains. A typo match stays valid and surfaces
//! the corrected address as a suggestion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation::{ValidationResult, Warning};

const ERR_FORMAT: &str = "Please enter a valid email (e.g., name@gmail.com).";
const ERR_REAL_EMAIL: &str = "Please enter your real email so we can share the estimate.";

const MAX_LOCAL_PART: usize = 64;
const MAX_DOMAIN: usize = 255;

// Throwaway local parts, blocked only on the big free-mail domains
const JUNK_LOCAL_PARTS: &[&str] = &[
    "test", "demo", "admin", "no-reply", "noreply", "sample", "example", "user", "guest",
];

const JUNK_EMAILS: &[&str] = &[
    "a@a.com",
    "b@b.com",
    "test@test.com",
    "test@testing.com",
    "demo@demo.com",
    "admin@admin.com",
    "user@user.com",
    "a@b.com",
    "abc@abc.com",
    "xyz@xyz.com",
    "123@123.com",
    "asd@asd.com",
    "asdf@asdf.com",
    "qwerty@qwerty.com",
];

const GENERIC_DOMAINS: &[&str] =
    &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "mail.com"];

// Frequent fat-finger domains and what the visitor almost certainly meant
const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmal.com", "gmail.com"),
    ("gmial.com", "gmail.com"),
    ("gnail.com", "gmail.com"),
    ("gmali.com", "gmail.com"),
    ("gamil.com", "gmail.com"),
    ("gmaill.com", "gmail.com"),
    ("gmail.co", "gmail.com"),
    ("gmail.om", "gmail.com"),
    ("gmai.com", "gmail.com"),
    ("gmail.con", "gmail.com"),
    ("gmil.com", "gmail.com"),
    ("hotmial.com", "hotmail.com"),
    ("hotmal.com", "hotmail.com"),
    ("hotmai.com", "hotmail.com"),
    ("hotmail.co", "hotmail.com"),
    ("hotmail.con", "hotmail.com"),
    ("outlok.com", "outlook.com"),
    ("outloo.com", "outlook.com"),
    ("outlook.co", "outlook.com"),
    ("outlook.con", "outlook.com"),
    ("yaho.com", "yahoo.com"),
    ("yahooo.com", "yahoo.com"),
    ("yahoo.co", "yahoo.com"),
    ("yahoo.con", "yahoo.com"),
    ("yahoomail.com", "yahoo.com"),
    ("rediffmal.com", "rediffmail.com"),
    ("redifmail.com", "rediffmail.com"),
    ("rediff.com", "rediffmail.com"),
];

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$").unwrap());

/// Trim, lowercase, and drop internal whitespace.
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

fn has_valid_structure(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty()
        || local.len() > MAX_LOCAL_PART
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }

    if domain.is_empty()
        || domain.len() > MAX_DOMAIN
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
        || !domain.contains('.')
    {
        return false;
    }

    // Top-level label must be at least 2 characters
    match domain.rsplit('.').next() {
        Some(tld) if tld.len() >= 2 => {}
        _ => return false,
    }

    EMAIL_SHAPE.is_match(email)
}

fn domain_of(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("")
}

/// True when the local part (minus any `+` alias suffix) is a throwaway.
fn has_junk_local_part(email: &str) -> bool {
    let local = email.split('@').next().unwrap_or("");
    let base = local.split('+').next().unwrap_or("");
    JUNK_LOCAL_PARTS.contains(&base)
}

fn typo_correction(email: &str) -> Option<String> {
    let local = email.split('@').next()?;
    let domain = domain_of(email);
    DOMAIN_TYPOS
        .iter()
        .find(|(typo, _)| *typo == domain)
        .map(|(_, fixed)| format!("{local}@{fixed}"))
}

/// Validate a visitor's email address. Empty input is valid.
pub fn validate(raw: &str) -> ValidationResult {
    let normalized = normalize(raw);

    if normalized.is_empty() {
        return ValidationResult::valid("");
    }

    if !has_valid_structure(&normalized) {
        return ValidationResult::invalid(normalized, ERR_FORMAT);
    }

    if JUNK_EMAILS.contains(&normalized.as_str()) {
        return ValidationResult::invalid(normalized, ERR_REAL_EMAIL);
    }

    if GENERIC_DOMAINS.contains(&domain_of(&normalized)) && has_junk_local_part(&normalized) {
        return ValidationResult::invalid(normalized, ERR_REAL_EMAIL);
    }

    if let Some(suggested) = typo_correction(&normalized) {
        let fixed_domain = domain_of(&suggested).to_string();
        return ValidationResult::valid_with_warning(
            normalized,
            Warning {
                message: format!("Did you mean {fixed_domain}?"),
                suggested_value: Some(suggested),
            },
        );
    }

    ValidationResult::valid(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid_because_optional() {
        let result = validate("   ");
        assert!(result.is_valid);
        assert_eq!(result.normalized_value, "");
        assert!(result.warning.is_none());
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let result = validate("  Priya.Nair @ Gmail.com ");
        // Internal spaces are stripped before the format check
        assert!(result.is_valid);
        assert_eq!(result.normalized_value, "priya.nair@gmail.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plainaddress",
            "two@@ats.com",
            "@nodomain.com",
            "nolocal@",
            ".leading@dot.com",
            "trailing.@dot.com",
            "double..dot@x.com",
            "user@-dash.com",
            "user@dot..com",
            "user@nodot",
            "user@tld.x",
        ] {
            let result = validate(email);
            assert!(!result.is_valid, "{email} should fail");
            assert_eq!(result.error.as_deref(), Some(ERR_FORMAT));
        }
    }

    #[test]
    fn rejects_overlong_local_part() {
        let email = format!("{}@gmail.com", "a".repeat(65));
        assert!(!validate(&email).is_valid);
    }

    #[test]
    fn rejects_known_junk_addresses() {
        for email in ["a@b.com", "test@test.com", "QWERTY@qwerty.com"] {
            let result = validate(email);
            assert!(!result.is_valid, "{email} should fail");
            assert_eq!(result.error.as_deref(), Some(ERR_REAL_EMAIL));
        }
    }

    #[test]
    fn rejects_junk_local_parts_on_generic_domains_only() {
        let blocked = validate("test@gmail.com");
        assert!(!blocked.is_valid);
        assert_eq!(blocked.error.as_deref(), Some(ERR_REAL_EMAIL));

        // Plus-alias does not launder a junk local part
        assert!(!validate("demo+site@yahoo.com").is_valid);

        // Same local part on a company domain is fine
        assert!(validate("test@acmeinteriors.com").is_valid);
    }

    #[test]
    fn suggests_domain_typo_corrections() {
        let result = validate("john@gmial.com");
        assert!(result.is_valid);
        let warning = result.warning.expect("should warn");
        assert_eq!(warning.message, "Did you mean gmail.com?");
        assert_eq!(warning.suggested_value.as_deref(), Some("john@gmail.com"));
        assert_eq!(result.normalized_value, "john@gmial.com");
    }

    #[test]
    fn clean_addresses_pass_without_warning() {
        let result = validate("anita.rao@outlook.com");
        assert!(result.is_valid);
        assert!(result.warning.is_none());
    }
}
