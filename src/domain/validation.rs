//! Shared validation result vocabulary
//!
//! Every field validator reports through these types. A blocking `error`
//! stops submission; a `warning` is advisory and may carry a corrected value
//! the UI can offer back to the visitor. `normalized_value` is always
//! populated, even on failure, so the caller can redisplay a cleaned-up
//! input.

use serde::{Deserialize, Serialize};

/// Non-blocking advisory attached to an otherwise valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<String>,
}

/// Outcome of validating one free-text field.
///
/// Invariant: `is_valid == false` implies `error` is present; a `warning`
/// only ever accompanies a valid result. The constructors below are the only
/// way these are built, which keeps the invariant by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<Warning>,
    pub normalized_value: String,
}

impl ValidationResult {
    pub fn valid(normalized_value: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: None,
            normalized_value: normalized_value.into(),
        }
    }

    pub fn valid_with_warning(normalized_value: impl Into<String>, warning: Warning) -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: Some(warning),
            normalized_value: normalized_value.into(),
        }
    }

    pub fn invalid(normalized_value: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            warning: None,
            normalized_value: normalized_value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_always_carries_an_error() {
        let result = ValidationResult::invalid("x", "bad");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("bad"));
        assert!(result.warning.is_none());
    }

    #[test]
    fn warning_only_on_valid() {
        let result = ValidationResult::valid_with_warning(
            "x",
            Warning { message: "check".into(), suggested_value: None },
        );
        assert!(result.is_valid);
        assert!(result.error.is_none());
        assert!(result.warning.is_some());
    }

    #[test]
    fn normalized_value_survives_failure() {
        let result = ValidationResult::invalid("cleaned", "bad");
        assert_eq!(result.normalized_value, "cleaned");
    }
}
