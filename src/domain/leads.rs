//! Lead submission domain types
//!
//! The request DTO for the contact form, the gate-side field validation,
//! and the flat `ContactRecord` handed to the storage collaborator. Records
//! are assembled transiently per submission attempt and never persisted
//! here; once handed off, the collaborator owns them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::device::{BrowserFamily, DeviceType};
use crate::domain::email;
use crate::domain::estimate::{BhkSize, EstimateResult, FinishLevel, ProjectInputs, ScopeOfWork, StorageRequirement};
use crate::domain::name;
use crate::domain::phone;
use crate::domain::validation::Warning;

/// What brought the visitor to the form. Replaces the old module-global
/// "entry mode" flag: intent travels explicitly with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadIntent {
    #[default]
    QuickEstimate,
    DesignerConsultation,
}

/// Follow-up preference picked on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NextStep {
    Consultation,
    DirectCall,
}

/// Raw form submission. Required fields default to empty strings so the
/// gate can report them per-field instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitLeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub property_location: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub property_size: Option<String>,
    #[serde(default)]
    pub property_status: Option<String>,
    #[serde(default)]
    pub next_step: Option<NextStep>,
    #[serde(default)]
    pub consultation_date: Option<String>,
    #[serde(default)]
    pub intent: LeadIntent,
    #[serde(default)]
    pub project: Option<ProjectInputs>,
}

/// One blocking problem with a submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Advisory attached to a field that still passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWarning {
    pub field: &'static str,
    #[serde(flatten)]
    pub warning: Warning,
}

/// Contact fields after validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub property_location: String,
    pub project_type: String,
    pub consultation_date: Option<NaiveDate>,
    pub warnings: Vec<FieldWarning>,
}

/// Run every contact-field check and collect blocking errors per field.
///
/// The phone rules are keyed by the property location, which doubles as the
/// visitor's city. Warnings never block; they ride along on success so the
/// caller can surface them.
pub fn validate_submission(request: &SubmitLeadRequest) -> Result<NormalizedContact, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let property_location = request.property_location.trim().to_string();
    if property_location.is_empty() {
        errors.push(FieldError {
            field: "property_location",
            message: "Please tell us where the property is.".into(),
        });
    }

    let project_type = request.project_type.trim().to_string();
    if project_type.is_empty() {
        errors.push(FieldError {
            field: "project_type",
            message: "Please pick a project type.".into(),
        });
    }

    let name_result = name::validate(&request.name);
    if let Some(message) = name_result.error {
        errors.push(FieldError { field: "name", message });
    } else if let Some(warning) = name_result.warning {
        warnings.push(FieldWarning { field: "name", warning });
    }

    let city = (!property_location.is_empty()).then_some(property_location.as_str());
    let phone_result = phone::validate(&request.phone, city);
    if let Some(message) = phone_result.error {
        errors.push(FieldError { field: "phone", message });
    }

    let email_result = email::validate(request.email.as_deref().unwrap_or(""));
    if let Some(message) = email_result.error {
        errors.push(FieldError { field: "email", message });
    } else if let Some(warning) = email_result.warning {
        warnings.push(FieldWarning { field: "email", warning });
    }

    let consultation_date = match request.consultation_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError {
                    field: "consultation_date",
                    message: "Please pick a valid date (YYYY-MM-DD).".into(),
                });
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NormalizedContact {
        name: name_result.normalized_value,
        phone: phone_result.normalized_digits,
        email: email_result.normalized_value,
        property_location,
        project_type,
        consultation_date,
        warnings,
    })
}

/// Best-effort request metadata; every part degrades independently.
#[derive(Debug, Clone)]
pub struct SubmissionMetadata {
    pub device_type: DeviceType,
    pub browser: BrowserFamily,
    pub visitor_location: String,
}

/// Flat record delivered to the storage collaborator, strings/numbers/nulls
/// only. Mirrors the sheet columns the studio tracks leads in.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub lead_ref: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub property_location: String,
    pub project_type: String,
    pub property_type: String,
    pub property_size: String,
    pub property_status: String,
    pub next_step: Option<NextStep>,
    pub consultation_date: Option<NaiveDate>,
    pub visitor_location: String,
    pub device_type: DeviceType,
    pub browser: BrowserFamily,
    pub intent: LeadIntent,
    pub scope_of_work: Option<ScopeOfWork>,
    pub finish_level: Option<FinishLevel>,
    pub storage_requirement: Option<StorageRequirement>,
    pub bhk_size: Option<BhkSize>,
    pub upgrades: String,
    pub estimate_low: Option<Decimal>,
    pub estimate_high: Option<Decimal>,
    pub size_multiplier: Option<Decimal>,
}

/// Human-readable summary of the requested add-ons.
fn upgrades_summary(project: &ProjectInputs) -> String {
    let mut parts = Vec::new();
    if project.has_electrical_changes {
        parts.push("Electrical");
    }
    if project.has_painting_changes {
        parts.push("Painting");
    }
    parts.join(", ")
}

impl ContactRecord {
    /// Assemble the hand-off record from the validated contact, the raw
    /// request, the enrichment metadata, and the server-computed estimate.
    pub fn assemble(
        contact: &NormalizedContact,
        request: &SubmitLeadRequest,
        metadata: &SubmissionMetadata,
        estimate: Option<&EstimateResult>,
    ) -> Self {
        let project = request.project.as_ref();

        Self {
            lead_ref: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            property_location: contact.property_location.clone(),
            project_type: contact.project_type.clone(),
            property_type: request.property_type.clone().unwrap_or_default(),
            property_size: request.property_size.clone().unwrap_or_default(),
            property_status: request.property_status.clone().unwrap_or_default(),
            next_step: request.next_step,
            consultation_date: contact.consultation_date,
            visitor_location: metadata.visitor_location.clone(),
            device_type: metadata.device_type,
            browser: metadata.browser,
            intent: request.intent,
            scope_of_work: project.map(|p| p.scope),
            finish_level: project.map(|p| p.finish),
            storage_requirement: project.map(|p| p.storage),
            bhk_size: project.map(|p| p.bhk_size),
            upgrades: project.map(upgrades_summary).unwrap_or_default(),
            estimate_low: estimate.map(|e| e.total_low),
            estimate_high: estimate.map(|e| e.total_high),
            size_multiplier: estimate.map(|e| e.breakdown.size_multiplier),
        }
    }
}
