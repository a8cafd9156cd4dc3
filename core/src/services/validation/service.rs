//! Field validator applying a rule set to a request draft.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use be_shared::utils::validation::{validators, FieldError, ValidationErrors};

use crate::domain::entities::{DraftField, RequestDraft};

use super::rules::FieldRuleSet;

/// Error code for a required field left unset
pub const CODE_REQUIRED: &str = "required";

/// Error code for a field that is set but malformed
pub const CODE_FORMAT: &str = "format";

static PHONE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Invalid phone regex"));

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("Invalid date regex"));

/// Validates request drafts against a category's rule set
///
/// The validator is total and deterministic: it never fails, never skips
/// fields, and reports every violation in one pass so the screen can surface
/// all of them at once. At most one error is reported per field, with a
/// missing required value taking precedence over a format problem.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    rules: FieldRuleSet,
}

impl FieldValidator {
    /// Creates a validator for the given rule set
    pub fn new(rules: FieldRuleSet) -> Self {
        Self { rules }
    }

    /// Returns the rule set this validator applies
    pub fn rules(&self) -> &FieldRuleSet {
        &self.rules
    }

    /// Checks every required field and returns the full set of violations
    ///
    /// The result replaces any previous validation outcome; an empty
    /// collection means the draft may proceed.
    pub fn validate(&self, draft: &RequestDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for &field in self.rules.required_fields() {
            if let Some(error) = check_field(field, draft) {
                errors.add(error);
            }
        }
        errors
    }
}

/// Checks one field, required-missing before format
fn check_field(field: DraftField, draft: &RequestDraft) -> Option<FieldError> {
    if field == DraftField::Services {
        if draft.selected_services.is_empty() {
            return Some(FieldError::new(
                field.key(),
                "Select at least one service",
                CODE_REQUIRED,
            ));
        }
        return None;
    }

    let value = draft.text_value(field);
    if !validators::not_empty(value) {
        return Some(FieldError::new(
            field.key(),
            format!("{} is required", field.label()),
            CODE_REQUIRED,
        ));
    }
    format_violation(field, value.trim())
}

/// Checks the format of a non-empty value; fields without a format rule pass
fn format_violation(field: DraftField, value: &str) -> Option<FieldError> {
    match field {
        DraftField::Phone => {
            if !validators::matches_pattern(value, &PHONE_FORMAT) {
                return Some(FieldError::new(
                    field.key(),
                    "Enter a 10-digit phone number",
                    CODE_FORMAT,
                ));
            }
        }
        DraftField::Date => {
            if !validators::matches_pattern(value, &DATE_SHAPE) {
                return Some(FieldError::new(
                    field.key(),
                    "Enter the date as DD-MM-YYYY",
                    CODE_FORMAT,
                ));
            }
            if NaiveDate::parse_from_str(value, "%d-%m-%Y").is_err() {
                return Some(FieldError::new(field.key(), "Enter a valid date", CODE_FORMAT));
            }
        }
        DraftField::Quantity => {
            if !validators::is_positive_integer(value) {
                return Some(FieldError::new(
                    field.key(),
                    "Enter a quantity greater than zero",
                    CODE_FORMAT,
                ));
            }
        }
        // Free-text fields only need to be present
        _ => {}
    }
    None
}
