//! Common validation utilities

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors, in the order they were recorded
///
/// An empty collection means the validated value passed. Screens render one
/// message per field; when a field was recorded more than once the first
/// entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.add(FieldError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the message recorded for a field, if any
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Projects the errors into a field -> message map for inline display
    pub fn to_field_map(&self) -> HashMap<String, String> {
        let mut field_errors: HashMap<String, String> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_insert_with(|| error.message.clone());
        }
        field_errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }

    /// Check if a string is a positive integer (no sign, no decimals)
    pub fn is_positive_integer(value: &str) -> bool {
        matches!(value.trim().parse::<u32>(), Ok(n) if n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_means_valid() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_errors_preserve_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", "Name is required", "required");
        errors.add_error("phone", "Enter a 10-digit phone number", "format");

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add_error("date", "Date is required", "required");
        errors.add_error("date", "Enter the date as DD-MM-YYYY", "format");

        assert_eq!(errors.message_for("date"), Some("Date is required"));
        let map = errors.to_field_map();
        assert_eq!(map.get("date").map(String::as_str), Some("Date is required"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_message_for_missing_field() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.message_for("venue"), None);
    }

    #[test]
    fn test_field_error_serializes_for_display() {
        let error = FieldError::new("phone", "Enter a 10-digit phone number", "format");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["field"], "phone");
        assert_eq!(json["code"], "format");
    }

    #[test]
    fn test_validators() {
        assert!(validators::not_empty("x"));
        assert!(!validators::not_empty("   "));
        assert!(validators::is_positive_integer("12"));
        assert!(validators::is_positive_integer(" 3 "));
        assert!(!validators::is_positive_integer("0"));
        assert!(!validators::is_positive_integer("-1"));
        assert!(!validators::is_positive_integer("2.5"));
        assert!(!validators::is_positive_integer("abc"));
    }
}
