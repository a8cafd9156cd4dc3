//! Unit tests for the field validator

use crate::domain::entities::{DraftField, RequestDraft};
use crate::domain::value_objects::Category;
use crate::services::validation::{FieldRuleSet, FieldValidator, CODE_FORMAT, CODE_REQUIRED};

fn validator_for(category: Category, service_type: Option<&str>) -> FieldValidator {
    FieldValidator::new(FieldRuleSet::for_service(category, service_type))
}

/// Draft that satisfies the healthcare rule set (name, phone, date, time)
fn appointment_draft() -> RequestDraft {
    let mut draft = RequestDraft::new();
    draft.customer_name = "Asha".to_string();
    draft.phone = "9876543210".to_string();
    draft.date = "12-05-2025".to_string();
    draft.time = "morning".to_string();
    draft
}

#[test]
fn test_complete_draft_passes() {
    let validator = validator_for(Category::Healthcare, None);
    let errors = validator.validate(&appointment_draft());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_empty_draft_reports_every_required_field_in_order() {
    let validator = validator_for(Category::Healthcare, None);
    let errors = validator.validate(&RequestDraft::new());

    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "phone", "date", "time"]);
    assert!(errors.iter().all(|e| e.code == CODE_REQUIRED));
}

#[test]
fn test_validation_is_deterministic() {
    let validator = validator_for(Category::Healthcare, None);
    let mut draft = appointment_draft();
    draft.phone = "123".to_string();

    let first = validator.validate(&draft);
    let second = validator.validate(&draft);
    assert_eq!(first, second);
}

#[test]
fn test_validation_is_total_on_arbitrary_input() {
    let validator = validator_for(Category::Healthcare, None);
    let mut draft = RequestDraft::new();
    draft.customer_name = "\u{1F600}\u{1F680}".to_string();
    draft.phone = "not a phone at all, clearly".repeat(50);
    draft.date = "99-99-99999".to_string();
    draft.time = "\t\n".to_string();

    let errors = validator.validate(&draft);
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.message_for("time"), Some("Time is required"));
}

#[test]
fn test_phone_must_be_exactly_ten_digits() {
    let validator = validator_for(Category::Healthcare, None);

    let mut draft = appointment_draft();
    draft.phone = "1234567890".to_string();
    assert!(validator.validate(&draft).is_empty());

    for bad in ["123456789", "12345678901", "123-456-7890"] {
        draft.phone = bad.to_string();
        let errors = validator.validate(&draft);
        assert_eq!(errors.len(), 1, "{bad} should fail");
        let error = &errors.errors()[0];
        assert_eq!(error.field, "phone");
        assert_eq!(error.code, CODE_FORMAT);
        assert_eq!(error.message, "Enter a 10-digit phone number");
    }
}

#[test]
fn test_missing_value_wins_over_format() {
    let validator = validator_for(Category::Healthcare, None);
    let mut draft = appointment_draft();
    draft.phone = "   ".to_string();

    let errors = validator.validate(&draft);
    let error = &errors.errors()[0];
    assert_eq!(error.field, "phone");
    assert_eq!(error.code, CODE_REQUIRED);
    assert_eq!(error.message, "Phone number is required");
}

#[test]
fn test_date_shape_and_calendar_validity() {
    let validator = validator_for(Category::Healthcare, None);
    let mut draft = appointment_draft();

    draft.date = "12-05-2025".to_string();
    assert!(validator.validate(&draft).is_empty());

    // Wrong shape: ISO order and unpadded digits
    for bad in ["2025-05-12", "1-5-2025", "12/05/2025"] {
        draft.date = bad.to_string();
        let errors = validator.validate(&draft);
        assert_eq!(errors.message_for("date"), Some("Enter the date as DD-MM-YYYY"), "{bad}");
    }

    // Right shape, impossible date
    for bad in ["31-02-2025", "00-01-2025", "15-13-2025"] {
        draft.date = bad.to_string();
        let errors = validator.validate(&draft);
        assert_eq!(errors.message_for("date"), Some("Enter a valid date"), "{bad}");
    }
}

#[test]
fn test_quantity_must_be_a_positive_integer() {
    let validator = validator_for(Category::Construction, Some("Bulk Material"));
    let mut draft = RequestDraft::new();
    draft.customer_name = "Ravi".to_string();
    draft.phone = "9876543210".to_string();
    draft.address = "Plot 14, Industrial Estate".to_string();

    draft.quantity = "25".to_string();
    assert!(validator.validate(&draft).is_empty());

    for bad in ["0", "-2", "2.5", "many"] {
        draft.quantity = bad.to_string();
        let errors = validator.validate(&draft);
        assert_eq!(
            errors.message_for("quantity"),
            Some("Enter a quantity greater than zero"),
            "{bad}"
        );
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn test_service_selection_required_for_rentals() {
    let validator = validator_for(Category::Events, Some("Infrastructure Rental"));
    let mut draft = RequestDraft::new();
    draft.customer_name = "Meera".to_string();
    draft.phone = "9876543210".to_string();
    draft.date = "20-11-2025".to_string();
    draft.address = "Lakeview Grounds".to_string();

    let errors = validator.validate(&draft);
    assert_eq!(errors.message_for("services"), Some("Select at least one service"));
    assert_eq!(errors.errors()[0].code, CODE_REQUIRED);

    draft.selected_services.push("Stage".to_string());
    assert!(validator.validate(&draft).is_empty());
}

#[test]
fn test_each_pass_replaces_previous_result() {
    let validator = validator_for(Category::Healthcare, None);
    let mut draft = RequestDraft::new();

    let first = validator.validate(&draft);
    assert_eq!(first.len(), 4);

    draft = appointment_draft();
    draft.time.clear();
    let second = validator.validate(&draft);
    assert_eq!(second.len(), 1);
    assert_eq!(second.message_for("name"), None);
    assert_eq!(second.message_for("time"), Some("Time is required"));
}

#[test]
fn test_fields_outside_the_rule_set_are_ignored() {
    let validator = validator_for(Category::Food, None);
    let mut draft = RequestDraft::new();
    draft.customer_name = "Asha".to_string();
    draft.phone = "9876543210".to_string();
    // Junk in fields the food rule set never looks at
    draft.date = "not a date".to_string();
    draft.quantity = "minus four".to_string();

    assert!(validator.validate(&draft).is_empty());
    assert!(!validator.rules().requires(DraftField::Date));
}
