//! Field validation module for booking request forms
//!
//! This module provides the validation pass every booking screen runs before
//! the tier gate:
//! - Category-keyed required-field rule sets, with service-type-specific rows
//! - Format checks for phone, date and quantity values
//! - Structured per-field errors for inline display
//!
//! Validation outcomes are data, never `DomainError`s: an invalid draft is a
//! normal user situation the screen renders, not a failure to propagate.

mod rules;
mod service;

#[cfg(test)]
mod tests;

pub use rules::FieldRuleSet;
pub use service::{FieldValidator, CODE_FORMAT, CODE_REQUIRED};

// Re-export the shared error types consumed alongside the validator
pub use be_shared::utils::validation::{FieldError, ValidationErrors};
