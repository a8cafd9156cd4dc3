//! Request draft entity holding the booking form fields.

use serde::{Deserialize, Serialize};

/// Identifies one field of a [`RequestDraft`]
///
/// Used by the validator rule sets to declare which fields a category
/// requires, and as the stable key under which field errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Phone,
    Date,
    Time,
    Venue,
    Address,
    Quantity,
    PetType,
    Notes,
    Services,
}

impl DraftField {
    /// Returns the stable key used in field error maps
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Phone => "phone",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Venue => "venue",
            DraftField::Address => "address",
            DraftField::Quantity => "quantity",
            DraftField::PetType => "pet_type",
            DraftField::Notes => "notes",
            DraftField::Services => "services",
        }
    }

    /// Returns the label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Phone => "Phone number",
            DraftField::Date => "Date",
            DraftField::Time => "Time",
            DraftField::Venue => "Venue",
            DraftField::Address => "Address",
            DraftField::Quantity => "Quantity",
            DraftField::PetType => "Pet type",
            DraftField::Notes => "Notes",
            DraftField::Services => "Services",
        }
    }
}

/// Mutable booking form state, owned exclusively by the active flow
///
/// Every field is a plain string bound to a text input; an empty string means
/// the field is unset. Which fields a screen shows, and which of them are
/// required, is decided by the category's rule set, not by the draft itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Customer name
    pub customer_name: String,

    /// Contact phone, 10 digits
    pub phone: String,

    /// Requested date as DD-MM-YYYY, produced by the calendar picker
    pub date: String,

    /// Requested time slot (free text, e.g. "morning")
    pub time: String,

    /// Event venue, for on-site categories
    pub venue: String,

    /// Service or delivery address
    pub address: String,

    /// Quantity as typed, validated as a positive integer
    pub quantity: String,

    /// Pet or animal type, for pet-care requests
    pub pet_type: String,

    /// Free-form notes to the provider
    pub notes: String,

    /// Names of the sub-services picked on multi-service screens
    pub selected_services: Vec<String>,
}

impl RequestDraft {
    /// Creates an all-empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the all-empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks if every field is unset
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the raw text of a field
    ///
    /// [`DraftField::Services`] has no single text value and yields ""; the
    /// validator checks the selection list directly.
    pub fn text_value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.customer_name,
            DraftField::Phone => &self.phone,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Venue => &self.venue,
            DraftField::Address => &self.address,
            DraftField::Quantity => &self.quantity,
            DraftField::PetType => &self.pet_type,
            DraftField::Notes => &self.notes,
            DraftField::Services => "",
        }
    }
}
