//! Required-field rule sets keyed by category and service type.

use crate::domain::entities::DraftField;
use crate::domain::value_objects::Category;

/// Ordered set of fields a booking form requires
///
/// The order is the order fields appear on screen, and therefore the order
/// errors are reported in. Rule sets are cheap to clone and carry no
/// behavior; the [`FieldValidator`](super::FieldValidator) applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRuleSet {
    required: Vec<DraftField>,
}

impl FieldRuleSet {
    /// Creates a rule set from an explicit field list, dropping duplicates
    pub fn new(fields: Vec<DraftField>) -> Self {
        let mut required = Vec::with_capacity(fields.len());
        for field in fields {
            if !required.contains(&field) {
                required.push(field);
            }
        }
        Self { required }
    }

    /// Returns the required fields in display order
    pub fn required_fields(&self) -> &[DraftField] {
        &self.required
    }

    /// Checks if a field is required by this rule set
    pub fn requires(&self, field: DraftField) -> bool {
        self.required.contains(&field)
    }

    /// Looks up the rule set for a screen
    ///
    /// Service-type-specific rows take precedence over the category default.
    /// Service types are matched case-insensitively; an unknown type falls
    /// back to the category row.
    pub fn for_service(category: Category, service_type: Option<&str>) -> Self {
        if let Some(service_type) = service_type {
            if let Some(rules) = Self::for_service_type(category, service_type) {
                return rules;
            }
        }
        Self::for_category(category)
    }

    fn for_service_type(category: Category, service_type: &str) -> Option<Self> {
        let fields: &[DraftField] = match (category, service_type.to_lowercase().as_str()) {
            // On-site event work needs a venue
            (Category::Events, "decoration") => &[
                DraftField::Name,
                DraftField::Phone,
                DraftField::Date,
                DraftField::Venue,
            ],
            // Rentals deliver to an address and cover several sub-services
            (Category::Events, "infrastructure rental") => &[
                DraftField::Name,
                DraftField::Phone,
                DraftField::Date,
                DraftField::Address,
                DraftField::Services,
            ],
            // Bulk material orders carry a quantity and a delivery address
            (Category::Construction, "bulk material") => &[
                DraftField::Name,
                DraftField::Phone,
                DraftField::Quantity,
                DraftField::Address,
            ],
            (Category::HomeServices, "pet care") => &[
                DraftField::Name,
                DraftField::Phone,
                DraftField::Date,
                DraftField::PetType,
            ],
            _ => return None,
        };
        Some(Self::new(fields.to_vec()))
    }

    fn for_category(category: Category) -> Self {
        let fields: &[DraftField] = match category {
            // Scheduled verticals always collect a date
            Category::Healthcare => &[
                DraftField::Name,
                DraftField::Phone,
                DraftField::Date,
                DraftField::Time,
            ],
            Category::Events => &[DraftField::Name, DraftField::Phone, DraftField::Date],
            Category::Food
            | Category::Construction
            | Category::Beauty
            | Category::HomeServices
            | Category::Shopping => &[DraftField::Name, DraftField::Phone],
        };
        Self::new(fields.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_set_requires_name_and_phone() {
        for category in Category::ALL {
            let rules = FieldRuleSet::for_service(category, None);
            assert!(rules.requires(DraftField::Name), "{category}");
            assert!(rules.requires(DraftField::Phone), "{category}");
        }
    }

    #[test]
    fn test_service_row_takes_precedence_over_category() {
        let rules = FieldRuleSet::for_service(Category::Events, Some("Decoration"));
        assert!(rules.requires(DraftField::Venue));

        let fallback = FieldRuleSet::for_service(Category::Events, Some("Catering"));
        assert!(!fallback.requires(DraftField::Venue));
        assert!(fallback.requires(DraftField::Date));
    }

    #[test]
    fn test_service_type_is_case_insensitive() {
        let rules = FieldRuleSet::for_service(Category::Construction, Some("BULK MATERIAL"));
        assert!(rules.requires(DraftField::Quantity));
    }

    #[test]
    fn test_new_drops_duplicates_keeps_order() {
        let rules = FieldRuleSet::new(vec![
            DraftField::Phone,
            DraftField::Name,
            DraftField::Phone,
        ]);
        assert_eq!(
            rules.required_fields(),
            &[DraftField::Phone, DraftField::Name]
        );
    }
}
