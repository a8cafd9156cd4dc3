//! Catalog verticals served by the app.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a catalog vertical
///
/// Every listing belongs to exactly one category. Categories key the
/// required-field rules and the offer fallback tables, and drive the
/// favorites screen filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Healthcare,
    Events,
    Construction,
    Beauty,
    HomeServices,
    Shopping,
}

impl Category {
    /// All categories, in the order the home screen lists them
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Healthcare,
        Category::Events,
        Category::Construction,
        Category::Beauty,
        Category::HomeServices,
        Category::Shopping,
    ];

    /// Returns the display label shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Healthcare => "Healthcare",
            Category::Events => "Events",
            Category::Construction => "Construction",
            Category::Beauty => "Beauty",
            Category::HomeServices => "Home Services",
            Category::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 7);
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::HomeServices).unwrap(),
            "\"home_services\""
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::HomeServices.to_string(), "Home Services");
        assert_eq!(Category::Food.to_string(), "Food");
    }
}
