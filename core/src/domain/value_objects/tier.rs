//! Subscription tier of the signed-in user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the subscription tier that gates the booking flow
///
/// The tier is resolved by the host application at sign-in and injected into
/// every flow that needs it; domain code never reads it from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Pay-per-request customer; sees standard offer blocks
    Standard,
    /// Subscribed customer; skips the request fee and sees premium offers
    Premium,
}

impl Tier {
    /// Returns the tier as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    /// Checks if this is the premium tier
    pub fn is_premium(&self) -> bool {
        matches!(self, Tier::Premium)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
