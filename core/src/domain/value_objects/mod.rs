//! Value objects representing immutable domain concepts.

pub mod category;
pub mod flow_state;
pub mod tier;

// Re-export commonly used types
pub use category::Category;
pub use flow_state::FlowState;
pub use tier::Tier;
