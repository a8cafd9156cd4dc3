//! Common utility functions

pub mod search;
pub mod validation;
