//! Tests for the field validation service

#[cfg(test)]
mod service_tests;
