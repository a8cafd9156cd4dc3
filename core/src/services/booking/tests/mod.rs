//! Tests for the booking flow
