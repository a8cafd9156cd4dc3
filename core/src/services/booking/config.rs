//! Configuration for the booking flow

/// Default fee for a standard-tier request, in whole currency units
pub const DEFAULT_STANDARD_FEE: u32 = 99;

/// Configuration for a booking flow
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Fee charged when a standard-tier user submits a request;
    /// premium requests are always free
    pub standard_request_fee: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            standard_request_fee: DEFAULT_STANDARD_FEE,
        }
    }
}
