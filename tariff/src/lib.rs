//! tariff: shipping quote calculation for the colisend marketplace.
pub mod models;
pub mod services;

pub use models::{Dimensions, QuoteBreakdown, QuoteRequest, ServiceLevel};
pub use services::calculate_quote;
