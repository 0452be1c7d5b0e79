//! Quote request and result models.

use super::ServiceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Outer package dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    /// Carrier volumetric weight: cm3 / 5000.
    pub fn volumetric_weight_kg(&self) -> f64 {
        (self.length_cm * self.width_cm * self.height_cm) / 5_000.0
    }
}

/// Input for a price estimate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    pub service_level: ServiceLevel,
    /// Scale weight in kilograms. The only rejectable input: must be > 0.
    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight_kg: f64,
    /// Omitted dimensions contribute zero volumetric weight.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    /// Destination city code. Unrecognized codes price at multiplier 1.0.
    pub destination: String,
    #[serde(default)]
    pub insurance_requested: bool,
    /// Only read when insurance is requested.
    #[serde(default)]
    pub declared_value: Decimal,
}

/// Price estimate with a visible component breakdown.
///
/// `total` always equals `base_price + insurance + customs + handling`;
/// every monetary field is rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub base_price: Decimal,
    pub insurance: Decimal,
    pub customs: Decimal,
    pub handling: Decimal,
    pub total: Decimal,
    pub chargeable_weight_kg: f64,
    pub delivery_estimate: String,
}
