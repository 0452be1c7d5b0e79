//! Service level model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping service level offered to senders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLevel {
    Maritime,
    Aerien,
    Express,
    Regional,
}

impl ServiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevel::Maritime => "maritime",
            ServiceLevel::Aerien => "aerien",
            ServiceLevel::Express => "express",
            ServiceLevel::Regional => "regional",
        }
    }

    /// Unknown labels fall back to the slowest tier.
    pub fn from_string(s: &str) -> Self {
        match s {
            "aerien" => ServiceLevel::Aerien,
            "express" => ServiceLevel::Express,
            "regional" => ServiceLevel::Regional,
            _ => ServiceLevel::Maritime,
        }
    }

    /// Flat fee applied to every shipment of this level.
    pub fn base_fee(&self) -> Decimal {
        match self {
            ServiceLevel::Maritime => Decimal::from(5_000),
            ServiceLevel::Aerien => Decimal::from(15_000),
            ServiceLevel::Express => Decimal::from(25_000),
            ServiceLevel::Regional => Decimal::from(3_000),
        }
    }

    /// Rate charged per chargeable kilogram, before the destination factor.
    pub fn per_kg_rate(&self) -> Decimal {
        match self {
            ServiceLevel::Maritime => Decimal::from(800),
            ServiceLevel::Aerien => Decimal::from(2_500),
            ServiceLevel::Express => Decimal::from(4_000),
            ServiceLevel::Regional => Decimal::from(500),
        }
    }

    /// Nominal door-to-door delivery window shown with a quote.
    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            ServiceLevel::Maritime => "30-45 days",
            ServiceLevel::Aerien => "5-7 days",
            ServiceLevel::Express => "2-3 days",
            ServiceLevel::Regional => "3-5 days",
        }
    }
}
