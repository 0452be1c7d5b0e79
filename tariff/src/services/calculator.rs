//! Quote calculation.
//!
//! Pure and deterministic: no state, no I/O, identical input gives an
//! identical breakdown.

use crate::models::{destination_multiplier, QuoteBreakdown, QuoteRequest, ServiceLevel};
use forwarding_core::error::AppError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use validator::Validate;

/// Compute a price estimate for a shipment.
///
/// The only rejectable input is a non-positive (or NaN) weight; everything
/// else falls back to a priced default.
pub fn calculate_quote(request: &QuoteRequest) -> Result<QuoteBreakdown, AppError> {
    request.validate()?;

    let volumetric_kg = request
        .dimensions
        .map(|dims| dims.volumetric_weight_kg())
        .unwrap_or(0.0);
    // Volumetric weight can only increase what is charged.
    let chargeable_kg = request.weight_kg.max(volumetric_kg);

    let chargeable = Decimal::from_f64(chargeable_kg).ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "chargeable weight {chargeable_kg} is not representable"
        ))
    })?;

    let level = request.service_level;
    let base_price = round_money(
        level.base_fee() + level.per_kg_rate() * chargeable * destination_multiplier(&request.destination),
    );

    let insurance = if request.insurance_requested {
        let premium = request.declared_value * Decimal::new(2, 2);
        round_money(premium.max(Decimal::from(2_000)))
    } else {
        Decimal::ZERO
    };

    // Express shipments clear customs under the courier's own bond.
    let customs = if level == ServiceLevel::Express {
        Decimal::ZERO
    } else {
        round_money(base_price * Decimal::new(5, 2))
    };

    let handling = handling_fee(request.weight_kg);

    let total = base_price + insurance + customs + handling;

    Ok(QuoteBreakdown {
        base_price,
        insurance,
        customs,
        handling,
        total,
        chargeable_weight_kg: chargeable_kg,
        delivery_estimate: level.delivery_estimate().to_string(),
    })
}

/// Flat handling fee tiered on scale weight, never on volumetric weight.
/// Boundaries are strict: exactly 10kg and exactly 30kg stay in the lower tier.
fn handling_fee(weight_kg: f64) -> Decimal {
    if weight_kg > 30.0 {
        Decimal::from(3_000)
    } else if weight_kg > 10.0 {
        Decimal::from(1_500)
    } else {
        Decimal::from(500)
    }
}

/// Round to whole currency units, half away from zero.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(Decimal::new(12345, 1)), Decimal::from(1_235));
        assert_eq!(round_money(Decimal::new(12344, 1)), Decimal::from(1_234));
        assert_eq!(round_money(Decimal::new(125, 1)), Decimal::from(13));
    }

    #[test]
    fn test_handling_fee_tiers() {
        assert_eq!(handling_fee(0.5), Decimal::from(500));
        assert_eq!(handling_fee(10.0), Decimal::from(500));
        assert_eq!(handling_fee(10.01), Decimal::from(1_500));
        assert_eq!(handling_fee(30.0), Decimal::from(1_500));
        assert_eq!(handling_fee(30.01), Decimal::from(3_000));
    }
}
