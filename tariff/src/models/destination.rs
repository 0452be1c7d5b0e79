//! Destination multiplier table.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Price multiplier per destination city on the served corridor.
static DESTINATION_MULTIPLIERS: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        ("dakar", Decimal::ONE),
        ("abidjan", Decimal::new(11, 1)),
        ("lome", Decimal::new(11, 1)),
        ("cotonou", Decimal::new(115, 2)),
        ("bamako", Decimal::new(12, 1)),
        ("conakry", Decimal::new(12, 1)),
        ("ouagadougou", Decimal::new(12, 1)),
        ("douala", Decimal::new(125, 2)),
        ("libreville", Decimal::new(13, 1)),
        ("paris", Decimal::new(15, 1)),
        ("bruxelles", Decimal::new(15, 1)),
        ("montreal", Decimal::new(18, 1)),
        ("new-york", Decimal::new(18, 1)),
    ])
});

/// Multiplier for a destination code. Unknown codes price at 1.0.
pub fn destination_multiplier(code: &str) -> Decimal {
    let normalized = code.trim().to_lowercase();
    DESTINATION_MULTIPLIERS
        .get(normalized.as_str())
        .copied()
        .unwrap_or(Decimal::ONE)
}

/// Supported destination codes, sorted.
pub fn known_destinations() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = DESTINATION_MULTIPLIERS.keys().copied().collect();
    codes.sort_unstable();
    codes
}
