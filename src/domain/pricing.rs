//! Displayed price of a catalog item.
//!
//! Discounts are applied in a fixed order: the item's fixed discounted price
//! replaces the base price when it is positive, then the event percentage is
//! taken off the *original* base price. Negative inputs are outside the
//! contract and are not checked here.

use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of [`resolve_price`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedPrice {
    pub final_price: Decimal,
    pub total_saved: Decimal,
    pub has_fixed_discount: bool,
    pub has_event_discount: bool,
}

impl ResolvedPrice {
    /// Whether the savings badge should be shown.
    pub fn shows_savings(&self) -> bool {
        self.total_saved > Decimal::ZERO
    }
}

/// Computes the final price and the total amount saved for a catalog item.
///
/// A fixed discounted price of zero counts as "no fixed discount".
pub fn resolve_price(
    base_price: Decimal,
    fixed_discounted_price: Option<Decimal>,
    event_discount_percent: Option<Decimal>,
) -> ResolvedPrice {
    let fixed = fixed_discounted_price.filter(|price| *price > Decimal::ZERO);
    let starting_price = fixed.unwrap_or(base_price);

    let percent = event_discount_percent.filter(|percent| *percent > Decimal::ZERO);
    let event_discount = percent
        .map(|percent| base_price * (percent / Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO);

    let final_price = starting_price - event_discount;

    ResolvedPrice {
        final_price,
        total_saved: base_price - final_price,
        has_fixed_discount: fixed.is_some(),
        has_event_discount: percent.is_some(),
    }
}
