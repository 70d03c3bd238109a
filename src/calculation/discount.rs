//! Discount calculation functionality.
//!
//! This module combines the membership-tier discount with any coupon
//! discount. The two components are additive and uncapped; the
//! orchestrator clamps the final total, not the discount.

use rust_decimal::Decimal;

use crate::config::DiscountsConfig;
use crate::models::{Invoice, Membership};

/// Warning emitted when a presented coupon code is not in the table.
pub const UNKNOWN_COUPON_WARNING: &str = "Unknown coupon";

/// The result of a discount calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// The combined discount amount.
    pub amount: Decimal,
    /// Advisory warnings raised while computing the discount.
    pub warnings: Vec<String>,
}

/// Calculates the total discount for an invoice.
///
/// The membership component is a fraction of the subtotal for gold and
/// platinum members; everyone else gets the flat fallback amount when
/// the subtotal is strictly above its gate. The coupon component is
/// added on top when the trimmed code matches the coupon table; an
/// unmatched code contributes nothing and raises the
/// [`UNKNOWN_COUPON_WARNING`] advisory instead.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::calculate_discount;
/// use pricing_engine::config::DiscountsConfig;
/// use pricing_engine::models::Invoice;
/// ```
pub fn calculate_discount(
    invoice: &Invoice,
    subtotal: Decimal,
    config: &DiscountsConfig,
) -> DiscountOutcome {
    let mut warnings = Vec::new();
    let membership = &config.membership;

    let mut amount = match invoice.membership() {
        Membership::Gold => subtotal * membership.gold_rate,
        Membership::Platinum => subtotal * membership.platinum_rate,
        Membership::Standard => {
            if subtotal > membership.standard_flat.min_subtotal {
                membership.standard_flat.amount
            } else {
                Decimal::ZERO
            }
        }
    };

    if let Some(code) = invoice.coupon_code() {
        match config.coupons.get(code) {
            Some(rate) => amount += subtotal * *rate,
            None => warnings.push(UNKNOWN_COUPON_WARNING.to_string()),
        }
    }

    DiscountOutcome { amount, warnings }
}
