//! Invoice pricing orchestration.
//!
//! This module sequences validation, line item aggregation, and the
//! shipping, discount and tax calculators into the final payable total.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::error::{PricingError, PricingResult};
use crate::models::{Invoice, Membership, PriceBreakdown, PriceQuote};

use super::discount::calculate_discount;
use super::shipping::calculate_shipping;
use super::subtotal::{calculate_fragile_fee, calculate_subtotal};
use super::tax::calculate_tax;
use super::validation::validate_invoice;

/// Warning emitted when a large order is placed without a discounted
/// membership tier.
pub const MEMBERSHIP_UPGRADE_WARNING: &str = "Consider membership upgrade";

/// Prices an invoice against the loaded rule tables.
///
/// The computation is a pure function of the invoice and the
/// configuration: no I/O, no shared mutable state, and identical quotes
/// for identical inputs.
///
/// Steps, in order:
/// 1. validate the invoice; any problem aborts the call with
///    [`PricingError::InvalidInvoice`] listing every problem
/// 2. aggregate the line items into a subtotal and fragile fee
/// 3. look up the shipping cost for the country and subtotal
/// 4. compute the membership and coupon discount, collecting warnings
/// 5. tax the taxable amount (`subtotal - discount`; the sign is
///    preserved when the discount exceeds the subtotal)
/// 6. assemble the total and clamp it to be non-negative
/// 7. append the membership-upgrade advisory for large orders placed
///    without a gold or platinum membership
///
/// The coupon warning, when present, always precedes the upgrade
/// advisory.
///
/// # Errors
///
/// Returns [`PricingError::InvalidInvoice`] when validation fails; the
/// message joins all detected problems with `"; "`.
pub fn price_invoice(invoice: &Invoice, config: &PricingConfig) -> PricingResult<PriceQuote> {
    let problems = validate_invoice(invoice);
    if !problems.is_empty() {
        return Err(PricingError::InvalidInvoice {
            message: problems.join("; "),
        });
    }

    let subtotal = calculate_subtotal(&invoice.items);
    let fragile_fee = calculate_fragile_fee(&invoice.items, config.surcharges().fragile_per_unit);
    let shipping = calculate_shipping(&invoice.country, subtotal, config.shipping());

    let discount_outcome = calculate_discount(invoice, subtotal, config.discounts());
    let discount = discount_outcome.amount;
    let mut warnings = discount_outcome.warnings;

    let tax = calculate_tax(&invoice.country, subtotal - discount, config.tax());

    let total = (subtotal + shipping + fragile_fee + tax - discount).max(Decimal::ZERO);

    if subtotal > config.discounts().upgrade_advisory.min_subtotal
        && invoice.membership() == Membership::Standard
    {
        warnings.push(MEMBERSHIP_UPGRADE_WARNING.to_string());
    }

    Ok(PriceQuote {
        invoice_id: invoice.invoice_id.clone(),
        customer_id: invoice.customer_id.clone(),
        breakdown: PriceBreakdown {
            subtotal,
            shipping,
            fragile_fee,
            discount,
            tax,
        },
        total,
        warnings,
    })
}
