//! Tax calculation functionality.
//!
//! This module applies a flat per-country tax rate to the taxable
//! amount.

use rust_decimal::Decimal;

use crate::config::TaxConfig;

/// Calculates tax on a taxable amount for a country.
///
/// Unrecognized countries use the default rate. The input is NOT
/// clamped: when the discount exceeds the subtotal, the taxable amount
/// is negative and the tax contribution is negative too. Only the
/// final total is clamped to zero.
pub fn calculate_tax(country: &str, taxable_amount: Decimal, config: &TaxConfig) -> Decimal {
    taxable_amount * config.rate_for(country)
}
