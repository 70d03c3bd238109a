//! Line item aggregation functionality.
//!
//! This module sums the line items of an invoice into a subtotal and
//! computes the fragile-handling surcharge.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Sums `unit_price * quantity` across all line items.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::calculate_subtotal;
/// use pricing_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![LineItem {
///     sku: "SKU-100".to_string(),
///     category: "general".to_string(),
///     unit_price: Decimal::new(100, 0),
///     quantity: 2,
///     fragile: false,
/// }];
/// assert_eq!(calculate_subtotal(&items), Decimal::new(200, 0));
/// ```
pub fn calculate_subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}

/// Sums the per-unit handling fee over all units of fragile items.
///
/// Items not flagged fragile contribute nothing.
pub fn calculate_fragile_fee(items: &[LineItem], fee_per_unit: Decimal) -> Decimal {
    items
        .iter()
        .filter(|item| item.fragile)
        .map(|item| fee_per_unit * Decimal::from(item.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(unit_price: &str, quantity: i64, fragile: bool) -> LineItem {
        LineItem {
            sku: "SKU-100".to_string(),
            category: "general".to_string(),
            unit_price: dec(unit_price),
            quantity,
            fragile,
        }
    }

    #[test]
    fn test_subtotal_sums_all_line_totals() {
        let items = vec![
            item("100", 2, false),
            item("19.99", 3, false),
            item("0.01", 1, false),
        ];
        assert_eq!(calculate_subtotal(&items), dec("259.98"));
    }

    #[test]
    fn test_subtotal_of_no_items_is_zero() {
        assert_eq!(calculate_subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_fragile_fee_charges_per_unit() {
        let items = vec![item("100", 3, true)];
        assert_eq!(calculate_fragile_fee(&items, dec("5.0")), dec("15.0"));
    }

    #[test]
    fn test_fragile_fee_skips_non_fragile_items() {
        let items = vec![item("100", 3, false), item("50", 2, true)];
        assert_eq!(calculate_fragile_fee(&items, dec("5.0")), dec("10.0"));
    }

    #[test]
    fn test_fragile_fee_is_zero_without_fragile_items() {
        let items = vec![item("100", 3, false)];
        assert_eq!(calculate_fragile_fee(&items, dec("5.0")), Decimal::ZERO);
    }
}
