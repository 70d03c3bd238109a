//! Invoice validation functionality.
//!
//! This module checks the structural and business-rule preconditions on
//! an invoice before any pricing computation runs.

use rust_decimal::Decimal;

use crate::models::Invoice;

/// Validates an invoice, accumulating every detected problem.
///
/// The checks never short-circuit: an invoice with several defects gets
/// a description for each of them, in item order. An empty return value
/// means the invoice is valid.
///
/// Checks performed:
/// - the item list must be non-empty
/// - each item's unit price must not be negative
/// - each item's quantity must be positive
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::validate_invoice;
/// use pricing_engine::models::Invoice;
///
/// let invoice = Invoice {
///     invoice_id: "inv_001".to_string(),
///     customer_id: "cust_001".to_string(),
///     country: "US".to_string(),
///     membership: "standard".to_string(),
///     coupon: None,
///     items: vec![],
/// };
/// let problems = validate_invoice(&invoice);
/// assert_eq!(problems, vec!["invoice must contain at least one line item"]);
/// ```
pub fn validate_invoice(invoice: &Invoice) -> Vec<String> {
    let mut problems = Vec::new();

    if invoice.items.is_empty() {
        problems.push("invoice must contain at least one line item".to_string());
    }

    for item in &invoice.items {
        if item.unit_price < Decimal::ZERO {
            problems.push(format!(
                "item '{}': unit price must not be negative",
                item.sku
            ));
        }
        if item.quantity <= 0 {
            problems.push(format!("item '{}': quantity must be positive", item.sku));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(sku: &str, unit_price: &str, quantity: i64) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            category: "general".to_string(),
            unit_price: dec(unit_price),
            quantity,
            fragile: false,
        }
    }

    fn invoice_with(items: Vec<LineItem>) -> Invoice {
        Invoice {
            invoice_id: "inv_001".to_string(),
            customer_id: "cust_001".to_string(),
            country: "US".to_string(),
            membership: "standard".to_string(),
            coupon: None,
            items,
        }
    }

    #[test]
    fn test_valid_invoice_has_no_problems() {
        let invoice = invoice_with(vec![item("A", "10.00", 1), item("B", "0", 3)]);
        assert!(validate_invoice(&invoice).is_empty());
    }

    #[test]
    fn test_empty_items_is_reported() {
        let invoice = invoice_with(vec![]);
        let problems = validate_invoice(&invoice);
        assert_eq!(problems, vec!["invoice must contain at least one line item"]);
    }

    #[test]
    fn test_negative_unit_price_is_reported() {
        let invoice = invoice_with(vec![item("A", "-1.00", 1)]);
        let problems = validate_invoice(&invoice);
        assert_eq!(problems, vec!["item 'A': unit price must not be negative"]);
    }

    #[test]
    fn test_zero_quantity_is_reported() {
        let invoice = invoice_with(vec![item("A", "10.00", 0)]);
        let problems = validate_invoice(&invoice);
        assert_eq!(problems, vec!["item 'A': quantity must be positive"]);
    }

    #[test]
    fn test_negative_quantity_is_reported() {
        let invoice = invoice_with(vec![item("A", "10.00", -2)]);
        let problems = validate_invoice(&invoice);
        assert_eq!(problems, vec!["item 'A': quantity must be positive"]);
    }

    #[test]
    fn test_all_problems_accumulate_in_item_order() {
        let invoice = invoice_with(vec![item("A", "-1.00", 1), item("B", "10.00", 0)]);
        let problems = validate_invoice(&invoice);
        assert_eq!(
            problems,
            vec![
                "item 'A': unit price must not be negative",
                "item 'B': quantity must be positive",
            ]
        );
    }

    #[test]
    fn test_one_item_can_have_multiple_problems() {
        let invoice = invoice_with(vec![item("A", "-5.00", -1)]);
        let problems = validate_invoice(&invoice);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("unit price"));
        assert!(problems[1].contains("quantity"));
    }

    #[test]
    fn test_zero_unit_price_is_allowed() {
        let invoice = invoice_with(vec![item("A", "0", 1)]);
        assert!(validate_invoice(&invoice).is_empty());
    }
}
