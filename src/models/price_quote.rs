//! Price quote models for the Invoice Pricing Engine.
//!
//! This module contains the [`PriceQuote`] type and its component
//! breakdown, the complete output of pricing a single invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The individual components that make up an invoice total.
///
/// # Example
///
/// ```
/// use pricing_engine::models::PriceBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PriceBreakdown {
///     subtotal: Decimal::from_str("200.00").unwrap(),
///     shipping: Decimal::from_str("8.00").unwrap(),
///     fragile_fee: Decimal::ZERO,
///     discount: Decimal::ZERO,
///     tax: Decimal::from_str("16.00").unwrap(),
/// };
/// assert_eq!(
///     breakdown.subtotal + breakdown.shipping + breakdown.tax,
///     Decimal::from_str("224.00").unwrap(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Sum of `unit_price * quantity` across all line items.
    pub subtotal: Decimal,
    /// Shipping cost from the country's tier table.
    pub shipping: Decimal,
    /// Per-unit surcharge for items flagged fragile.
    pub fragile_fee: Decimal,
    /// Combined membership and coupon discount.
    pub discount: Decimal,
    /// Tax on the taxable amount (`subtotal - discount`).
    ///
    /// May be negative when the discount exceeds the subtotal; the sign
    /// is preserved and only the final total is clamped.
    pub tax: Decimal,
}

/// The complete result of pricing an invoice.
///
/// A quote is a pure function of the invoice and the pricing rules, so
/// pricing the same invoice twice yields equal quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// The ID of the invoice the quote is for.
    pub invoice_id: String,
    /// The ID of the customer the invoice belongs to.
    pub customer_id: String,
    /// Component amounts that were assembled into the total.
    pub breakdown: PriceBreakdown,
    /// Final payable amount, clamped to be non-negative.
    pub total: Decimal,
    /// Advisory warnings, in emission order.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_quote() -> PriceQuote {
        PriceQuote {
            invoice_id: "inv_001".to_string(),
            customer_id: "cust_001".to_string(),
            breakdown: PriceBreakdown {
                subtotal: dec("200.00"),
                shipping: dec("8.00"),
                fragile_fee: dec("0"),
                discount: dec("0"),
                tax: dec("16.00"),
            },
            total: dec("224.00"),
            warnings: vec![],
        }
    }

    #[test]
    fn test_quote_serialization() {
        let quote = create_sample_quote();
        let json = serde_json::to_string(&quote).unwrap();

        assert!(json.contains("\"invoice_id\":\"inv_001\""));
        assert!(json.contains("\"customer_id\":\"cust_001\""));
        assert!(json.contains("\"breakdown\":{"));
        assert!(json.contains("\"subtotal\":\"200.00\""));
        assert!(json.contains("\"total\":\"224.00\""));
        assert!(json.contains("\"warnings\":[]"));
    }

    #[test]
    fn test_quote_deserialization() {
        let json = r#"{
            "invoice_id": "inv_001",
            "customer_id": "cust_001",
            "breakdown": {
                "subtotal": "12000",
                "shipping": "0",
                "fragile_fee": "0",
                "discount": "20",
                "tax": "838.60"
            },
            "total": "12818.60",
            "warnings": ["Consider membership upgrade"]
        }"#;

        let quote: PriceQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.breakdown.discount, dec("20"));
        assert_eq!(quote.total, dec("12818.6"));
        assert_eq!(quote.warnings, vec!["Consider membership upgrade"]);
    }

    #[test]
    fn test_equal_quotes_compare_equal() {
        assert_eq!(create_sample_quote(), create_sample_quote());
    }

    #[test]
    fn test_negative_tax_survives_round_trip() {
        let mut quote = create_sample_quote();
        quote.breakdown.tax = dec("-5.25");

        let json = serde_json::to_string(&quote).unwrap();
        let deserialized: PriceQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.breakdown.tax, dec("-5.25"));
    }
}
