//! Invoice model and related types.
//!
//! This module defines the Invoice and LineItem structs for representing
//! customer orders in the pricing engine, together with the membership
//! tiers that drive discount rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the customer's loyalty membership tier.
///
/// Invoices carry the membership as a free-form string; unrecognized
/// values are treated as [`Membership::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Default tier with no percentage discount.
    Standard,
    /// Gold tier (3% discount on the subtotal).
    Gold,
    /// Platinum tier (5% discount on the subtotal).
    Platinum,
}

impl Membership {
    /// Parses a membership code from an invoice.
    ///
    /// Matching is exact; anything other than `"gold"` or `"platinum"`
    /// falls back to [`Membership::Standard`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pricing_engine::models::Membership;
    ///
    /// assert_eq!(Membership::from_code("platinum"), Membership::Platinum);
    /// assert_eq!(Membership::from_code("gold"), Membership::Gold);
    /// assert_eq!(Membership::from_code("silver"), Membership::Standard);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "gold" => Membership::Gold,
            "platinum" => Membership::Platinum,
            _ => Membership::Standard,
        }
    }
}

/// Represents one purchased product line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier.
    pub sku: String,
    /// Free-text product category.
    pub category: String,
    /// Price of a single unit; must not be negative.
    pub unit_price: Decimal,
    /// Number of units; must be positive.
    pub quantity: i64,
    /// Whether the item needs fragile handling (per-unit surcharge).
    #[serde(default)]
    pub fragile: bool,
}

impl LineItem {
    /// Returns the extended price for this line (`unit_price * quantity`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricing_engine::models::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = LineItem {
    ///     sku: "SKU-100".to_string(),
    ///     category: "general".to_string(),
    ///     unit_price: Decimal::new(1999, 2),
    ///     quantity: 3,
    ///     fragile: false,
    /// };
    /// assert_eq!(item.line_total(), Decimal::new(5997, 2)); // 59.97
    /// ```
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Represents one order to be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Opaque invoice identifier.
    pub invoice_id: String,
    /// Opaque customer identifier.
    pub customer_id: String,
    /// ISO-style country code; unrecognized codes use the default
    /// shipping and tax rules.
    pub country: String,
    /// Membership code (`"standard"`, `"gold"`, `"platinum"`);
    /// unrecognized values behave as standard.
    pub membership: String,
    /// Optional coupon code; absent, empty or whitespace-only all mean
    /// "no coupon".
    #[serde(default)]
    pub coupon: Option<String>,
    /// Ordered line items; must be non-empty.
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Returns the parsed membership tier for this invoice.
    pub fn membership(&self) -> Membership {
        Membership::from_code(&self.membership)
    }

    /// Returns the trimmed coupon code, if one is effectively present.
    ///
    /// Absent, empty and whitespace-only coupons are all normalized to
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricing_engine::models::Invoice;
    ///
    /// let mut invoice = Invoice {
    ///     invoice_id: "inv_001".to_string(),
    ///     customer_id: "cust_001".to_string(),
    ///     country: "US".to_string(),
    ///     membership: "standard".to_string(),
    ///     coupon: Some("  WELCOME10  ".to_string()),
    ///     items: vec![],
    /// };
    /// assert_eq!(invoice.coupon_code(), Some("WELCOME10"));
    ///
    /// invoice.coupon = Some("   ".to_string());
    /// assert_eq!(invoice.coupon_code(), None);
    /// ```
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}
