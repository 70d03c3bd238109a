//! Request types for the Invoice Pricing Engine API.
//!
//! This module defines the JSON request structures for the `/price` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Invoice, LineItem};

/// Request body for the `/price` endpoint.
///
/// Wraps the invoice to be priced; all rule tables come from the
/// server-side configuration, not the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    /// The invoice to price.
    pub invoice: InvoiceRequest,
}

/// Invoice information in a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Opaque invoice identifier.
    pub invoice_id: String,
    /// Opaque customer identifier.
    pub customer_id: String,
    /// ISO-style country code driving shipping and tax lookup.
    pub country: String,
    /// Membership code; unrecognized values behave as standard.
    pub membership: String,
    /// Optional coupon code.
    #[serde(default)]
    pub coupon: Option<String>,
    /// The purchased line items.
    pub items: Vec<LineItemRequest>,
}

/// Line item information in a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Product identifier.
    pub sku: String,
    /// Free-text product category.
    pub category: String,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i64,
    /// Whether the item needs fragile handling.
    #[serde(default)]
    pub fragile: bool,
}

impl From<InvoiceRequest> for Invoice {
    fn from(req: InvoiceRequest) -> Self {
        Invoice {
            invoice_id: req.invoice_id,
            customer_id: req.customer_id,
            country: req.country,
            membership: req.membership,
            coupon: req.coupon,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            sku: req.sku,
            category: req.category,
            unit_price: req.unit_price,
            quantity: req.quantity,
            fragile: req.fragile,
        }
    }
}
