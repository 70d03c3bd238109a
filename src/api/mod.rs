//! HTTP API module for the Invoice Pricing Engine.
//!
//! This module provides the REST API endpoint for pricing invoices
//! against the loaded rule tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{InvoiceRequest, LineItemRequest, PricingRequest};
pub use response::{ApiError, PricingResponse};
pub use state::AppState;
