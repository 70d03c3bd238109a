//! Core data models for the Invoice Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod invoice;
mod price_quote;

pub use invoice::{Invoice, LineItem, Membership};
pub use price_quote::{PriceBreakdown, PriceQuote};
