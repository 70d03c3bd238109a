//! Invoice Pricing Engine
//!
//! This crate computes the payable total of a customer invoice, applying
//! country-specific shipping tiers, flat per-country tax rates, membership
//! and coupon discounts, and fragile-handling surcharges.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
