//! Configuration loading and management for the Invoice Pricing Engine.
//!
//! This module provides functionality to load pricing rule tables from
//! YAML files, including shipping tiers, tax rates, discount rules and
//! surcharges.
//!
//! # Example
//!
//! ```no_run
//! use pricing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pricing").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DiscountsConfig, EngineMetadata, FlatDiscount, MembershipDiscounts, PricingConfig,
    ShippingConfig, ShippingTier, SurchargeConfig, TaxConfig, UpgradeAdvisory,
};
