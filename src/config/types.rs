//! Configuration types for invoice pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The rule tables are
//! loaded once at service construction and never mutated afterward.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the pricing rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// The currency all amounts are denominated in.
    pub currency: String,
}

/// One shipping tier: a cost that applies below an upper bound.
///
/// A tier with no `below` bound is open-ended and always matches; every
/// tier list ends with one, so a lookup is guaranteed to return a cost.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShippingTier {
    /// Exclusive upper bound on the subtotal; `None` means unbounded.
    #[serde(default)]
    pub below: Option<Decimal>,
    /// Shipping cost charged within this tier.
    pub cost: Decimal,
}

/// Shipping tier tables by country.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingConfig {
    /// Ordered tier lists keyed by country code.
    pub countries: HashMap<String, Vec<ShippingTier>>,
    /// Tier list applied to countries with no dedicated table.
    pub default: Vec<ShippingTier>,
}

impl ShippingConfig {
    /// Returns the tier list for a country, falling back to the default
    /// table for unrecognized codes.
    pub fn tiers_for(&self, country: &str) -> &[ShippingTier] {
        self.countries
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&self.default)
    }
}

/// Flat tax rates by country.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Tax rates keyed by country code.
    pub rates: HashMap<String, Decimal>,
    /// Rate applied to countries with no dedicated entry.
    pub default_rate: Decimal,
}

impl TaxConfig {
    /// Returns the tax rate for a country, falling back to the default
    /// rate for unrecognized codes.
    pub fn rate_for(&self, country: &str) -> Decimal {
        self.rates
            .get(country)
            .copied()
            .unwrap_or(self.default_rate)
    }
}

/// A flat discount gated on a minimum subtotal.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FlatDiscount {
    /// The flat amount deducted when the gate is met.
    pub amount: Decimal,
    /// Exclusive lower bound: the discount applies when the subtotal is
    /// strictly greater than this value.
    pub min_subtotal: Decimal,
}

/// Discount rates by membership tier.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MembershipDiscounts {
    /// Fractional discount for gold members.
    pub gold_rate: Decimal,
    /// Fractional discount for platinum members.
    pub platinum_rate: Decimal,
    /// Flat discount for everyone else, gated on a minimum subtotal.
    pub standard_flat: FlatDiscount,
}

/// Threshold for the membership-upgrade advisory.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpgradeAdvisory {
    /// Exclusive lower bound: the advisory fires when the subtotal is
    /// strictly greater than this value.
    pub min_subtotal: Decimal,
}

/// Discount configuration from discounts.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountsConfig {
    /// Membership-tier discount rates.
    pub membership: MembershipDiscounts,
    /// Fractional discount rates keyed by coupon code.
    pub coupons: HashMap<String, Decimal>,
    /// Membership-upgrade advisory threshold.
    pub upgrade_advisory: UpgradeAdvisory,
}

/// Surcharge configuration from surcharges.yaml.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SurchargeConfig {
    /// Handling fee charged per unit of every fragile item.
    pub fragile_per_unit: Decimal,
}

/// The complete pricing configuration loaded from YAML files.
///
/// This struct aggregates all rule tables loaded from a pricing
/// configuration directory.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Rule set metadata.
    metadata: EngineMetadata,
    /// Shipping tier tables.
    shipping: ShippingConfig,
    /// Flat tax rates.
    tax: TaxConfig,
    /// Membership and coupon discount rules.
    discounts: DiscountsConfig,
    /// Per-item surcharges.
    surcharges: SurchargeConfig,
}

impl PricingConfig {
    /// Creates a new PricingConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        shipping: ShippingConfig,
        tax: TaxConfig,
        discounts: DiscountsConfig,
        surcharges: SurchargeConfig,
    ) -> Self {
        Self {
            metadata,
            shipping,
            tax,
            discounts,
            surcharges,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the shipping tier tables.
    pub fn shipping(&self) -> &ShippingConfig {
        &self.shipping
    }

    /// Returns the tax rate tables.
    pub fn tax(&self) -> &TaxConfig {
        &self.tax
    }

    /// Returns the discount rules.
    pub fn discounts(&self) -> &DiscountsConfig {
        &self.discounts
    }

    /// Returns the surcharge rules.
    pub fn surcharges(&self) -> &SurchargeConfig {
        &self.surcharges
    }
}
