//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! rule tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PricingError, PricingResult};

use super::types::{
    DiscountsConfig, EngineMetadata, PricingConfig, ShippingConfig, ShippingTier, SurchargeConfig,
    TaxConfig,
};

/// Loads and provides access to the pricing configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the shipping tier tables before handing out an
/// immutable [`PricingConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/pricing/
/// ├── pricing.yaml     # Rule set metadata
/// ├── shipping.yaml    # Per-country shipping tiers
/// ├── tax.yaml         # Per-country flat tax rates
/// ├── discounts.yaml   # Membership, coupon and advisory rules
/// └── surcharges.yaml  # Fragile handling fee
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing").unwrap();
/// println!("Loaded rule set: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/pricing")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A shipping tier table is structurally unusable (empty, missing
    ///   its open-ended final tier, or with non-ascending thresholds)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pricing_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/pricing")?;
    /// # Ok::<(), pricing_engine::error::PricingError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("pricing.yaml"))?;

        let shipping_path = path.join("shipping.yaml");
        let shipping = Self::load_yaml::<ShippingConfig>(&shipping_path)?;
        Self::validate_shipping(&shipping, &shipping_path)?;

        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;
        let discounts = Self::load_yaml::<DiscountsConfig>(&path.join("discounts.yaml"))?;
        let surcharges = Self::load_yaml::<SurchargeConfig>(&path.join("surcharges.yaml"))?;

        let config = PricingConfig::new(metadata, shipping, tax, discounts, surcharges);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that every tier table can answer any subtotal.
    fn validate_shipping(shipping: &ShippingConfig, path: &Path) -> PricingResult<()> {
        for (country, tiers) in &shipping.countries {
            Self::validate_tiers(country, tiers, path)?;
        }
        Self::validate_tiers("default", &shipping.default, path)
    }

    /// Checks a single tier list: non-empty, exactly one open-ended tier
    /// in the final position, and strictly ascending thresholds.
    fn validate_tiers(label: &str, tiers: &[ShippingTier], path: &Path) -> PricingResult<()> {
        let parse_error = |message: String| PricingError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let Some((last, bounded)) = tiers.split_last() else {
            return Err(parse_error(format!(
                "shipping tiers for '{}' are empty",
                label
            )));
        };

        if last.below.is_some() {
            return Err(parse_error(format!(
                "shipping tiers for '{}' must end with an open-ended tier",
                label
            )));
        }

        let mut previous = None;
        for tier in bounded {
            let Some(limit) = tier.below else {
                return Err(parse_error(format!(
                    "shipping tiers for '{}' have an open-ended tier before the last",
                    label
                )));
            };
            if previous.is_some_and(|p| limit <= p) {
                return Err(parse_error(format!(
                    "shipping tiers for '{}' must have strictly ascending thresholds",
                    label
                )));
            }
            previous = Some(limit);
        }

        Ok(())
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }
}
