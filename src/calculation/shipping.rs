//! Shipping cost calculation functionality.
//!
//! This module maps a country and subtotal to a shipping cost through
//! the tiered threshold tables in the configuration.

use rust_decimal::Decimal;

use crate::config::ShippingConfig;

/// Determines the shipping cost for a country and subtotal.
///
/// The country's tier list is scanned in order and the first tier whose
/// `below` bound strictly exceeds the subtotal wins. The comparison is
/// strict: a subtotal exactly equal to a threshold falls into the next
/// tier. The final tier of every list is open-ended, so a cost is
/// always found; unrecognized countries use the default tier list.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::calculate_shipping;
/// use pricing_engine::config::ShippingConfig;
/// use rust_decimal::Decimal;
/// ```
pub fn calculate_shipping(country: &str, subtotal: Decimal, config: &ShippingConfig) -> Decimal {
    config
        .tiers_for(country)
        .iter()
        .find(|tier| tier.below.map_or(true, |limit| subtotal < limit))
        .map(|tier| tier.cost)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShippingTier;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(below: Option<&str>, cost: &str) -> ShippingTier {
        ShippingTier {
            below: below.map(|b| dec(b)),
            cost: dec(cost),
        }
    }

    fn create_test_config() -> ShippingConfig {
        let mut countries = HashMap::new();
        countries.insert(
            "TH".to_string(),
            vec![tier(Some("500"), "60"), tier(None, "0")],
        );
        countries.insert(
            "JP".to_string(),
            vec![tier(Some("4000"), "600"), tier(None, "0")],
        );
        countries.insert(
            "US".to_string(),
            vec![
                tier(Some("100"), "15"),
                tier(Some("300"), "8"),
                tier(None, "0"),
            ],
        );

        ShippingConfig {
            countries,
            default: vec![tier(Some("200"), "25"), tier(None, "0")],
        }
    }

    #[test]
    fn test_us_lowest_tier() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("US", dec("99.99"), &config), dec("15"));
    }

    #[test]
    fn test_us_boundary_falls_into_next_tier() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("US", dec("100.00"), &config), dec("8"));
    }

    #[test]
    fn test_us_middle_tier() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("US", dec("299.99"), &config), dec("8"));
    }

    #[test]
    fn test_us_free_shipping_at_upper_boundary() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("US", dec("300.00"), &config), dec("0"));
    }

    #[test]
    fn test_th_tiers() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("TH", dec("499.99"), &config), dec("60"));
        assert_eq!(calculate_shipping("TH", dec("500"), &config), dec("0"));
    }

    #[test]
    fn test_jp_tiers() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("JP", dec("3999.99"), &config), dec("600"));
        assert_eq!(calculate_shipping("JP", dec("4000"), &config), dec("0"));
    }

    #[test]
    fn test_unknown_country_uses_default_tiers() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("ZZ", dec("199.99"), &config), dec("25"));
        assert_eq!(calculate_shipping("ZZ", dec("200"), &config), dec("0"));
    }

    #[test]
    fn test_zero_subtotal_matches_first_tier() {
        let config = create_test_config();
        assert_eq!(calculate_shipping("US", Decimal::ZERO, &config), dec("15"));
    }
}
