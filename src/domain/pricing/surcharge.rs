//! Surcharge rules.
//!
//! Each rule multiplies the running price, so order matters: the copper
//! surcharge is applied to an amount that already includes K4.

use crate::domain::catalog::{ConductorMaterial, FactorK, OilType, TransformerConfiguration};

/// A multiplicative adjustment triggered by a configuration attribute.
#[derive(Debug, Clone, Copy)]
pub struct Surcharge {
    /// Stable identifier reported with quotes.
    pub name: &'static str,
    pub multiplier: f64,
    predicate: fn(&TransformerConfiguration) -> bool,
}

impl Surcharge {
    pub const fn new(
        name: &'static str,
        multiplier: f64,
        predicate: fn(&TransformerConfiguration) -> bool,
    ) -> Self {
        Self {
            name,
            multiplier,
            predicate,
        }
    }

    pub fn applies_to(&self, config: &TransformerConfiguration) -> bool {
        (self.predicate)(config)
    }
}

fn is_k4(config: &TransformerConfiguration) -> bool {
    config.factor_k() == FactorK::K4
}

fn is_copper(config: &TransformerConfiguration) -> bool {
    config.material() == ConductorMaterial::Copper
}

fn is_vegetal_oil(config: &TransformerConfiguration) -> bool {
    config.oil_type() == Some(OilType::Vegetal)
}

/// The surcharges in application order.
pub const STANDARD_SURCHARGES: [Surcharge; 3] = [
    Surcharge::new("factor_k4", 1.08, is_k4),
    Surcharge::new("copper_winding", 1.35, is_copper),
    Surcharge::new("vegetal_oil", 1.15, is_vegetal_oil),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{DryConfiguration, InputVoltage, OilConfiguration, PowerRating};

    fn dry(material: ConductorMaterial, factor_k: FactorK) -> TransformerConfiguration {
        TransformerConfiguration::Dry(DryConfiguration {
            power: PowerRating::from_kva(500),
            material,
            factor_k,
            input_voltage: InputVoltage::Kv15,
            function: None,
            output_voltage: None,
            custom_name: None,
        })
    }

    fn oil(oil_type: OilType) -> TransformerConfiguration {
        TransformerConfiguration::Oil(OilConfiguration {
            power: PowerRating::from_kva(500),
            material: ConductorMaterial::Aluminum,
            factor_k: FactorK::K1,
            input_voltage: InputVoltage::Kv15,
            oil_type,
            function: None,
            output_voltage: None,
            custom_name: None,
        })
    }

    #[test]
    fn order_is_k4_then_copper_then_vegetal() {
        let names: Vec<_> = STANDARD_SURCHARGES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["factor_k4", "copper_winding", "vegetal_oil"]);
    }

    #[test]
    fn k4_rule_matches_only_k4() {
        let rule = STANDARD_SURCHARGES[0];
        assert!(rule.applies_to(&dry(ConductorMaterial::Aluminum, FactorK::K4)));
        assert!(!rule.applies_to(&dry(ConductorMaterial::Aluminum, FactorK::K1)));
    }

    #[test]
    fn copper_rule_matches_only_copper() {
        let rule = STANDARD_SURCHARGES[1];
        assert!(rule.applies_to(&dry(ConductorMaterial::Copper, FactorK::K1)));
        assert!(!rule.applies_to(&dry(ConductorMaterial::Aluminum, FactorK::K1)));
    }

    #[test]
    fn vegetal_rule_never_matches_dry_units() {
        let rule = STANDARD_SURCHARGES[2];
        assert!(rule.applies_to(&oil(OilType::Vegetal)));
        assert!(!rule.applies_to(&oil(OilType::Mineral)));
        assert!(!rule.applies_to(&dry(ConductorMaterial::Copper, FactorK::K4)));
    }

    #[test]
    fn every_multiplier_raises_the_price() {
        assert!(STANDARD_SURCHARGES.iter().all(|s| s.multiplier > 1.0));
    }
}
