//! Transformer configuration assembled by the kiosk wizard.
//!
//! The configuration is a tagged union on `type`: only the oil variant
//! carries an `oilType`, so a dry unit can never be priced with an oil
//! surcharge by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PowerRating;

/// Cooling / insulation family of the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformerKind {
    /// Dry-type (cast resin) transformer.
    Dry,
    /// Oil-immersed transformer.
    Oil,
}

impl TransformerKind {
    /// Wire/seed identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformerKind::Dry => "dry",
            TransformerKind::Oil => "oil",
        }
    }

    /// Label printed on quotations.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransformerKind::Dry => "Seco",
            TransformerKind::Oil => "a Óleo",
        }
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winding conductor material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "copper",
            ConductorMaterial::Aluminum => "aluminum",
        }
    }
}

impl fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Harmonic-protection grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorK {
    K1,
    K4,
}

impl FactorK {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorK::K1 => "K1",
            FactorK::K4 => "K4",
        }
    }
}

impl fmt::Display for FactorK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary (input) voltage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InputVoltage {
    #[serde(rename = "15kV")]
    Kv15,
    #[serde(rename = "24kV")]
    Kv24,
    #[serde(rename = "36kV")]
    Kv36,
}

impl InputVoltage {
    /// Every voltage class, lowest first.
    pub const ALL: [InputVoltage; 3] = [InputVoltage::Kv15, InputVoltage::Kv24, InputVoltage::Kv36];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputVoltage::Kv15 => "15kV",
            InputVoltage::Kv24 => "24kV",
            InputVoltage::Kv36 => "36kV",
        }
    }
}

impl fmt::Display for InputVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insulating fluid of an oil transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OilType {
    Vegetal,
    Mineral,
}

impl OilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OilType::Vegetal => "vegetal",
            OilType::Mineral => "mineral",
        }
    }
}

/// Whether the unit lowers or raises voltage. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformerFunction {
    StepDown,
    StepUp,
}

/// Secondary (output) voltage. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputVoltage {
    #[serde(rename = "440/220")]
    V440_220,
    #[serde(rename = "220/127")]
    V220_127,
    #[serde(rename = "380/220")]
    V380_220,
    #[serde(rename = "800/462")]
    V800_462,
    #[serde(rename = "690")]
    V690,
}

/// Dry-type transformer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryConfiguration {
    pub power: PowerRating,
    pub material: ConductorMaterial,
    pub factor_k: FactorK,
    pub input_voltage: InputVoltage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<TransformerFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_voltage: Option<OutputVoltage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

/// Oil-immersed transformer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilConfiguration {
    pub power: PowerRating,
    pub material: ConductorMaterial,
    pub factor_k: FactorK,
    pub input_voltage: InputVoltage,
    pub oil_type: OilType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<TransformerFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_voltage: Option<OutputVoltage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

/// A complete transformer configuration, tagged by `type`.
///
/// ```ignore
/// {"type": "oil", "power": 300, "material": "aluminum", "factorK": "K1",
///  "inputVoltage": "15kV", "oilType": "mineral"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransformerConfiguration {
    Dry(DryConfiguration),
    Oil(OilConfiguration),
}

impl TransformerConfiguration {
    pub fn kind(&self) -> TransformerKind {
        match self {
            TransformerConfiguration::Dry(_) => TransformerKind::Dry,
            TransformerConfiguration::Oil(_) => TransformerKind::Oil,
        }
    }

    pub fn power(&self) -> PowerRating {
        match self {
            TransformerConfiguration::Dry(c) => c.power,
            TransformerConfiguration::Oil(c) => c.power,
        }
    }

    pub fn material(&self) -> ConductorMaterial {
        match self {
            TransformerConfiguration::Dry(c) => c.material,
            TransformerConfiguration::Oil(c) => c.material,
        }
    }

    pub fn factor_k(&self) -> FactorK {
        match self {
            TransformerConfiguration::Dry(c) => c.factor_k,
            TransformerConfiguration::Oil(c) => c.factor_k,
        }
    }

    pub fn input_voltage(&self) -> InputVoltage {
        match self {
            TransformerConfiguration::Dry(c) => c.input_voltage,
            TransformerConfiguration::Oil(c) => c.input_voltage,
        }
    }

    /// The oil type; `None` for dry units.
    pub fn oil_type(&self) -> Option<OilType> {
        match self {
            TransformerConfiguration::Dry(_) => None,
            TransformerConfiguration::Oil(c) => Some(c.oil_type),
        }
    }

    /// Fragment used to seed the competitor comparison:
    /// `{type}-{power}-{material}-{factorK}`.
    pub fn seed_fragment(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.kind(),
            self.power(),
            self.material(),
            self.factor_k()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn oil_300() -> TransformerConfiguration {
        TransformerConfiguration::Oil(OilConfiguration {
            power: PowerRating::from_kva(300),
            material: ConductorMaterial::Aluminum,
            factor_k: FactorK::K1,
            input_voltage: InputVoltage::Kv15,
            oil_type: OilType::Mineral,
            function: None,
            output_voltage: None,
            custom_name: None,
        })
    }

    #[test]
    fn deserializes_oil_configuration_from_wizard_json() {
        let config: TransformerConfiguration = serde_json::from_value(json!({
            "type": "oil",
            "power": 300,
            "material": "aluminum",
            "factorK": "K1",
            "inputVoltage": "15kV",
            "oilType": "mineral"
        }))
        .unwrap();

        assert_eq!(config, oil_300());
    }

    #[test]
    fn deserializes_dry_configuration_with_display_fields() {
        let config: TransformerConfiguration = serde_json::from_value(json!({
            "type": "dry",
            "power": 112.5,
            "material": "copper",
            "factorK": "K4",
            "inputVoltage": "36kV",
            "function": "step-down",
            "outputVoltage": "380/220",
            "customName": "Subestação 2"
        }))
        .unwrap();

        assert_eq!(config.kind(), TransformerKind::Dry);
        assert_eq!(config.power(), PowerRating::from_tenths(1125));
        assert_eq!(config.input_voltage(), InputVoltage::Kv36);
        assert_eq!(config.oil_type(), None);
        match config {
            TransformerConfiguration::Dry(dry) => {
                assert_eq!(dry.function, Some(TransformerFunction::StepDown));
                assert_eq!(dry.output_voltage, Some(OutputVoltage::V380_220));
                assert_eq!(dry.custom_name.as_deref(), Some("Subestação 2"));
            }
            TransformerConfiguration::Oil(_) => panic!("Expected dry configuration"),
        }
    }

    #[test]
    fn oil_configuration_requires_oil_type() {
        let result: Result<TransformerConfiguration, _> = serde_json::from_value(json!({
            "type": "oil",
            "power": 300,
            "material": "aluminum",
            "factorK": "K1",
            "inputVoltage": "15kV"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_voltage_class_is_rejected() {
        let result: Result<TransformerConfiguration, _> = serde_json::from_value(json!({
            "type": "dry",
            "power": 300,
            "material": "aluminum",
            "factorK": "K1",
            "inputVoltage": "13.8kV"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_type_tag_and_camel_case() {
        let value = serde_json::to_value(oil_300()).unwrap();
        assert_eq!(value["type"], "oil");
        assert_eq!(value["factorK"], "K1");
        assert_eq!(value["inputVoltage"], "15kV");
        assert_eq!(value["oilType"], "mineral");
        assert!(value.get("customName").is_none());
    }

    #[test]
    fn seed_fragment_uses_catalogue_labels() {
        assert_eq!(oil_300().seed_fragment(), "oil-300-aluminum-K1");
    }
}
