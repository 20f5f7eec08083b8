//! Ingredient amount model
//!
//! The per-ingredient values a rendered recipe page carries, and the
//! fail-soft conversion from raw attribute strings.

use serde::{Deserialize, Serialize};

use crate::scaling::{quantity_or_zero, render, UnitSystem};

/// Raw attributes read off an ingredient element
///
/// Every field is optional text; nothing is validated until it is turned
/// into an [`IngredientAmount`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAttributes {
    #[serde(default)]
    pub original_quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
}

/// Quantity and units of one ingredient at the recipe's original servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub original_quantity: f64,
    /// Display abbreviation, e.g. "ml"
    pub unit: String,
    /// Canonical unit name, e.g. "Milliliter" or "to taste"
    pub unit_name: String,
}

impl IngredientAmount {
    pub fn new(original_quantity: f64, unit: impl Into<String>, unit_name: impl Into<String>) -> Self {
        Self {
            original_quantity,
            unit: unit.into(),
            unit_name: unit_name.into(),
        }
    }

    /// Build from raw attributes, coercing missing or unparsable values
    ///
    /// A quantity that is not a number becomes 0; missing unit labels
    /// become empty strings.
    pub fn from_attributes(attrs: &IngredientAttributes) -> Self {
        Self {
            original_quantity: quantity_or_zero(attrs.original_quantity.as_deref()),
            unit: attrs.unit.clone().unwrap_or_default(),
            unit_name: attrs.unit_name.clone().unwrap_or_default(),
        }
    }

    /// Display text for the given scale factor and unit system
    pub fn display(&self, scale_factor: f64, system: UnitSystem) -> String {
        render(
            self.original_quantity,
            &self.unit_name,
            &self.unit,
            scale_factor,
            system,
        )
    }
}

impl From<&IngredientAttributes> for IngredientAmount {
    fn from(attrs: &IngredientAttributes) -> Self {
        Self::from_attributes(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(q: Option<&str>, unit: Option<&str>, unit_name: Option<&str>) -> IngredientAttributes {
        IngredientAttributes {
            original_quantity: q.map(String::from),
            unit: unit.map(String::from),
            unit_name: unit_name.map(String::from),
        }
    }

    #[test]
    fn test_from_attributes_parses_values() {
        let amount = IngredientAmount::from_attributes(&attrs(Some("250.00"), Some("ml"), Some("Milliliter")));
        assert_eq!(amount, IngredientAmount::new(250.0, "ml", "Milliliter"));
    }

    #[test]
    fn test_from_attributes_fail_soft() {
        let amount = IngredientAmount::from_attributes(&attrs(Some("lots"), Some("ml"), Some("Milliliter")));
        assert_eq!(amount.original_quantity, 0.0);
        assert_eq!(amount.display(2.0, UnitSystem::Metric), "0 ml");

        let amount = IngredientAmount::from_attributes(&attrs(None, None, None));
        assert_eq!(amount, IngredientAmount::new(0.0, "", ""));
        assert_eq!(amount.display(1.0, UnitSystem::Metric), "0 ");
    }

    #[test]
    fn test_display_uses_scale_and_system() {
        let amount = IngredientAmount::new(200.0, "ml", "Milliliter");
        assert_eq!(amount.display(1.5, UnitSystem::Metric), "300 ml");
        assert_eq!(amount.display(1.5, UnitSystem::UsCustomary), "1.3 Cups");
    }

    #[test]
    fn test_attributes_deserialize_from_dataset_keys() {
        let json = r#"{"originalQuantity": "2", "unit": "tsp", "unitName": "Teaspoon"}"#;
        let parsed: IngredientAttributes = serde_json::from_str(json).unwrap();
        let amount = IngredientAmount::from(&parsed);
        assert_eq!(amount, IngredientAmount::new(2.0, "tsp", "Teaspoon"));

        let parsed: IngredientAttributes = serde_json::from_str("{}").unwrap();
        assert!(parsed.original_quantity.is_none());
    }
}
