//! Recipe Ingredient model
//!
//! An ingredient line in a recipe with quantity and unit.

use serde::{Deserialize, Serialize};

use super::{IngredientAmount, Nutrition, NutritionFacts, Unit};
use crate::scaling::trim_trailing_zeros;

/// An ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    /// Display abbreviation, e.g. "tbsp"
    pub unit: String,
    /// Canonical unit name, e.g. "Tablespoon"
    pub unit_name: String,
    /// e.g. "room temperature", "diced"
    #[serde(default)]
    pub notes: String,
    /// Position in the ingredient list
    #[serde(default)]
    pub order: u32,
    /// Nutrition per 100 g, when known
    #[serde(default)]
    pub per_100g: Option<NutritionFacts>,
}

impl RecipeIngredient {
    /// Quantity as written in the recipe, without unnecessary decimals
    ///
    /// Quantities are held to two decimal places, so 1.50 prints "1.5"
    /// and 2.00 prints "2".
    pub fn formatted_quantity(&self) -> String {
        trim_trailing_zeros(&format!("{:.2}", self.quantity))
    }

    /// The amount a rendered page carries for this ingredient
    pub fn amount(&self) -> IngredientAmount {
        IngredientAmount::new(self.quantity, self.unit.clone(), self.unit_name.clone())
    }

    /// Weight of this ingredient in grams
    ///
    /// Uses the unit catalog's gram weight, looked up by canonical name and
    /// then by abbreviation. Returns `None` if neither is known.
    pub fn grams(&self) -> Option<f64> {
        Unit::find(&self.unit_name)
            .or_else(|| Unit::find(&self.unit))
            .and_then(|u| u.to_grams(self.quantity))
    }

    /// Nutrition contributed by this ingredient, if it has facts
    pub fn nutrition(&self) -> Option<Nutrition> {
        let facts = self.per_100g.as_ref()?;
        let grams = match self.grams() {
            Some(g) => g,
            None => {
                tracing::warn!(
                    "No gram weight for unit '{}' ({}). Treating {} as grams.",
                    self.unit_name,
                    self.name,
                    self.quantity
                );
                self.quantity
            }
        };
        Some(Nutrition::from_facts(facts, grams))
    }
}

impl std::fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.formatted_quantity(), self.unit, self.name)
    }
}
