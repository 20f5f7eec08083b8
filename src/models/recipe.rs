//! Recipe model
//!
//! A recipe document: title, serving count and ingredient lines.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{IngredientAmount, Nutrition, RecipeIngredient};
use crate::error::{ScaleError, ScaleResult};

/// A recipe with its ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

fn default_servings() -> u32 {
    4
}

impl Recipe {
    /// Parse a recipe from JSON text
    ///
    /// Ingredients are put into list order.
    pub fn from_json(json: &str) -> ScaleResult<Self> {
        let mut recipe: Recipe = serde_json::from_str(json)?;
        recipe.ingredients.sort_by_key(|i| i.order);
        Ok(recipe)
    }

    /// Load a recipe document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> ScaleResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Amounts for every ingredient line, in order
    pub fn amounts(&self) -> Vec<IngredientAmount> {
        self.ingredients.iter().map(RecipeIngredient::amount).collect()
    }

    /// Nutrition per serving, each value rounded to one decimal
    ///
    /// Ingredients without nutrition facts contribute nothing. A recipe
    /// with zero servings is treated as a single serving.
    pub fn nutrition_per_serving(&self) -> Nutrition {
        let total: Nutrition = self
            .ingredients
            .iter()
            .filter_map(RecipeIngredient::nutrition)
            .sum();
        let servings = self.servings.max(1);
        total.scale(1.0 / f64::from(servings)).rounded()
    }
}
