//! Scaling Tools
//!
//! Request/response wrappers around the scaler for single quantities,
//! rendered pages and whole recipes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};
use crate::models::{
    IngredientAmount, IngredientAttributes, Nutrition, Recipe, RecipeView, ServingsControl,
    MAX_SERVINGS, MIN_SERVINGS,
};
use crate::scaling::{render, UnitSystem};

/// Request for convert_quantity
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub quantity: f64,
    pub unit_name: String,
    /// Display abbreviation; defaults to the unit name
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default = "default_scale")]
    pub scale_factor: f64,
    #[serde(default)]
    pub system: UnitSystem,
}

fn default_scale() -> f64 {
    1.0
}

/// Response for convert_quantity
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub quantity: f64,
    pub unit_name: String,
    pub scale_factor: f64,
    pub system: UnitSystem,
    pub display: String,
}

/// Snapshot of a rendered recipe page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    /// The servings input's original-servings attribute
    #[serde(default)]
    pub original_servings: Option<String>,
    /// Current text of the servings input
    #[serde(default)]
    pub servings_input: Option<String>,
    /// Presses of the +/- servings buttons after the input was read;
    /// negative for decrements
    #[serde(default)]
    pub steps: i32,
    /// State of the "American units" toggle
    #[serde(default)]
    pub american_units: bool,
    #[serde(default)]
    pub ingredients: Vec<IngredientAttributes>,
}

impl PageSnapshot {
    /// Load a page snapshot document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> ScaleResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Response for render_page
#[derive(Debug, Serialize)]
pub struct RenderPageResponse {
    pub original_servings: u32,
    pub servings: u32,
    pub scale_factor: f64,
    pub unit_label: &'static str,
    pub amounts: Vec<String>,
}

/// A displayed ingredient line of a scaled recipe
#[derive(Debug, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub amount: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Response for scale_recipe
#[derive(Debug, Serialize)]
pub struct ScaledRecipeResponse {
    pub title: String,
    pub original_servings: u32,
    pub servings: u32,
    pub scale_factor: f64,
    pub unit_label: &'static str,
    pub ingredients: Vec<ScaledIngredient>,
    pub nutrition_per_serving: Nutrition,
}

/// Convert a single quantity
pub fn convert_quantity(req: ConvertRequest) -> ConvertResponse {
    let unit = req.unit.as_deref().unwrap_or(&req.unit_name);
    let display = render(req.quantity, &req.unit_name, unit, req.scale_factor, req.system);

    ConvertResponse {
        quantity: req.quantity,
        unit_name: req.unit_name,
        scale_factor: req.scale_factor,
        system: req.system,
        display,
    }
}

/// Re-render every ingredient of a page snapshot
///
/// Never fails: unreadable attributes fall back to their defaults.
pub fn render_page(page: &PageSnapshot) -> RenderPageResponse {
    let mut servings = ServingsControl::from_attributes(
        page.original_servings.as_deref(),
        page.servings_input.as_deref(),
    );
    for _ in 0..page.steps.unsigned_abs() {
        let changed = if page.steps > 0 {
            servings.increment()
        } else {
            servings.decrement()
        };
        if !changed {
            break;
        }
    }
    let view = RecipeView::new(servings, UnitSystem::from_toggle(page.american_units));

    let amounts: Vec<IngredientAmount> = page.ingredients.iter().map(IngredientAmount::from).collect();

    RenderPageResponse {
        original_servings: servings.original(),
        servings: servings.current(),
        scale_factor: view.scale_factor(),
        unit_label: view.label(),
        amounts: view.render_all(&amounts),
    }
}

/// Scale a recipe to a serving count and display it in a unit system
///
/// `servings` defaults to the recipe's own count. Requests outside the
/// servings control's range are rejected rather than clamped.
pub fn scale_recipe(
    recipe: &Recipe,
    servings: Option<u32>,
    system: UnitSystem,
) -> Result<ScaledRecipeResponse, String> {
    let mut control = ServingsControl::new(recipe.servings);
    if let Some(requested) = servings {
        if !(MIN_SERVINGS..=MAX_SERVINGS).contains(&requested) {
            return Err(format!(
                "Servings must be between {} and {}, got {}",
                MIN_SERVINGS, MAX_SERVINGS, requested
            ));
        }
        control.set_input(&requested.to_string());
    }

    let view = RecipeView::new(control, system);
    let displays = view.render_all(&recipe.amounts());

    let ingredients = recipe
        .ingredients
        .iter()
        .zip(displays)
        .map(|(ingredient, amount)| ScaledIngredient {
            name: ingredient.name.clone(),
            amount,
            notes: ingredient.notes.clone(),
        })
        .collect();

    Ok(ScaledRecipeResponse {
        title: recipe.title.clone(),
        original_servings: control.original(),
        servings: control.current(),
        scale_factor: view.scale_factor(),
        unit_label: view.label(),
        ingredients,
        nutrition_per_serving: recipe.nutrition_per_serving(),
    })
}
