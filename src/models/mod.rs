//! Data models
//!
//! Recipes, ingredient amounts and the view state used to display them.

mod ingredient_amount;
mod nutrition;
mod recipe;
mod recipe_ingredient;
mod servings;
mod unit;
mod view;

pub use ingredient_amount::{IngredientAmount, IngredientAttributes};
pub use nutrition::{Nutrition, NutritionFacts};
pub use recipe::Recipe;
pub use recipe_ingredient::RecipeIngredient;
pub use servings::{ServingsControl, MAX_SERVINGS, MIN_SERVINGS};
pub use unit::{Unit, UnitKind};
pub use view::RecipeView;
