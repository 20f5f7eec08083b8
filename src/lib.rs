//! panscale Library
//!
//! Servings scaling and metric/US unit display for recipe ingredients.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod scaling;
pub mod tools;

pub use error::{ScaleError, ScaleResult};
pub use models::{IngredientAmount, RecipeView, ServingsControl};
pub use scaling::{render, UnitSystem};
