//! Recipe view state
//!
//! Everything that decides how ingredient amounts are displayed: the
//! servings control and the selected unit system. Every interaction
//! re-renders from the stored amounts, so rendering is idempotent.

use serde::{Deserialize, Serialize};

use super::{IngredientAmount, ServingsControl};
use crate::scaling::UnitSystem;

/// Display state for one recipe page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    pub servings: ServingsControl,
    pub system: UnitSystem,
}

impl RecipeView {
    pub fn new(servings: ServingsControl, system: UnitSystem) -> Self {
        Self { servings, system }
    }

    /// Apply the "American units" toggle
    pub fn toggle_units(&mut self, american: bool) {
        self.system = UnitSystem::from_toggle(american);
        tracing::debug!(system = ?self.system, "unit system changed");
    }

    /// Text for the unit system label
    pub fn label(&self) -> &'static str {
        self.system.label()
    }

    pub fn scale_factor(&self) -> f64 {
        self.servings.scale_factor()
    }

    /// Display text for every amount, in order
    pub fn render_all(&self, amounts: &[IngredientAmount]) -> Vec<String> {
        let scale_factor = self.scale_factor();
        tracing::debug!(
            servings = self.servings.current(),
            scale_factor,
            system = ?self.system,
            count = amounts.len(),
            "rendering ingredient amounts"
        );
        amounts
            .iter()
            .map(|amount| amount.display(scale_factor, self.system))
            .collect()
    }
}

impl Default for RecipeView {
    fn default() -> Self {
        Self::new(ServingsControl::new(1), UnitSystem::Metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts() -> Vec<IngredientAmount> {
        vec![
            IngredientAmount::new(500.0, "ml", "Milliliter"),
            IngredientAmount::new(200.0, "g", "Gram"),
            IngredientAmount::new(1.0, "pinch", "Pinch"),
        ]
    }

    #[test]
    fn test_render_all_metric() {
        let view = RecipeView::new(ServingsControl::new(4), UnitSystem::Metric);
        assert_eq!(view.render_all(&amounts()), vec!["500 ml", "200 g", "Pinch"]);
    }

    #[test]
    fn test_toggle_and_rescale() {
        let mut view = RecipeView::new(ServingsControl::new(4), UnitSystem::Metric);
        view.servings.set_input("6");
        assert_eq!(view.render_all(&amounts()), vec!["750 ml", "300 g", "Pinch"]);

        view.toggle_units(true);
        assert_eq!(view.label(), "US");
        assert_eq!(view.render_all(&amounts()), vec!["3.1 Cups", "10.6 Oz", "Pinch"]);

        view.toggle_units(false);
        assert_eq!(view.label(), "Metric");
    }

    #[test]
    fn test_render_is_idempotent() {
        let view = RecipeView::new(ServingsControl::new(3), UnitSystem::UsCustomary);
        let first = view.render_all(&amounts());
        let second = view.render_all(&amounts());
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_view() {
        let view = RecipeView::default();
        assert_eq!(view.scale_factor(), 1.0);
        assert_eq!(view.label(), "Metric");
    }
}
