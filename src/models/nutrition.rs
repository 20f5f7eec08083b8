//! Shared nutrition data structures
//!
//! Per-100 g facts attached to ingredients and the totals derived from them.

use serde::{Deserialize, Serialize};

/// Nutritional values per 100 g of an ingredient, any of which may be unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fibre: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub saturated_fat: Option<f64>,
}

/// Nutritional totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,       // grams
    pub carbs: f64,         // grams
    pub fat: f64,           // grams
    pub fibre: f64,         // grams
    pub sugars: f64,        // grams
    pub sodium_mg: f64,     // milligrams
    pub saturated_fat: f64, // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Totals contributed by `grams` of an ingredient; unknown facts count as zero
    pub fn from_facts(facts: &NutritionFacts, grams: f64) -> Self {
        let per = |v: Option<f64>| v.map(|v| grams / 100.0 * v).unwrap_or(0.0);
        Self {
            calories: per(facts.calories),
            protein: per(facts.protein),
            carbs: per(facts.carbs),
            fat: per(facts.fat),
            fibre: per(facts.fibre),
            sugars: per(facts.sugars),
            sodium_mg: per(facts.sodium_mg),
            saturated_fat: per(facts.saturated_fat),
        }
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        self.map(|v| v * multiplier)
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fibre: self.fibre + other.fibre,
            sugars: self.sugars + other.sugars,
            sodium_mg: self.sodium_mg + other.sodium_mg,
            saturated_fat: self.saturated_fat + other.saturated_fat,
        }
    }

    /// Round every value to one decimal place
    pub fn rounded(&self) -> Self {
        self.map(|v| (v * 10.0).round() / 10.0)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
            fibre: f(self.fibre),
            sugars: f(self.sugars),
            sodium_mg: f(self.sodium_mg),
            saturated_fat: f(self.saturated_fat),
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_facts_skips_unknown() {
        let facts = NutritionFacts {
            calories: Some(200.0),
            protein: Some(10.0),
            ..Default::default()
        };
        let n = Nutrition::from_facts(&facts, 50.0);
        assert_eq!(n.calories, 100.0);
        assert_eq!(n.protein, 5.0);
        assert_eq!(n.fat, 0.0);
    }

    #[test]
    fn test_sum_and_scale() {
        let a = Nutrition { calories: 100.0, fat: 2.0, ..Default::default() };
        let b = Nutrition { calories: 50.0, fat: 1.0, ..Default::default() };
        let total: Nutrition = vec![a, b].into_iter().sum();
        assert_eq!(total.calories, 150.0);
        let half = total * 0.5;
        assert_eq!(half.calories, 75.0);
        assert_eq!(half.fat, 1.5);
    }

    #[test]
    fn test_rounded() {
        let n = Nutrition { calories: 123.456, protein: 0.04, ..Default::default() };
        let r = n.rounded();
        assert!((r.calories - 123.5).abs() < 1e-9);
        assert_eq!(r.protein, 0.0);
    }
}
