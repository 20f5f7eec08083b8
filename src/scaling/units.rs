//! Unit systems, keyword tables and conversion constants
//!
//! The US customary buckets use approximate kitchen values,
//! not the exact factors a nutrition calculation would use.

use serde::{Deserialize, Serialize};

/// Which unit system ingredient amounts are displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Scaled original quantity with its own abbreviation
    #[default]
    Metric,
    /// Approximate cups, tablespoons, teaspoons, ounces and pounds
    #[serde(rename = "us")]
    UsCustomary,
}

impl UnitSystem {
    /// Map the page's "American units" toggle onto a unit system
    pub fn from_toggle(american: bool) -> Self {
        if american {
            UnitSystem::UsCustomary
        } else {
            UnitSystem::Metric
        }
    }

    /// Text shown next to the toggle
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::UsCustomary => "US",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "us" | "us-customary" | "american" | "imperial" => Some(UnitSystem::UsCustomary),
            _ => None,
        }
    }
}

// ============================================================================
// Non-scalable units
// ============================================================================

/// Unit-name keywords whose amounts never scale with servings
pub const NON_SCALABLE_UNITS: &[&str] = &[
    "to taste", "taste", "pinch", "dash", "handful", "splash", "drizzle", "sprinkle", "garnish",
];

/// Whether a canonical unit name marks an amount that does not scale
///
/// Matching is a case-insensitive substring test, so "A Pinch" and
/// "salt to taste" both qualify.
pub fn is_non_scalable(unit_name: &str) -> bool {
    let lower = unit_name.to_lowercase();
    NON_SCALABLE_UNITS.iter().any(|keyword| lower.contains(keyword))
}

// ============================================================================
// US customary approximations
// ============================================================================

/// Milliliters per cup
pub const ML_PER_CUP: f64 = 240.0;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 5.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.6;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.35;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.2;
/// Cups per liter
pub const CUPS_PER_LITER: f64 = 4.2;

/// Milliliter amounts at or above this are shown as cups (pluralised by count)
pub const ML_LARGE_CUPS_THRESHOLD: f64 = 1000.0;
/// Milliliter amounts at or above this are shown as cups
pub const ML_CUPS_THRESHOLD: f64 = 250.0;
/// Milliliter amounts at or above this are shown as tablespoons
pub const ML_TBSP_THRESHOLD: f64 = 15.0;
/// Gram amounts at or above this are shown as pounds
pub const G_LB_THRESHOLD: f64 = 450.0;
/// Gram amounts strictly above this use "Lbs"
pub const G_LBS_PLURAL_THRESHOLD: f64 = 900.0;
/// Gram amounts at or above this are shown as ounces
pub const G_OZ_THRESHOLD: f64 = 28.0;

/// Unit families the US customary conversion knows how to re-express
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsUnitFamily {
    Milliliter,
    Gram,
    Kilogram,
    Liter,
}

/// Keywords identifying a unit family
#[derive(Debug, Clone, Copy)]
pub struct UnitMatcher {
    pub family: UsUnitFamily,
    /// Matches when the lowercased unit name contains any of these
    pub contains: &'static [&'static str],
    /// Matches when the lowercased unit name is exactly one of these
    pub equals: &'static [&'static str],
}

impl UnitMatcher {
    pub fn matches(&self, lower_unit_name: &str) -> bool {
        self.contains.iter().any(|k| lower_unit_name.contains(k))
            || self.equals.iter().any(|k| lower_unit_name == *k)
    }
}

/// US conversion dispatch order. Earlier entries win, which matters for
/// overlapping names: "kilogram" also contains "gram".
pub const US_UNIT_MATCHERS: &[UnitMatcher] = &[
    UnitMatcher {
        family: UsUnitFamily::Milliliter,
        contains: &["ml", "milliliter"],
        equals: &[],
    },
    UnitMatcher {
        family: UsUnitFamily::Gram,
        contains: &["gram"],
        equals: &["g"],
    },
    UnitMatcher {
        family: UsUnitFamily::Kilogram,
        contains: &["kilogram"],
        equals: &["kg"],
    },
    UnitMatcher {
        family: UsUnitFamily::Liter,
        contains: &["liter"],
        equals: &["l"],
    },
];

/// All families a unit name matches, in dispatch order
pub fn matching_families(unit_name: &str) -> Vec<UsUnitFamily> {
    let lower = unit_name.to_lowercase();
    US_UNIT_MATCHERS
        .iter()
        .filter(|m| m.matches(&lower))
        .map(|m| m.family)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_scalable_case_insensitive() {
        assert!(is_non_scalable("To Taste"));
        assert!(is_non_scalable("PINCH"));
        assert!(is_non_scalable("a small handful"));
        assert!(is_non_scalable("Garnish"));
        assert!(!is_non_scalable("Gram"));
        assert!(!is_non_scalable(""));
    }

    #[test]
    fn test_unit_system_label() {
        assert_eq!(UnitSystem::Metric.label(), "Metric");
        assert_eq!(UnitSystem::UsCustomary.label(), "US");
        assert_eq!(UnitSystem::from_toggle(true), UnitSystem::UsCustomary);
        assert_eq!(UnitSystem::from_toggle(false), UnitSystem::Metric);
    }

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!(UnitSystem::from_str("metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str(" US "), Some(UnitSystem::UsCustomary));
        assert_eq!(UnitSystem::from_str("martian"), None);
    }

    #[test]
    fn test_unit_system_serde() {
        let json = serde_json::to_string(&UnitSystem::UsCustomary).unwrap();
        assert_eq!(json, "\"us\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }

    #[test]
    fn test_matching_families_order() {
        assert_eq!(matching_families("Milliliter"), vec![UsUnitFamily::Milliliter, UsUnitFamily::Liter]);
        assert_eq!(matching_families("Kilogram"), vec![UsUnitFamily::Gram, UsUnitFamily::Kilogram]);
        assert_eq!(matching_families("g"), vec![UsUnitFamily::Gram]);
        assert_eq!(matching_families("L"), vec![UsUnitFamily::Liter]);
        assert!(matching_families("Tablespoon").is_empty());
    }
}
