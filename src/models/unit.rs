//! Unit catalog
//!
//! The units recipes may be written in, with an approximate gram weight
//! used for nutrition estimates. Volumes assume water-like density and
//! count units use a typical item weight.

use serde::{Deserialize, Serialize};

/// Kind of measurement a unit expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Volume,
    Weight,
    Count,
}

impl UnitKind {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Some(UnitKind::Volume),
            "weight" => Some(UnitKind::Weight),
            "count" => Some(UnitKind::Count),
            _ => None,
        }
    }
}

/// A unit of measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub kind: UnitKind,
    /// Approximate grams in one unit, if meaningful
    pub grams_per_unit: Option<f64>,
}

const fn unit(
    name: &'static str,
    abbreviation: &'static str,
    kind: UnitKind,
    grams_per_unit: Option<f64>,
) -> Unit {
    Unit {
        name,
        abbreviation,
        kind,
        grams_per_unit,
    }
}

static CATALOG: &[Unit] = &[
    // Volume
    unit("Cup", "cup", UnitKind::Volume, Some(240.0)),
    unit("Tablespoon", "tbsp", UnitKind::Volume, Some(15.0)),
    unit("Teaspoon", "tsp", UnitKind::Volume, Some(5.0)),
    unit("Milliliter", "ml", UnitKind::Volume, Some(1.0)),
    unit("Liter", "L", UnitKind::Volume, Some(1000.0)),
    unit("Fluid Ounce", "fl oz", UnitKind::Volume, Some(30.0)),
    unit("Pint", "pt", UnitKind::Volume, Some(473.0)),
    unit("Quart", "qt", UnitKind::Volume, Some(946.0)),
    // Weight
    unit("Gram", "g", UnitKind::Weight, Some(1.0)),
    unit("Kilogram", "kg", UnitKind::Weight, Some(1000.0)),
    unit("Ounce", "oz", UnitKind::Weight, Some(28.3495)),
    unit("Pound", "lb", UnitKind::Weight, Some(453.592)),
    // Count
    unit("Piece", "pc", UnitKind::Count, Some(50.0)),
    unit("Each", "each", UnitKind::Count, Some(100.0)),
    unit("Slice", "slice", UnitKind::Count, Some(25.0)),
    unit("Clove", "clove", UnitKind::Count, Some(3.0)),
    unit("Bunch", "bunch", UnitKind::Count, Some(150.0)),
    unit("Package", "pkg", UnitKind::Count, Some(200.0)),
    unit("Can", "can", UnitKind::Count, Some(400.0)),
    // Not measurable
    unit("Pinch", "pinch", UnitKind::Volume, None),
    unit("Dash", "dash", UnitKind::Volume, None),
    unit("To taste", "to taste", UnitKind::Volume, None),
];

impl Unit {
    /// Every known unit
    pub fn catalog() -> &'static [Unit] {
        CATALOG
    }

    /// Find a unit by name or abbreviation, ignoring case
    pub fn find(name: &str) -> Option<&'static Unit> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return None;
        }
        CATALOG.iter().find(|u| {
            u.name.eq_ignore_ascii_case(wanted) || u.abbreviation.eq_ignore_ascii_case(wanted)
        })
    }

    /// Units of one kind, in catalog order
    pub fn of_kind(kind: UnitKind) -> Vec<&'static Unit> {
        CATALOG.iter().filter(|u| u.kind == kind).collect()
    }

    /// Convert a quantity of this unit to grams
    pub fn to_grams(&self, quantity: f64) -> Option<f64> {
        self.grams_per_unit.map(|g| quantity * g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_and_abbreviation() {
        assert_eq!(Unit::find("Gram").map(|u| u.abbreviation), Some("g"));
        assert_eq!(Unit::find("TBSP").map(|u| u.name), Some("Tablespoon"));
        assert_eq!(Unit::find("l").map(|u| u.name), Some("Liter"));
        assert_eq!(Unit::find(" fl oz ").map(|u| u.name), Some("Fluid Ounce"));
        assert!(Unit::find("scoop").is_none());
        assert!(Unit::find("").is_none());
    }

    #[test]
    fn test_of_kind() {
        let weights: Vec<_> = Unit::of_kind(UnitKind::Weight).iter().map(|u| u.name).collect();
        assert_eq!(weights, vec!["Gram", "Kilogram", "Ounce", "Pound"]);
        assert_eq!(Unit::of_kind(UnitKind::Count).len(), 7);
    }

    #[test]
    fn test_to_grams() {
        let cup = Unit::find("cup").unwrap();
        assert_eq!(cup.to_grams(2.0), Some(480.0));
        let pinch = Unit::find("pinch").unwrap();
        assert_eq!(pinch.to_grams(1.0), None);
    }

    #[test]
    fn test_unit_kind_from_str() {
        assert_eq!(UnitKind::from_str("Weight"), Some(UnitKind::Weight));
        assert_eq!(UnitKind::from_str("mass"), None);
    }
}
