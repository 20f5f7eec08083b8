//! Unit Catalog Tools

use serde::Serialize;

use crate::models::{Unit, UnitKind};

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<Unit>,
    pub count: usize,
}

/// List known units, optionally only those of one kind
pub fn list_units(kind: Option<UnitKind>) -> ListUnitsResponse {
    let units: Vec<Unit> = match kind {
        Some(kind) => Unit::of_kind(kind).into_iter().cloned().collect(),
        None => Unit::catalog().to_vec(),
    };

    ListUnitsResponse {
        count: units.len(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_units() {
        let resp = list_units(None);
        assert_eq!(resp.count, Unit::catalog().len());
        assert_eq!(resp.units[0].name, "Cup");
    }

    #[test]
    fn test_list_units_by_kind() {
        let resp = list_units(Some(UnitKind::Weight));
        assert_eq!(resp.count, 4);
        assert!(resp.units.iter().all(|u| u.kind == UnitKind::Weight));
    }

    #[test]
    fn test_list_units_serializes() {
        let json = serde_json::to_value(list_units(Some(UnitKind::Weight))).unwrap();
        assert_eq!(json["units"][0]["abbreviation"], "g");
        assert_eq!(json["units"][0]["kind"], "weight");
    }
}
