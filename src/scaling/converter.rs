//! Quantity scaling and display conversion
//!
//! Turns an ingredient's stored quantity into the text shown for the
//! currently selected servings and unit system.

use super::format::{format_quantity, to_fixed_1};
use super::units::{
    is_non_scalable, matching_families, UnitSystem, UsUnitFamily, CUPS_PER_LITER,
    G_LBS_PLURAL_THRESHOLD, G_LB_THRESHOLD, G_OZ_THRESHOLD, G_PER_LB, G_PER_OZ, LB_PER_KG,
    ML_CUPS_THRESHOLD, ML_LARGE_CUPS_THRESHOLD, ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP, ML_TBSP_THRESHOLD,
};

/// Render an ingredient amount for display
///
/// # Arguments
/// * `original_quantity` - Quantity as stored for the recipe's original servings
/// * `unit_name` - Canonical unit name (e.g. "Milliliter", "to taste")
/// * `unit` - Display abbreviation (e.g. "ml")
/// * `scale_factor` - Current servings divided by original servings
/// * `system` - Unit system to display in
///
/// Non-scalable unit names are returned verbatim, ignoring the quantity.
pub fn render(
    original_quantity: f64,
    unit_name: &str,
    unit: &str,
    scale_factor: f64,
    system: UnitSystem,
) -> String {
    if is_non_scalable(unit_name) {
        return unit_name.to_string();
    }

    match system {
        UnitSystem::Metric => to_metric(original_quantity, unit, scale_factor),
        UnitSystem::UsCustomary => to_us_customary(original_quantity, unit_name, scale_factor),
    }
}

/// Scaled quantity followed by the original abbreviation, e.g. "1.5 ml"
pub fn to_metric(quantity: f64, unit: &str, scale_factor: f64) -> String {
    let scaled = quantity * scale_factor;
    format!("{} {}", format_quantity(scaled), unit)
}

/// Approximate US customary rendering of a scaled quantity
///
/// Units with no US counterpart keep the metric-style number and the
/// canonical unit name.
pub fn to_us_customary(quantity: f64, unit_name: &str, scale_factor: f64) -> String {
    if is_non_scalable(unit_name) {
        return unit_name.to_string();
    }

    let scaled = quantity * scale_factor;

    matching_families(unit_name)
        .into_iter()
        .find_map(|family| convert_family(family, scaled))
        .unwrap_or_else(|| format!("{} {}", format_quantity(scaled), unit_name))
}

/// Convert a scaled amount within one unit family
///
/// Returns `None` when the family has no bucket for this amount, letting
/// the next matching family try.
fn convert_family(family: UsUnitFamily, scaled: f64) -> Option<String> {
    match family {
        UsUnitFamily::Milliliter => Some(milliliters_to_us(scaled)),
        UsUnitFamily::Gram => grams_to_us(scaled),
        UsUnitFamily::Kilogram => Some(format!("{} Lbs", to_fixed_1(scaled * LB_PER_KG))),
        UsUnitFamily::Liter => Some(format!("{} Cups", to_fixed_1(scaled * CUPS_PER_LITER))),
    }
}

fn milliliters_to_us(ml: f64) -> String {
    if ml >= ML_LARGE_CUPS_THRESHOLD {
        let cups = ml / ML_PER_CUP;
        let suffix = if cups > 1.0 { "s" } else { "" };
        format!("{} Cup{}", to_fixed_1(cups), suffix)
    } else if ml >= ML_CUPS_THRESHOLD {
        format!("{} Cups", to_fixed_1(ml / ML_PER_CUP))
    } else if ml >= ML_TBSP_THRESHOLD {
        format!("{} Tbsp", to_fixed_1(ml / ML_PER_TBSP))
    } else {
        format!("{} Tsp", to_fixed_1(ml / ML_PER_TSP))
    }
}

fn grams_to_us(grams: f64) -> Option<String> {
    if grams >= G_LB_THRESHOLD {
        let suffix = if grams > G_LBS_PLURAL_THRESHOLD { "s" } else { "" };
        Some(format!("{} Lb{}", to_fixed_1(grams / G_PER_LB), suffix))
    } else if grams >= G_OZ_THRESHOLD {
        Some(format!("{} Oz", to_fixed_1(grams / G_PER_OZ)))
    } else {
        None
    }
}
