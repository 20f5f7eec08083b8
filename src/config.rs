//! Command-line configuration
//!
//! Options fall back to `PANSCALE_*` environment variables.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use crate::error::{ScaleError, ScaleResult};
use crate::models::{UnitKind, MAX_SERVINGS, MIN_SERVINGS};
use crate::scaling::UnitSystem;

#[derive(Debug, Parser)]
#[command(name = "panscale", version, about = "Scale recipe servings and convert units")]
pub struct Cli {
    /// Unit system to display amounts in (metric or us)
    #[arg(long, global = true, env = "PANSCALE_UNIT_SYSTEM", default_value = "metric", value_parser = parse_unit_system)]
    pub system: UnitSystem,

    /// Print the tool response as JSON
    #[arg(long, global = true, env = "PANSCALE_JSON", value_parser = BoolishValueParser::new())]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a single quantity
    Convert {
        #[arg(allow_hyphen_values = true)]
        quantity: f64,
        /// Canonical unit name, e.g. "Milliliter" or "to taste"
        unit_name: String,
        /// Display abbreviation (defaults to the unit name)
        #[arg(long)]
        unit: Option<String>,
        /// Current servings divided by original servings
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Scale a JSON recipe document
    Recipe {
        path: PathBuf,
        /// Serving count to scale to (defaults to the recipe's own)
        #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_SERVINGS as i64..=MAX_SERVINGS as i64))]
        servings: Option<u32>,
    },
    /// Re-render a JSON page snapshot
    Page { path: PathBuf },
    /// List known units
    Units {
        /// Only units of this kind (volume, weight or count)
        #[arg(long, value_parser = parse_unit_kind)]
        kind: Option<UnitKind>,
    },
    /// Show build information and scaling rules
    Status,
}

/// Parse a unit system name for the command line
pub fn parse_unit_system(s: &str) -> ScaleResult<UnitSystem> {
    UnitSystem::from_str(s).ok_or_else(|| ScaleError::UnknownUnitSystem(s.to_string()))
}

fn parse_unit_kind(s: &str) -> Result<UnitKind, String> {
    UnitKind::from_str(s).ok_or_else(|| format!("unknown unit kind: {}", s))
}
