//! panscale
//!
//! Command-line front end for the recipe servings scaler.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use panscale::config::{Cli, Command};
use panscale::models::Recipe;
use panscale::tools::scaler::{self, ConvertRequest, PageSnapshot};
use panscale::tools::{status, units};

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays clean for output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("panscale=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Convert {
            quantity,
            unit_name,
            unit,
            scale,
        } => {
            let resp = scaler::convert_quantity(ConvertRequest {
                quantity,
                unit_name,
                unit,
                scale_factor: scale,
                system: cli.system,
            });
            if cli.json {
                print_json(&resp)?;
            } else {
                println!("{}", resp.display);
            }
        }
        Command::Recipe { path, servings } => {
            let recipe = Recipe::load(&path)?;
            tracing::info!(title = %recipe.title, ingredients = recipe.ingredients.len(), "loaded recipe");

            let resp = scaler::scale_recipe(&recipe, servings, cli.system)?;
            if cli.json {
                print_json(&resp)?;
            } else {
                println!(
                    "{} ({} servings, {})",
                    resp.title, resp.servings, resp.unit_label
                );
                for ingredient in &resp.ingredients {
                    if ingredient.notes.is_empty() {
                        println!("  {} {}", ingredient.amount, ingredient.name);
                    } else {
                        println!("  {} {}, {}", ingredient.amount, ingredient.name, ingredient.notes);
                    }
                }
                let n = &resp.nutrition_per_serving;
                println!(
                    "Per serving: {} kcal, {} g protein, {} g carbs, {} g fat",
                    n.calories, n.protein, n.carbs, n.fat
                );
            }
        }
        Command::Page { path } => {
            let page = PageSnapshot::load(&path)?;
            let resp = scaler::render_page(&page);
            if cli.json {
                print_json(&resp)?;
            } else {
                for amount in &resp.amounts {
                    println!("{}", amount);
                }
            }
        }
        Command::Units { kind } => {
            let resp = units::list_units(kind);
            if cli.json {
                print_json(&resp)?;
            } else {
                for unit in &resp.units {
                    match unit.grams_per_unit {
                        Some(g) => println!("{:<12} {:<9} {:?} ({} g)", unit.name, unit.abbreviation, unit.kind, g),
                        None => println!("{:<12} {:<9} {:?}", unit.name, unit.abbreviation, unit.kind),
                    }
                }
            }
        }
        Command::Status => {
            let resp = status::get_status();
            if cli.json {
                print_json(&resp)?;
            } else {
                println!("{}", resp.build);
                for info in &resp.unit_systems {
                    println!("{:?}: {}", info.system, info.label);
                }
                println!("Not scaled: {}", resp.non_scalable_units.join(", "));
            }
        }
    }

    Ok(())
}
