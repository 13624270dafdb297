pub mod menu;
pub mod recipes;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use mealplan_common::config::{Config, DEFAULT_INGREDIENTS_PATH, DEFAULT_RECIPES_PATH};
use mealplan_common::nutrition::{MacroNutrients, RecipeId};
use mealplan_core::services::DEFAULT_MENU_SIZE;

#[derive(Parser)]
#[command(name = "mealplan")]
#[command(about = "Plans menus out of a recipe catalog.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Ingredient catalog (JSON)
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_INGREDIENTS_PATH)]
    pub ingredients: PathBuf,

    /// Recipe catalog (JSON)
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_RECIPES_PATH)]
    pub recipes: PathBuf,

    /// Print less; repeat for bare results
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every recipe in the catalog
    #[command(alias = "r")]
    Recipes,
    /// Show one recipe in detail
    Recipe { id: RecipeId },
    /// Pick the best menu for a set of preferences
    #[command(alias = "m")]
    Menu(MenuArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MenuArgs {
    /// Number of meals
    #[arg(short, long, default_value_t = DEFAULT_MENU_SIZE)]
    pub size: usize,

    /// Exclude recipes containing this ingredient (repeatable)
    #[arg(short, long, value_name = "INGREDIENT")]
    pub restrict: Vec<String>,

    /// Target kilocalories for the whole menu
    #[arg(long, value_name = "KCAL", value_parser = parse_quantity)]
    pub kcal: Option<f64>,

    /// Target macros for the whole menu, in grams
    #[arg(long, value_name = "C,P,F", value_parser = parse_macros)]
    pub macros: Option<MacroNutrients>,

    /// JSON file holding a list of preference records
    #[arg(long, value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    /// Score candidates on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let (parallel, timeout) = match &self.command {
            Commands::Menu(args) => (args.parallel, args.timeout),
            _ => (false, None),
        };

        Config {
            ingredients_path: self.ingredients.clone(),
            recipes_path: self.recipes.clone(),
            parallel,
            timeout,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

/// A finite number; `inf` and `NaN` parse as `f64` but cannot be a target.
fn parse_quantity(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("'{s}': {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

fn parse_macros(s: &str) -> Result<MacroNutrients, String> {
    let values = s
        .split(',')
        .map(parse_quantity)
        .collect::<Result<Vec<f64>, String>>()?;

    match values.as_slice() {
        [carbohydrates, proteins, fats] => Ok(MacroNutrients::new(*carbohydrates, *proteins, *fats)),
        _ => Err(format!("expected carbohydrates,proteins,fats, got {} values", values.len())),
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("'{s}': {e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
