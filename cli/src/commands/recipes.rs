use colored::*;
use mealplan_common::config::Config;
use mealplan_common::nutrition::RecipeId;
use mealplan_core::context::AppContext;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn list(ctx: &AppContext, cfg: &Config) -> anyhow::Result<()> {
    let recipes = ctx.recipe_service.list();

    if recipes.is_empty() {
        print::header("empty recipe catalog", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("recipe catalog", cfg.quiet);
    for (idx, recipe) in recipes.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&format!("{} {}", recipe.id(), recipe.name())),
            _ => {
                print::tree_head(idx + 1, recipe.name());
                print::as_tree_one_level(format::recipe_to_details(recipe));
                if idx + 1 != recipes.len() {
                    mprint!();
                }
            }
        }
    }

    if cfg.quiet == 0 {
        let total: ColoredString = format!("{} recipes", recipes.len()).bold().green();
        print::fat_separator();
        print::centerln(&format!("Catalog holds {total}").color(colors::TEXT_DEFAULT).to_string());
    }
    Ok(())
}

pub fn show(ctx: &AppContext, recipe_id: &RecipeId, cfg: &Config) -> anyhow::Result<()> {
    let recipe = ctx.recipe_service.get(recipe_id)?;

    print::header(recipe.name(), cfg.quiet);
    print::tree_head(1, "Per serving");
    let mut per_serving = vec![
        (String::from("Servings"), recipe.yield_().to_string().normal()),
        (String::from("Energy"), format::kcal(recipe.kilocalories_per_serving())),
    ];
    per_serving.extend(format::macros_to_details(&recipe.macros_per_serving()));
    print::as_tree_one_level(per_serving);

    mprint!();
    print::tree_head(2, "Ingredients");
    print::as_tree_one_level(recipe.ingredients().iter().map(format::portion_to_detail).collect());

    print::fat_separator();
    Ok(())
}
