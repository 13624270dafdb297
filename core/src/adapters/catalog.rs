//! JSON catalog records.
//!
//! ```json
//! [{ "id": "bread", "macronutrients": { "carbohydrates": 49, "proteins": 9, "fats": 3.2 }, "kilocalories": 265 }]
//! ```
//!
//! Recipe records embed full ingredient records next to their quantity:
//!
//! ```json
//! [{ "id": "12345678123456781234567812345678", "name": "Toast", "yield": 1,
//!    "ingredients": [[60, { "id": "bread", ... }]] }]
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, ensure};
use mealplan_common::nutrition::{Ingredient, IngredientId, Portion, Recipe, RecipeId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub name: String,
    #[serde(rename = "yield", alias = "yield_")]
    pub yield_: u32,
    pub ingredients: Vec<(f64, Ingredient)>,
}

pub fn parse_ingredients(json: &str) -> anyhow::Result<Vec<Ingredient>> {
    let ingredients: Vec<Ingredient> =
        serde_json::from_str(json).context("malformed ingredient catalog")?;
    for ingredient in &ingredients {
        validate_ingredient(ingredient)?;
    }
    Ok(ingredients)
}

/// Parses a recipe catalog, keeping file order.
///
/// Identical embedded ingredients are shared between recipes instead of
/// being duplicated per portion.
pub fn parse_recipes(json: &str) -> anyhow::Result<Vec<Recipe>> {
    let records: Vec<RecipeRecord> =
        serde_json::from_str(json).context("malformed recipe catalog")?;
    let mut shared: HashMap<IngredientId, Arc<Ingredient>> = HashMap::new();

    records
        .into_iter()
        .map(|record| {
            let id = record.id;
            into_recipe(record, &mut shared).with_context(|| format!("recipe {id}"))
        })
        .collect()
}

fn into_recipe(
    record: RecipeRecord,
    shared: &mut HashMap<IngredientId, Arc<Ingredient>>,
) -> anyhow::Result<Recipe> {
    let mut portions = Vec::with_capacity(record.ingredients.len());
    for (grams, ingredient) in record.ingredients {
        validate_ingredient(&ingredient)?;
        let known = shared
            .get(&ingredient.id)
            .filter(|known| ***known == ingredient)
            .cloned();
        let ingredient = match known {
            Some(known) => known,
            None => {
                let ingredient = Arc::new(ingredient);
                shared
                    .entry(ingredient.id.clone())
                    .or_insert_with(|| Arc::clone(&ingredient));
                ingredient
            }
        };
        portions.push(Portion::new(grams, ingredient));
    }

    Ok(Recipe::new(record.id, record.name, portions, record.yield_)?)
}

fn validate_ingredient(ingredient: &Ingredient) -> anyhow::Result<()> {
    let macros = &ingredient.macronutrients;
    let values = [
        macros.carbohydrates,
        macros.proteins,
        macros.fats,
        ingredient.kilocalories,
    ];
    ensure!(
        values.iter().all(|value| value.is_finite() && *value >= 0.0),
        "ingredient '{}' has negative or non-finite nutrient values",
        ingredient.id
    );
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
