#![cfg(test)]
use std::io::Write;
use std::path::PathBuf;

use mealplan_common::config::Config;
use mealplan_common::error::MenuError;
use mealplan_common::nutrition::IngredientId;
use mealplan_common::preference::PreferenceSpec;
use mealplan_common::repository::IngredientRepository;
use mealplan_core::adapters::{InMemoryIngredientRepository, InMemoryRecipeRepository};
use mealplan_core::context::AppContext;
use mealplan_core::services::{MenuRequest, RecipeDraft};
use tempfile::NamedTempFile;

use crate::fixtures;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join(name)
}

fn shipped_config() -> Config {
    Config {
        ingredients_path: data_file("ingredients.json"),
        recipes_path: data_file("recipes.json"),
        ..Config::default()
    }
}

#[test]
fn shipped_catalogs_load() {
    let ctx = AppContext::from_config(&shipped_config()).unwrap();

    let recipes = ctx.recipe_service.list();
    assert_eq!(recipes.len(), 8);
    assert_eq!(recipes[0].name(), "Chicken salad");
    assert_eq!(recipes[7].name(), "Peanut rice bowl");

    // Every ingredient a recipe embeds is also in the ingredient catalog.
    for recipe in &recipes {
        for id in recipe.ingredient_ids() {
            assert!(ctx.ingredients.find(id).is_some(), "{id} missing from catalog");
        }
    }
}

#[test]
fn shipped_catalogs_plan_a_peanut_free_week() {
    let ctx = AppContext::from_config(&shipped_config()).unwrap();

    let request = MenuRequest::new(
        7,
        vec![
            PreferenceSpec::restrict_ingredient("peanut"),
            PreferenceSpec::kilocalories(4500.0),
        ],
    );
    let created = ctx.menu_service.create(&request).unwrap();

    assert_eq!(created.menu.len(), 7);
    assert!(created.cost.is_finite());
    let peanut = IngredientId::from("peanut");
    assert!(created.menu.meals.iter().all(|meal| !meal.contains(&peanut)));
}

#[test]
fn catalog_written_to_disk_round_trips() {
    let mut ingredients = NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&fixtures::ingredients()).unwrap();
    ingredients.write_all(json.as_bytes()).unwrap();

    let repo = InMemoryIngredientRepository::from_file(ingredients.path()).unwrap();
    let loaded: Vec<_> = repo
        .all()
        .into_iter()
        .map(|ingredient| (*ingredient).clone())
        .collect();

    let mut expected = fixtures::ingredients();
    expected.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(loaded, expected);
}

#[test]
fn malformed_recipe_catalog_names_the_record() {
    let json = r#"[{"id": "0b5f1a34-54a2-4c38-9a5e-2d6f0f0f5b11", "name": "Nothing", "yield": 0, "ingredients": []}]"#;

    let err = InMemoryRecipeRepository::from_json(json).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("0b5f1a34-54a2-4c38-9a5e-2d6f0f0f5b11"), "{message}");
}

#[test]
fn recipes_created_at_runtime_join_the_pool() {
    let ctx = AppContext::from_config(&shipped_config()).unwrap();

    let draft: RecipeDraft = serde_json::from_str(
        r#"{"name": "Banana milk", "yield": 1, "ingredients": [[250, "milk"], [120, "banana"]]}"#,
    )
    .unwrap();
    let recipe = ctx.recipe_service.create(draft).unwrap();

    assert_eq!(ctx.recipe_service.get(&recipe.id()), Ok(recipe.clone()));
    assert_eq!(ctx.recipe_service.list().last(), Some(&recipe));

    let missing: RecipeDraft = serde_json::from_str(
        r#"{"name": "Mystery", "yield": 1, "ingredients": [[10, "unobtainium"]]}"#,
    )
    .unwrap();
    assert_eq!(
        ctx.recipe_service.create(missing),
        Err(MenuError::IngredientNotFound(IngredientId::from("unobtainium")))
    );
}
