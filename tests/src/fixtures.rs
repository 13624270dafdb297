//! A small kitchen shared by the integration tests: four ingredients and
//! three recipes registered through the recipe use case.

use std::sync::Arc;

use mealplan_common::nutrition::{Ingredient, MacroNutrients, Recipe};
use mealplan_core::adapters::{InMemoryIngredientRepository, InMemoryMenuRepository, InMemoryRecipeRepository};
use mealplan_core::selector::{MenuSelector, SearchOptions};
use mealplan_core::services::{MenuService, RecipeDraft, RecipeService};

pub struct Kitchen {
    pub recipe_service: RecipeService,
    pub menu_service: MenuService,
    pub salad: Arc<Recipe>,
    pub sandwich: Arc<Recipe>,
    pub burger: Arc<Recipe>,
}

pub fn ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("bread", MacroNutrients::new(200.0, 100.0, 50.0), 100.0),
        Ingredient::new("chicken", MacroNutrients::new(0.0, 100.0, 10.0), 150.0),
        Ingredient::new("lettuce", MacroNutrients::new(10.0, 20.0, 0.0), 10.0),
        Ingredient::new("ground_beef", MacroNutrients::new(0.0, 100.0, 100.0), 300.0),
    ]
}

fn draft(name: &str, ingredients: &[(f64, &str)], yield_: u32) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        ingredients: ingredients
            .iter()
            .map(|&(grams, id)| (grams, id.into()))
            .collect(),
        yield_,
    }
}

/// Recipes are registered in the order burger, salad, sandwich.
pub fn kitchen(options: SearchOptions) -> Kitchen {
    let ingredient_repo = Arc::new(InMemoryIngredientRepository::new(ingredients()));
    let recipe_repo = Arc::new(InMemoryRecipeRepository::default());
    let menu_repo = Arc::new(InMemoryMenuRepository::new());

    let recipe_service = RecipeService::new(recipe_repo.clone(), ingredient_repo);
    let menu_service = MenuService::with_selector(recipe_repo, menu_repo, MenuSelector::new(options));

    let burger = recipe_service
        .create(draft(
            "Burger",
            &[(30.0, "lettuce"), (100.0, "bread"), (150.0, "ground_beef")],
            1,
        ))
        .unwrap();
    let salad = recipe_service
        .create(draft(
            "Salad",
            &[(100.0, "lettuce"), (10.0, "bread"), (20.0, "chicken")],
            2,
        ))
        .unwrap();
    let sandwich = recipe_service
        .create(draft(
            "Chicken sandwich",
            &[(30.0, "lettuce"), (70.0, "bread"), (150.0, "chicken")],
            1,
        ))
        .unwrap();

    Kitchen {
        recipe_service,
        menu_service,
        salad,
        sandwich,
        burger,
    }
}
