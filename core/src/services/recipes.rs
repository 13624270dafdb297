use std::sync::Arc;

use mealplan_common::error::{MenuError, Result};
use mealplan_common::nutrition::{IngredientId, Portion, Recipe, RecipeId};
use mealplan_common::repository::{IngredientRepository, RecipeRepository};
use serde::Deserialize;
use tracing::{debug, info};

/// A recipe as submitted by a user: ingredients by id, not yet resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<(f64, IngredientId)>,
    #[serde(rename = "yield", alias = "yield_")]
    pub yield_: u32,
}

pub struct RecipeService {
    recipe_repo: Arc<dyn RecipeRepository>,
    ingredient_repo: Arc<dyn IngredientRepository>,
}

impl RecipeService {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
    ) -> Self {
        Self {
            recipe_repo,
            ingredient_repo,
        }
    }

    pub fn get(&self, recipe_id: &RecipeId) -> Result<Arc<Recipe>> {
        self.recipe_repo
            .find(recipe_id)
            .ok_or(MenuError::RecipeNotFound(*recipe_id))
    }

    pub fn list(&self) -> Vec<Arc<Recipe>> {
        self.recipe_repo.all()
    }

    /// Resolves the draft's ingredients, stores it under a fresh id and returns it.
    ///
    /// Nothing is stored if any ingredient is unknown.
    pub fn create(&self, draft: RecipeDraft) -> Result<Arc<Recipe>> {
        let portions = draft
            .ingredients
            .into_iter()
            .map(|(grams, ingredient_id)| {
                self.ingredient_repo
                    .find(&ingredient_id)
                    .map(|ingredient| Portion::new(grams, ingredient))
                    .ok_or(MenuError::IngredientNotFound(ingredient_id))
            })
            .collect::<Result<Vec<_>>>()?;

        let recipe = Recipe::new(RecipeId::new(), draft.name, portions, draft.yield_)?;
        debug!("Storing recipe {} ({})", recipe.id(), recipe.name());
        let recipe = self.recipe_repo.add(recipe);
        info!("Created recipe '{}'", recipe.name());
        Ok(recipe)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryIngredientRepository, InMemoryRecipeRepository};
    use mealplan_common::nutrition::{Ingredient, MacroNutrients};

    fn service() -> (RecipeService, Arc<InMemoryRecipeRepository>) {
        let eggplant = Ingredient::new("eggplant", MacroNutrients::new(1.0, 2.0, 3.0), 100.0);
        let recipes = Arc::new(InMemoryRecipeRepository::default());
        let ingredients = Arc::new(InMemoryIngredientRepository::new([eggplant]));
        (RecipeService::new(recipes.clone(), ingredients), recipes)
    }

    fn draft(ingredient: &str) -> RecipeDraft {
        RecipeDraft {
            name: "My super recipe".to_string(),
            ingredients: vec![(100.0, IngredientId::from(ingredient))],
            yield_: 2,
        }
    }

    #[test]
    fn test_non_existing_recipe_id() {
        let (service, _) = service();
        let id: RecipeId = "34516e5e-2d08-43a8-a640-3c8bede481fb".parse().unwrap();
        assert_eq!(service.get(&id), Err(MenuError::RecipeNotFound(id)));
    }

    #[test]
    fn test_create_happy_path() {
        let (service, repo) = service();
        let recipe = service.create(draft("eggplant")).unwrap();

        assert_eq!(recipe.name(), "My super recipe");
        assert_eq!(recipe.yield_(), 2);
        assert_eq!(recipe.ingredients().len(), 1);
        assert_eq!(recipe.ingredients()[0].grams, 100.0);
        assert_eq!(recipe.ingredients()[0].ingredient.id, IngredientId::from("eggplant"));
        assert_eq!(repo.find(&recipe.id()), Some(recipe.clone()));
        assert_eq!(service.get(&recipe.id()), Ok(recipe));
    }

    #[test]
    fn test_non_existing_ingredient_id() {
        let (service, repo) = service();
        let result = service.create(draft("aubergine"));

        assert_eq!(
            result,
            Err(MenuError::IngredientNotFound(IngredientId::from("aubergine")))
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn test_zero_yield_is_not_stored() {
        let (service, repo) = service();
        let mut invalid = draft("eggplant");
        invalid.yield_ = 0;

        assert!(matches!(service.create(invalid), Err(MenuError::InvalidRecipe(_))));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_list_follows_repository_order() {
        let (service, _) = service();
        let first = service.create(draft("eggplant")).unwrap();
        let second = service.create(draft("eggplant")).unwrap();

        assert_eq!(service.list(), vec![first, second]);
    }

    #[test]
    fn test_draft_from_json() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"name": "Baba ganoush", "ingredients": [[300, "eggplant"]], "yield": 4}"#,
        )
        .unwrap();
        assert_eq!(draft.ingredients, vec![(300.0, IngredientId::from("eggplant"))]);
        assert_eq!(draft.yield_, 4);
    }
}
